//! Role dashboards for the telecom site-installation tracker.
//!
//! Every view is rebuilt from a [`DataSource`] on each request; nothing here
//! holds state between renders.

pub mod actions;
mod builders;
pub mod domain;
pub mod router;
pub mod sample;
pub mod sheets;
pub mod status;
pub mod views;

pub use actions::{perform_action, ActionError, ActionOutcome};
pub use domain::{Role, Severity, User};
pub use router::RoleRouter;
pub use sample::{DataSource, SampleData};
pub use status::{classify, classify_pending, SeverityCounts};
pub use views::{DashboardView, ViewKind};
