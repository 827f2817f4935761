//! Login and role selection.
//!
//! The current role lives in an explicit [`SessionContext`] that callers pass
//! around; the HTTP layer keeps one per session id in a [`SessionStore`].

pub mod context;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use context::{SessionContext, SessionError};
pub use router::session_router;
pub use service::{SessionService, SessionServiceError};
pub use store::{SessionId, SessionRecord, SessionStore, SessionView, StoreError};
