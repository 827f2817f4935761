pub mod config;
pub mod dashboards;
pub mod error;
pub mod session;
pub mod telemetry;
