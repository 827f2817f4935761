//! Hook for an external spreadsheet backing the dashboards.
//!
//! No real connector ships with the crate. The stub always reports that no
//! sheet is available, and any connector failure is logged and swallowed so
//! the dashboards keep rendering sample data.

use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHandle {
    pub sheet_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("sheet credentials missing")]
    MissingCredentials,
    #[error("sheet backend unavailable: {0}")]
    Unavailable(String),
}

pub trait SheetConnector: Send + Sync {
    fn connect(&self, sheet_id: &str) -> Result<Option<SheetHandle>, SheetError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StubSheetConnector;

impl SheetConnector for StubSheetConnector {
    fn connect(&self, _sheet_id: &str) -> Result<Option<SheetHandle>, SheetError> {
        Ok(None)
    }
}

/// Where the dashboard records come from for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    ExternalSheet,
    Sample,
}

impl DataOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExternalSheet => "External sheet",
            Self::Sample => "Sample data",
        }
    }
}

/// Try the connector once. Errors are logged and treated as "no sheet".
pub fn initialize_sheet(
    connector: &dyn SheetConnector,
    sheet_id: Option<&str>,
) -> Option<SheetHandle> {
    let sheet_id = sheet_id?;
    match connector.connect(sheet_id) {
        Ok(Some(handle)) => {
            info!(sheet_id, "external sheet connected");
            Some(handle)
        }
        Ok(None) => {
            info!(sheet_id, "external sheet unavailable; using sample data");
            None
        }
        Err(err) => {
            warn!(sheet_id, error = %err, "external sheet initialization failed; using sample data");
            None
        }
    }
}

pub fn data_origin(handle: Option<&SheetHandle>) -> DataOrigin {
    match handle {
        Some(_) => DataOrigin::ExternalSheet,
        None => DataOrigin::Sample,
    }
}
