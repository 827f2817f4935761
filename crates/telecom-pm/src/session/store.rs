use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::context::SessionContext;
use crate::dashboards::{DataSource, Role};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub context: SessionContext,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Client-facing snapshot, with the signed-in user resolved against `source`.
    pub fn view(&self, source: &dyn DataSource) -> SessionView {
        let role = self.context.role();
        let user = self.context.user(source);
        SessionView {
            session_id: self.id.clone(),
            role,
            role_label: role.map(Role::label),
            user_email: user.as_ref().map(|user| user.email),
            display_name: user.as_ref().map(|user| user.display_name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so sessions can live in memory or elsewhere.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError>;
    fn update(&self, record: SessionRecord) -> Result<(), StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub role: Option<Role>,
    pub role_label: Option<&'static str>,
    pub user_email: Option<&'static str>,
    pub display_name: Option<&'static str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
