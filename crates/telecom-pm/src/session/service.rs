use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::context::{SessionContext, SessionError};
use super::store::{SessionId, SessionRecord, SessionStore, StoreError};
use crate::dashboards::{DashboardView, DataSource, RoleRouter};

/// Service composing the session store, the role router, and the data source.
pub struct SessionService<S> {
    store: Arc<S>,
    source: Arc<dyn DataSource>,
    router: RoleRouter,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S> SessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, source: Arc<dyn DataSource>) -> Self {
        Self {
            store,
            source,
            router: RoleRouter,
        }
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// Open a session for the selected role. Nothing is stored on failure.
    pub fn login(&self, raw_role: &str) -> Result<SessionRecord, SessionServiceError> {
        let mut context = SessionContext::new();
        let role = context.select_role(raw_role)?;

        let now = Utc::now();
        let record = SessionRecord {
            id: next_session_id(),
            context,
            created_at: now,
            updated_at: now,
        };
        let record = self.store.insert(record)?;

        info!(session_id = %record.id, role = role.label(), "session opened");
        Ok(record)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        self.store
            .fetch(id)?
            .ok_or(SessionServiceError::Store(StoreError::NotFound))
    }

    /// Pick a role on an existing session, e.g. after switching away.
    pub fn select_role(
        &self,
        id: &SessionId,
        raw_role: &str,
    ) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self.get(id)?;
        let role = record.context.select_role(raw_role)?;
        record.updated_at = Utc::now();
        self.store.update(record.clone())?;

        info!(session_id = %record.id, role = role.label(), "role selected");
        Ok(record)
    }

    /// Clear the role and send the session back to the login screen.
    pub fn switch_role(&self, id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self.get(id)?;
        let previous = record.context.switch_role();
        record.updated_at = Utc::now();
        self.store.update(record.clone())?;

        info!(
            session_id = %record.id,
            previous_role = previous.map(|role| role.label()).unwrap_or("none"),
            "role cleared"
        );
        Ok(record)
    }

    /// Render the session's dashboard; `None` while it sits at login.
    pub fn dashboard(&self, id: &SessionId) -> Result<Option<DashboardView>, SessionServiceError> {
        let record = self.get(id)?;
        Ok(record.context.dashboard(&self.router, self.source()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
