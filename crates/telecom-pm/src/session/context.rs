use crate::dashboards::{DashboardView, DataSource, Role, RoleRouter, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("please select a role to enter the dashboard")]
    MissingRole,
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

/// Per-user state for a dashboard session. `None` means the login screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    role: Option<Role>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    /// Enter the dashboard for the role named by `raw_role`.
    pub fn select_role(&mut self, raw_role: &str) -> Result<Role, SessionError> {
        let trimmed = raw_role.trim();
        if trimmed.is_empty() {
            return Err(SessionError::MissingRole);
        }

        let role =
            Role::parse(trimmed).ok_or_else(|| SessionError::UnknownRole(trimmed.to_string()))?;
        self.role = Some(role);
        Ok(role)
    }

    /// Return to the login screen, handing back the role that was active.
    pub fn switch_role(&mut self) -> Option<Role> {
        self.role.take()
    }

    /// The directory entry for the signed-in role, if the source lists one.
    pub fn user(&self, source: &dyn DataSource) -> Option<User> {
        let role = self.role?;
        source.users().into_iter().find(|user| user.role == role)
    }

    pub fn dashboard(&self, router: &RoleRouter, source: &dyn DataSource) -> Option<DashboardView> {
        self.role.map(|role| router.dispatch(role, source))
    }
}
