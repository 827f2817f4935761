use super::builders;
use super::domain::Role;
use super::sample::DataSource;
use super::views::DashboardView;
use tracing::debug;

pub type ViewBuilder = fn(&dyn DataSource) -> DashboardView;

/// Dispatches a selected role to the one builder that renders its dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleRouter;

impl RoleRouter {
    pub fn builder_for(role: Role) -> ViewBuilder {
        match role {
            Role::FieldTeamLead => builders::field_team_lead_view,
            Role::InventoryManager => builders::inventory_manager_view,
            Role::ProjectManager => builders::project_manager_view,
            Role::BillingTeam => builders::billing_team_view,
            Role::GeneralManager => builders::general_manager_view,
        }
    }

    /// Full dispatch table in picker order.
    pub fn routes(&self) -> Vec<(Role, ViewBuilder)> {
        Role::ordered()
            .into_iter()
            .map(|role| (role, Self::builder_for(role)))
            .collect()
    }

    pub fn dispatch(&self, role: Role, source: &dyn DataSource) -> DashboardView {
        debug!(role = role.label(), "rendering dashboard");
        Self::builder_for(role)(source)
    }

    /// Resolve a raw role string. Unknown roles render nothing.
    pub fn route(&self, raw_role: &str, source: &dyn DataSource) -> Option<DashboardView> {
        match Role::parse(raw_role) {
            Some(role) => Some(self.dispatch(role, source)),
            None => {
                debug!(raw_role, "no dashboard for unrecognized role");
                None
            }
        }
    }
}
