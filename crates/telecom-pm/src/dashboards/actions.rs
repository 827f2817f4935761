use super::domain::Role;
use super::router::RoleRouter;
use super::sample::DataSource;
use serde::Serialize;
use tracing::info;

/// Transient acknowledgement of a dashboard button press.
///
/// Nothing is written back to the data source; rendering the dashboard again
/// shows the item unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub role: Role,
    pub item_key: String,
    pub action: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("no item `{item_key}` on the {role} dashboard")]
    ItemNotFound { role: &'static str, item_key: String },
    #[error("item `{item_key}` has no action available")]
    NotActionable { item_key: String },
}

pub fn perform_action(
    role: Role,
    item_key: &str,
    source: &dyn DataSource,
) -> Result<ActionOutcome, ActionError> {
    let view = RoleRouter.dispatch(role, source);
    let item = view
        .queue_item(item_key)
        .ok_or_else(|| ActionError::ItemNotFound {
            role: role.label(),
            item_key: item_key.to_string(),
        })?;

    let action = item
        .action
        .as_ref()
        .ok_or_else(|| ActionError::NotActionable {
            item_key: item_key.to_string(),
        })?;

    info!(
        role = role.label(),
        item_key,
        action = %action.label,
        "dashboard action acknowledged"
    );

    Ok(ActionOutcome {
        role,
        item_key: item.key.clone(),
        action: action.label.clone(),
        message: action.success_message.clone(),
    })
}
