use super::domain::{DepartmentScore, Role, Severity};
use serde::Serialize;

/// Identifies which of the five builders produced a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    FieldOperations,
    InventoryApprovals,
    BillingReadiness,
    PurchaseOrderProcessing,
    ExecutiveOverview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

impl MetricTile {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthBucket {
    pub severity: Severity,
    pub severity_label: &'static str,
    pub marker: &'static str,
    pub count_label: &'static str,
    pub description: &'static str,
}

impl HealthBucket {
    pub fn new(severity: Severity, count_label: &'static str, description: &'static str) -> Self {
        Self {
            severity,
            severity_label: severity.label(),
            marker: severity.marker(),
            count_label,
            description,
        }
    }

    /// One-line banner, e.g. `🟡 Risk: 3 projects - Requires attention`.
    pub fn banner(&self) -> String {
        format!(
            "{} {}: {} - {}",
            self.marker, self.severity_label, self.count_label, self.description
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

impl DetailLine {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Button offered on a queue item. Pressing it only yields `success_message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAction {
    pub label: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueItemView {
    pub key: String,
    pub heading: String,
    pub status_label: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub marker: &'static str,
    pub details: Vec<DetailLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ItemAction>,
}

impl QueueItemView {
    pub fn new(
        key: impl Into<String>,
        heading: impl Into<String>,
        status_label: &'static str,
        severity: Severity,
    ) -> Self {
        Self {
            key: key.into(),
            heading: heading.into(),
            status_label,
            severity,
            severity_label: severity.label(),
            marker: severity.marker(),
            details: Vec::new(),
            action: None,
        }
    }

    pub fn detail(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.details.push(DetailLine::new(label, value));
        self
    }

    pub fn action(mut self, label: impl Into<String>, success_message: impl Into<String>) -> Self {
        self.action = Some(ItemAction {
            label: label.into(),
            success_message: success_message.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueView {
    pub heading: &'static str,
    pub items: Vec<QueueItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub role: Role,
    pub role_label: &'static str,
    pub kind: ViewKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<MetricTile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_health: Vec<HealthBucket>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub department_performance: Vec<DepartmentScore>,
}

impl DashboardView {
    pub(crate) fn new(role: Role, kind: ViewKind) -> Self {
        Self {
            role,
            role_label: role.label(),
            kind,
            title: format!("{} Dashboard", role.title()),
            metrics: Vec::new(),
            queue: None,
            project_health: Vec::new(),
            department_performance: Vec::new(),
        }
    }

    pub fn queue_item(&self, key: &str) -> Option<&QueueItemView> {
        self.queue
            .as_ref()
            .and_then(|queue| queue.items.iter().find(|item| item.key == key))
    }
}
