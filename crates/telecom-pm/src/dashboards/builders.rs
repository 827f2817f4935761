use super::domain::{ApprovalStages, Role};
use super::sample::DataSource;
use super::status::{classify, classify_pending};
use super::views::{DashboardView, QueueItemView, QueueView, ViewKind};

pub(crate) fn field_team_lead_view(source: &dyn DataSource) -> DashboardView {
    let mut view = DashboardView::new(Role::FieldTeamLead, ViewKind::FieldOperations);
    view.metrics = source.metrics(Role::FieldTeamLead);

    let activities = source.activities();
    let items = source
        .daily_plans()
        .into_iter()
        .map(|plan| {
            let progress = activities
                .iter()
                .find(|activity| activity.site_id == plan.site_id)
                .map(|activity| format!("{}%", activity.progress))
                .unwrap_or_else(|| "-".to_string());

            QueueItemView::new(
                plan.site_id,
                format!("{} - {}", plan.site_id, plan.activity),
                plan.status,
                classify(plan.status),
            )
            .detail("Status", plan.status)
            .detail("Assignee", plan.assignee)
            .detail("Progress", progress)
            .action(
                format!("Update {}", plan.site_id),
                format!("{} updated!", plan.site_id),
            )
        })
        .collect();

    view.queue = Some(QueueView {
        heading: "Daily Plans",
        items,
    });
    view
}

pub(crate) fn inventory_manager_view(source: &dyn DataSource) -> DashboardView {
    let mut view = DashboardView::new(Role::InventoryManager, ViewKind::InventoryApprovals);
    view.metrics = source.metrics(Role::InventoryManager);

    let items = source
        .approvals()
        .into_iter()
        .map(|approval| {
            let item = QueueItemView::new(
                approval.id,
                approval.activity,
                approval.status,
                classify_pending(approval.status, Some(approval.days_pending)),
            )
            .detail("Status", approval.status)
            .detail("Days Pending", approval.days_pending.to_string());
            let item = stage_details(approval.stages)
                .into_iter()
                .fold(item, |item, (label, value)| item.detail(label, value));

            // Only pending approvals can be signed off.
            if approval.is_pending() {
                item.action(format!("Approve {}", approval.activity), "Approved!")
            } else {
                item
            }
        })
        .collect();

    view.queue = Some(QueueView {
        heading: "Approval Queue",
        items,
    });
    view
}

pub(crate) fn project_manager_view(source: &dyn DataSource) -> DashboardView {
    let mut view = DashboardView::new(Role::ProjectManager, ViewKind::BillingReadiness);
    view.metrics = source.metrics(Role::ProjectManager);

    let items = source
        .billing_projects()
        .into_iter()
        .map(|project| {
            QueueItemView::new(
                item_key(project.name),
                project.name,
                project.status,
                classify_pending(project.status, Some(project.days_pending)),
            )
            .detail("Status", project.status)
            .detail("Documents", project.documents)
            .action(
                format!("Approve {}", project.name),
                format!("{} approved for billing!", project.name),
            )
        })
        .collect();

    view.queue = Some(QueueView {
        heading: "Billing Approval",
        items,
    });
    view
}

pub(crate) fn billing_team_view(source: &dyn DataSource) -> DashboardView {
    let mut view = DashboardView::new(Role::BillingTeam, ViewKind::PurchaseOrderProcessing);
    view.metrics = source.metrics(Role::BillingTeam);

    let items = source
        .purchase_orders()
        .into_iter()
        .map(|order| {
            QueueItemView::new(
                order.number,
                format!("{} - {}", order.number, order.amount_label()),
                order.status,
                classify_pending(order.status, Some(order.days_pending)),
            )
            .detail("Status", order.status)
            .action(
                format!("Process {}", order.number),
                format!("{} processed!", order.number),
            )
        })
        .collect();

    view.queue = Some(QueueView {
        heading: "PO Processing Queue",
        items,
    });
    view
}

pub(crate) fn general_manager_view(source: &dyn DataSource) -> DashboardView {
    let mut view = DashboardView::new(Role::GeneralManager, ViewKind::ExecutiveOverview);
    view.metrics = source.metrics(Role::GeneralManager);
    view.project_health = source.project_health();
    view.department_performance = source.department_scores();
    view
}

fn stage_details(stages: ApprovalStages) -> [(&'static str, &'static str); 3] {
    let flag = |done: bool| if done { "Yes" } else { "No" };
    [
        ("IM Approved", flag(stages.im_approved)),
        ("PM Approved", flag(stages.pm_approved)),
        ("Billing Processed", flag(stages.billing_processed)),
    ]
}

/// Lowercase, dash-separated key so names like `Site Alpha` fit in a URL path.
fn item_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
