use chrono::Local;
use clap::Args;
use std::fmt::{self, Write as _};
use telecom_pm::dashboards::{
    classify_pending, DashboardView, Role, RoleRouter, SampleData, Severity,
};
use telecom_pm::error::AppError;
use telecom_pm::session::SessionContext;

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Role label as shown in the picker: "Field TL", "IM", "PM", "Billing Team" or "GM"
    #[arg(long)]
    pub(crate) role: String,
    /// Print the view model as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each view model as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Status label, e.g. "In Progress"
    pub(crate) status: String,
    /// Days the item has been waiting
    #[arg(long)]
    pub(crate) days_pending: Option<u32>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs { role, json } = args;

    let role = SessionContext::new().select_role(&role)?;
    let view = RoleRouter.dispatch(role, &SampleData);

    print_view(&view, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!(
        "Telecom Project Manager demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut context = SessionContext::new();
    for role in Role::ordered() {
        context.select_role(role.label())?;
        if let Some(view) = context.dashboard(&RoleRouter, &SampleData) {
            println!();
            if let Some(user) = context.user(&SampleData) {
                println!("Signed in as {} ({})", user.display_name, user.email);
            }
            print_view(&view, args.json)?;
        }
        context.switch_role();
    }

    Ok(())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let severity = classify_pending(&args.status, args.days_pending);
    println!("{}", classification_line(&args.status, args.days_pending, severity));
    Ok(())
}

fn classification_line(status: &str, days_pending: Option<u32>, severity: Severity) -> String {
    match days_pending {
        Some(days) => format!(
            "{} {} ({status}, {days} days pending)",
            severity.marker(),
            severity.label()
        ),
        None => format!("{} {} ({status})", severity.marker(), severity.label()),
    }
}

fn print_view(view: &DashboardView, json: bool) -> Result<(), AppError> {
    let rendered = if json {
        serde_json::to_string_pretty(view)
            .map(|payload| payload + "\n")
            .map_err(std::io::Error::other)?
    } else {
        format_dashboard(view).map_err(std::io::Error::other)?
    };
    print!("{rendered}");
    Ok(())
}

pub(crate) fn format_dashboard(view: &DashboardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", view.title)?;

    if !view.metrics.is_empty() {
        let tiles: Vec<String> = view
            .metrics
            .iter()
            .map(|tile| format!("{}: {}", tile.label, tile.value))
            .collect();
        writeln!(out, "{}", tiles.join(" | "))?;
    }

    if let Some(queue) = &view.queue {
        writeln!(out, "\n{}", queue.heading)?;
        for item in &queue.items {
            writeln!(out, "{} {}", item.marker, item.heading)?;
            for detail in &item.details {
                writeln!(out, "    {}: {}", detail.label, detail.value)?;
            }
            if let Some(action) = &item.action {
                writeln!(out, "    [{}]", action.label)?;
            }
        }
    }

    if !view.project_health.is_empty() {
        writeln!(out, "\nProject Health Status")?;
        for bucket in &view.project_health {
            writeln!(out, "{}", bucket.banner())?;
        }
    }

    if !view.department_performance.is_empty() {
        writeln!(out, "\nDepartment Performance")?;
        for score in &view.department_performance {
            writeln!(
                out,
                "- {}: {}% efficiency",
                score.department, score.efficiency_pct
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_dashboard_text_lists_plans_and_actions() {
        let view = RoleRouter.dispatch(Role::FieldTeamLead, &SampleData);
        let text = format_dashboard(&view).expect("text renders");
        assert!(text.starts_with("Field Team Lead Dashboard\n"));
        assert!(text.contains("Assigned Sites: 3 | Completed: 1"));
        assert!(text.contains("🔴 MDN2178 - Survey"));
        assert!(text.contains("[Update MDN2176]"));
        assert!(text.contains("    Progress: 60%"));
    }

    #[test]
    fn gm_dashboard_text_includes_health_and_departments() {
        let view = RoleRouter.dispatch(Role::GeneralManager, &SampleData);
        let text = format_dashboard(&view).expect("text renders");
        assert!(text.contains("🟢 Normal: 10 projects - All milestones on track"));
        assert!(text.contains("- IM Team: 70% efficiency"));
    }

    #[test]
    fn classification_line_mentions_pending_days() {
        assert_eq!(
            classification_line("Pending", Some(2), Severity::Overdue),
            "🔴 Overdue (Pending, 2 days pending)"
        );
        assert_eq!(
            classification_line("At Risk", None, Severity::Risk),
            "🟡 Risk (At Risk)"
        );
    }

    #[test]
    fn unknown_role_is_reported() {
        let err = run_dashboard(DashboardArgs {
            role: "CEO".to_string(),
            json: false,
        })
        .expect_err("unknown role");
        assert!(err.to_string().contains("CEO"));
    }

    #[test]
    fn approval_text_lists_stage_flags() {
        let view = RoleRouter.dispatch(Role::InventoryManager, &SampleData);
        let text = format_dashboard(&view).expect("text renders");
        assert!(text.contains("🟢 Site Gamma Survey\n"));
        assert!(text.contains("    IM Approved: Yes"));
    }

    #[test]
    fn dashboard_command_accepts_padded_labels() {
        run_dashboard(DashboardArgs {
            role: " PM ".to_string(),
            json: true,
        })
        .expect("padded label renders");
    }
}
