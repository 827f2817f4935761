use super::domain::{
    Activity, Approval, ApprovalStages, BillingProject, DailyPlan, DepartmentScore,
    PurchaseOrder, Role, Severity, Site, User,
};
use super::views::{HealthBucket, MetricTile};

/// Read-only supply of the records the dashboards render.
pub trait DataSource: Send + Sync {
    fn users(&self) -> Vec<User>;
    fn sites(&self) -> Vec<Site>;
    fn daily_plans(&self) -> Vec<DailyPlan>;
    fn activities(&self) -> Vec<Activity>;
    fn approvals(&self) -> Vec<Approval>;
    fn billing_projects(&self) -> Vec<BillingProject>;
    fn purchase_orders(&self) -> Vec<PurchaseOrder>;
    fn department_scores(&self) -> Vec<DepartmentScore>;
    /// Headline tiles shown at the top of a role's dashboard.
    fn metrics(&self, role: Role) -> Vec<MetricTile>;
    fn project_health(&self) -> Vec<HealthBucket>;
}

/// Fixed demo records. Every call returns the same data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl DataSource for SampleData {
    fn users(&self) -> Vec<User> {
        vec![
            User {
                email: "Field TL@company.com",
                display_name: "Field Team Lead",
                role: Role::FieldTeamLead,
            },
            User {
                email: "IM@company.com",
                display_name: "Inventory Manager",
                role: Role::InventoryManager,
            },
            User {
                email: "PM@company.com",
                display_name: "Project Manager",
                role: Role::ProjectManager,
            },
            User {
                email: "Billing Team@company.com",
                display_name: "Billing Team",
                role: Role::BillingTeam,
            },
            User {
                email: "GM@company.com",
                display_name: "General Manager",
                role: Role::GeneralManager,
            },
        ]
    }

    fn sites(&self) -> Vec<Site> {
        vec![
            Site {
                id: "MDN2176",
                name: "Site Alpha",
                region: "North",
                customer: "Metro Mobile",
                status: "Assigned",
            },
            Site {
                id: "MDN2177",
                name: "Site Beta",
                region: "Central",
                customer: "Metro Mobile",
                status: "In Progress",
            },
            Site {
                id: "MDN2178",
                name: "Site Gamma",
                region: "South",
                customer: "Coastal Telecom",
                status: "Overdue",
            },
        ]
    }

    fn daily_plans(&self) -> Vec<DailyPlan> {
        vec![
            DailyPlan {
                id: "DP-001",
                site_id: "MDN2176",
                assignee: "Field Team 1",
                activity: "Installation",
                status: "Assigned",
            },
            DailyPlan {
                id: "DP-002",
                site_id: "MDN2177",
                assignee: "Field Team 2",
                activity: "QC Check",
                status: "In Progress",
            },
            DailyPlan {
                id: "DP-003",
                site_id: "MDN2178",
                assignee: "Field Team 3",
                activity: "Survey",
                status: "Overdue",
            },
        ]
    }

    fn activities(&self) -> Vec<Activity> {
        vec![
            Activity {
                id: "ACT-001",
                site_id: "MDN2176",
                status: "Completed",
                progress: 100,
            },
            Activity {
                id: "ACT-002",
                site_id: "MDN2177",
                status: "In Progress",
                progress: 60,
            },
            Activity {
                id: "ACT-003",
                site_id: "MDN2178",
                status: "Overdue",
                progress: 20,
            },
        ]
    }

    fn approvals(&self) -> Vec<Approval> {
        vec![
            Approval {
                id: "APR-001",
                activity_id: "ACT-001",
                activity: "Site Alpha Installation",
                status: "Pending",
                days_pending: 1,
                stages: ApprovalStages::default(),
            },
            Approval {
                id: "APR-002",
                activity_id: "ACT-002",
                activity: "Site Beta QC",
                status: "Pending",
                days_pending: 2,
                stages: ApprovalStages::default(),
            },
            Approval {
                id: "APR-003",
                activity_id: "ACT-003",
                activity: "Site Gamma Survey",
                status: "Approved",
                days_pending: 0,
                stages: ApprovalStages {
                    im_approved: true,
                    ..ApprovalStages::default()
                },
            },
        ]
    }

    fn billing_projects(&self) -> Vec<BillingProject> {
        vec![
            BillingProject {
                name: "Site Alpha",
                status: "Ready",
                documents: "Complete",
                days_pending: 0,
            },
            BillingProject {
                name: "Site Beta",
                status: "Docs Pending",
                documents: "Incomplete",
                days_pending: 1,
            },
            BillingProject {
                name: "Site Gamma",
                status: "Overdue",
                documents: "Missing",
                days_pending: 0,
            },
        ]
    }

    fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        vec![
            PurchaseOrder {
                number: "PO-001",
                amount_usd: 1_500,
                status: "Ready",
                days_pending: 0,
            },
            PurchaseOrder {
                number: "PO-002",
                amount_usd: 2_300,
                status: "Pending",
                days_pending: 1,
            },
            PurchaseOrder {
                number: "PO-003",
                amount_usd: 3_100,
                status: "Overdue",
                days_pending: 0,
            },
        ]
    }

    fn department_scores(&self) -> Vec<DepartmentScore> {
        vec![
            DepartmentScore {
                department: "Field Teams",
                efficiency_pct: 85,
            },
            DepartmentScore {
                department: "IM Team",
                efficiency_pct: 70,
            },
            DepartmentScore {
                department: "PM Team",
                efficiency_pct: 80,
            },
            DepartmentScore {
                department: "Billing",
                efficiency_pct: 75,
            },
        ]
    }

    fn metrics(&self, role: Role) -> Vec<MetricTile> {
        let tiles: &[(&'static str, &'static str)] = match role {
            Role::FieldTeamLead => &[
                ("Assigned Sites", "3"),
                ("Completed", "1"),
                ("In Progress", "1"),
                ("Overdue", "1"),
            ],
            Role::InventoryManager => &[
                ("Total Sites", "15"),
                ("Pending Approval", "3"),
                ("Active Teams", "5"),
            ],
            Role::ProjectManager => &[
                ("Total Projects", "12"),
                ("On Track", "8"),
                ("At Risk", "4"),
            ],
            Role::BillingTeam => &[],
            Role::GeneralManager => &[
                ("Total Projects", "15"),
                ("Active", "12"),
                ("Completion", "75%"),
                ("Revenue", "$185K"),
            ],
        };

        tiles
            .iter()
            .map(|&(label, value)| MetricTile::new(label, value))
            .collect()
    }

    fn project_health(&self) -> Vec<HealthBucket> {
        vec![
            HealthBucket::new(Severity::Normal, "10 projects", "All milestones on track"),
            HealthBucket::new(Severity::Risk, "3 projects", "Requires attention"),
            HealthBucket::new(Severity::Overdue, "2 projects", "Immediate action needed"),
        ]
    }
}
