use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    FieldTeamLead,
    InventoryManager,
    ProjectManager,
    BillingTeam,
    GeneralManager,
}

impl Role {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FieldTeamLead,
            Self::InventoryManager,
            Self::ProjectManager,
            Self::BillingTeam,
            Self::GeneralManager,
        ]
    }

    /// Short label shown in the role picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FieldTeamLead => "Field TL",
            Self::InventoryManager => "IM",
            Self::ProjectManager => "PM",
            Self::BillingTeam => "Billing Team",
            Self::GeneralManager => "GM",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::FieldTeamLead => "Field Team Lead",
            Self::InventoryManager => "Inventory Manager",
            Self::ProjectManager => "Project Manager",
            Self::BillingTeam => "Billing Team",
            Self::GeneralManager => "General Manager",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::FieldTeamLead => "field_team_lead",
            Self::InventoryManager => "inventory_manager",
            Self::ProjectManager => "project_manager",
            Self::BillingTeam => "billing_team",
            Self::GeneralManager => "general_manager",
        }
    }

    /// Exact match against the picker labels. Anything else is unknown.
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|role| role.label() == raw)
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|role| role.slug() == raw)
    }

    /// Accepts either the picker label or the snake_case slug, ignoring
    /// surrounding whitespace. Case and inner spacing must match.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::from_label(raw).or_else(|| Self::from_slug(raw))
    }
}

/// Three-bucket health used for every status indicator on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Risk,
    Overdue,
}

impl Severity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Normal, Self::Risk, Self::Overdue]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Risk => "Risk",
            Self::Overdue => "Overdue",
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Self::Normal => "🟢",
            Self::Risk => "🟡",
            Self::Overdue => "🔴",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub email: &'static str,
    pub display_name: &'static str,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub customer: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPlan {
    pub id: &'static str,
    pub site_id: &'static str,
    pub assignee: &'static str,
    pub activity: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: &'static str,
    pub site_id: &'static str,
    pub status: &'static str,
    pub progress: u8,
}

/// Sign-off flags for each hand-off an activity passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApprovalStages {
    pub im_approved: bool,
    pub pm_approved: bool,
    pub billing_processed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Approval {
    pub id: &'static str,
    pub activity_id: &'static str,
    pub activity: &'static str,
    pub status: &'static str,
    pub days_pending: u32,
    pub stages: ApprovalStages,
}

impl Approval {
    pub fn is_pending(&self) -> bool {
        self.status == "Pending"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingProject {
    pub name: &'static str,
    pub status: &'static str,
    pub documents: &'static str,
    pub days_pending: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    pub number: &'static str,
    pub amount_usd: u32,
    pub status: &'static str,
    pub days_pending: u32,
}

impl PurchaseOrder {
    /// Whole-dollar amount with thousands separators, e.g. `$2,300`.
    pub fn amount_label(&self) -> String {
        let digits = self.amount_usd.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${grouped}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentScore {
    pub department: &'static str,
    pub efficiency_pct: u8,
}
