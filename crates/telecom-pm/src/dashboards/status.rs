use super::domain::Severity;
use serde::Serialize;

const OVERDUE_LABELS: [&str; 2] = ["Overdue", "Cancelled"];
const RISK_LABELS: [&str; 2] = ["In Progress", "At Risk"];

/// Two or more days in a queue is overdue no matter what the label says.
pub const OVERDUE_AFTER_DAYS: u32 = 2;
pub const RISK_AFTER_DAYS: u32 = 1;

/// Classify a bare status label.
pub fn classify(status: &str) -> Severity {
    classify_pending(status, None)
}

/// Classify a status label together with how long the item has been waiting.
///
/// Labels are compared exactly; `"overdue"` is not `"Overdue"`.
pub fn classify_pending(status: &str, days_pending: Option<u32>) -> Severity {
    let days = days_pending.unwrap_or(0);

    if days >= OVERDUE_AFTER_DAYS || OVERDUE_LABELS.contains(&status) {
        Severity::Overdue
    } else if days >= RISK_AFTER_DAYS || RISK_LABELS.contains(&status) {
        Severity::Risk
    } else {
        Severity::Normal
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub normal: usize,
    pub risk: usize,
    pub overdue: usize,
}

impl SeverityCounts {
    pub fn tally<I>(severities: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        severities
            .into_iter()
            .fold(Self::default(), |mut counts, severity| {
                counts.record(severity);
                counts
            })
    }

    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Normal => self.normal += 1,
            Severity::Risk => self.risk += 1,
            Severity::Overdue => self.overdue += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Normal => self.normal,
            Severity::Risk => self.risk,
            Severity::Overdue => self.overdue,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.risk + self.overdue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_and_cancelled_labels_are_overdue() {
        assert_eq!(classify("Overdue"), Severity::Overdue);
        assert_eq!(classify("Cancelled"), Severity::Overdue);
    }

    #[test]
    fn in_progress_and_at_risk_labels_are_risk() {
        assert_eq!(classify("In Progress"), Severity::Risk);
        assert_eq!(classify("At Risk"), Severity::Risk);
    }

    #[test]
    fn other_labels_are_normal() {
        for label in ["Assigned", "Pending", "Approved", "Ready", "", "overdue", "in progress"] {
            assert_eq!(classify(label), Severity::Normal, "label {label:?}");
        }
    }

    #[test]
    fn pending_days_escalate_regardless_of_label() {
        assert_eq!(classify_pending("Approved", Some(1)), Severity::Risk);
        assert_eq!(classify_pending("Approved", Some(2)), Severity::Overdue);
        assert_eq!(classify_pending("In Progress", Some(2)), Severity::Overdue);
        assert_eq!(classify_pending("Pending", Some(30)), Severity::Overdue);
    }

    #[test]
    fn zero_pending_days_defer_to_label() {
        assert_eq!(classify_pending("Pending", Some(0)), Severity::Normal);
        assert_eq!(classify_pending("Cancelled", Some(0)), Severity::Overdue);
        assert_eq!(classify_pending("At Risk", Some(0)), Severity::Risk);
    }

    #[test]
    fn tally_counts_each_bucket() {
        let counts = SeverityCounts::tally([
            classify("Assigned"),
            classify("In Progress"),
            classify("Overdue"),
            classify("Cancelled"),
        ]);
        assert_eq!(counts.normal, 1);
        assert_eq!(counts.risk, 1);
        assert_eq!(counts.get(Severity::Overdue), 2);
        assert_eq!(counts.total(), 4);
    }
}
