//! Static example payloads shown when a live call fails.

use super::types::{Assignee, SeatRecord, SeatsResponse, UsageRecord};
use super::Scope;

/// Which report the insight bullets belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTopic {
    Organization,
    Enterprise,
    Seats,
}

impl From<Scope> for InsightTopic {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Organization => InsightTopic::Organization,
            Scope::Enterprise => InsightTopic::Enterprise,
        }
    }
}

fn usage(day: &str, suggestions: u64, acceptances: u64, users: u64, orgs: Option<u64>) -> UsageRecord {
    UsageRecord {
        day: day.to_string(),
        total_suggestions_count: Some(suggestions),
        total_acceptances_count: Some(acceptances),
        total_active_users: Some(users),
        total_active_organizations: orgs,
    }
}

/// Two days of example usage, newest first
pub fn example_usage(scope: Scope) -> Vec<UsageRecord> {
    match scope {
        Scope::Organization => vec![
            usage("2024-01-15", 1250, 875, 45, None),
            usage("2024-01-14", 1180, 820, 42, None),
        ],
        Scope::Enterprise => vec![
            usage("2024-01-15", 15750, 11025, 485, Some(12)),
            usage("2024-01-14", 14200, 9940, 445, Some(11)),
        ],
    }
}

fn seat(login: &str, last_activity: &str, created: &str) -> SeatRecord {
    SeatRecord {
        assignee: Some(Assignee {
            login: login.to_string(),
            kind: "User".to_string(),
            ..Default::default()
        }),
        last_activity_at: Some(last_activity.to_string()),
        created_at: created.to_string(),
    }
}

/// Example seat assignments for an organization licensed for 50 seats
pub fn example_seats() -> SeatsResponse {
    SeatsResponse {
        total_seats: Some(50),
        seats: vec![
            seat("developer1", "2024-01-15T10:30:00Z", "2023-09-01T08:00:00Z"),
            seat("developer2", "2024-01-15T09:15:00Z", "2023-09-01T08:00:00Z"),
            seat("team-lead", "2024-01-14T16:45:00Z", "2023-08-15T12:00:00Z"),
        ],
    }
}

/// Takeaways printed after an example report
pub fn insights(topic: InsightTopic) -> &'static [&'static str] {
    match topic {
        InsightTopic::Organization => &[
            "Track daily adoption and engagement trends",
            "Monitor acceptance rates to gauge developer satisfaction",
            "Identify most active development periods",
            "Measure ROI through productivity improvements",
        ],
        InsightTopic::Enterprise => &[
            "Cross-organization adoption patterns",
            "Enterprise-wide productivity impact",
            "Resource allocation and licensing optimization",
            "Multi-team collaboration effectiveness",
        ],
        InsightTopic::Seats => &[
            "Track individual developer engagement",
            "Monitor seat utilization and licensing costs",
            "Identify most active contributors",
            "Plan capacity and team expansion",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::format::format_rate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_example_usage_is_deterministic() {
        let first = example_usage(Scope::Enterprise);
        let second = example_usage(Scope::Enterprise);
        assert_eq!(first, second);
        assert_eq!(first[0].day, "2024-01-15");
        assert_eq!(first[1].day, "2024-01-14");
    }

    #[test]
    fn test_example_usage_rates() {
        let org = example_usage(Scope::Organization);
        let rates: Vec<String> = org
            .iter()
            .filter_map(|r| r.acceptance_rate())
            .map(format_rate)
            .collect();
        assert_eq!(rates, vec!["70.00%", "69.49%"]);

        let ent = example_usage(Scope::Enterprise);
        assert!(ent.iter().all(|r| r.total_active_organizations.is_some()));
        assert!(org.iter().all(|r| r.total_active_organizations.is_none()));
    }

    #[test]
    fn test_example_seats() {
        let seats = example_seats();
        assert_eq!(seats.total_seats, Some(50));
        assert_eq!(seats.seats.len(), 3);
        assert!(seats.seats.iter().all(|s| s.assignee.is_some()));
    }

    #[test]
    fn test_insights_per_topic() {
        assert_eq!(insights(InsightTopic::Organization).len(), 4);
        assert_eq!(insights(Scope::Enterprise.into())[0], "Cross-organization adoption patterns");
        assert!(insights(InsightTopic::Seats)[1].contains("seat utilization"));
    }
}
