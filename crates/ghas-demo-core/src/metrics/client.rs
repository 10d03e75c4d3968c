use tracing::{debug, info};

use super::examples::{example_seats, example_usage};
use super::types::{SeatsResponse, UsageRecord};
use super::{seats_path, FetchError, Fetched, Scope};
use crate::diagnose::Diagnosis;
use crate::gh::{display_command, CommandRunner};

/// Fetches Copilot metrics through `gh api`, falling back to example data
pub struct MetricsClient<R> {
    runner: R,
}

impl<R: CommandRunner> MetricsClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Access the underlying runner (setup checks share it)
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Display form of the usage command, e.g. `gh api /orgs/x/copilot/usage`
    pub fn usage_command(&self, scope: Scope, name: &str) -> String {
        display_command(self.runner.program(), &["api", &scope.usage_path(name)])
    }

    /// Display form of the seats command
    pub fn seats_command(&self, org: &str) -> String {
        display_command(self.runner.program(), &["api", &seats_path(org)])
    }

    /// Run `gh api` for the usage endpoint and parse the JSON array
    pub async fn fetch_usage(&self, scope: Scope, name: &str) -> Result<Vec<UsageRecord>, FetchError> {
        let path = scope.usage_path(name);
        let output = self.runner.run(&["api", &path]).await?;
        let records: Vec<UsageRecord> = serde_json::from_str(&output.stdout)?;
        debug!("Fetched {} usage records for {} {}", records.len(), scope, name);
        Ok(records)
    }

    /// Run `gh api` for the seats endpoint and parse the JSON object
    pub async fn fetch_seats(&self, org: &str) -> Result<SeatsResponse, FetchError> {
        let path = seats_path(org);
        let output = self.runner.run(&["api", &path]).await?;
        let seats: SeatsResponse = serde_json::from_str(&output.stdout)?;
        debug!("Fetched {} seats for {}", seats.seats.len(), org);
        Ok(seats)
    }

    /// Live usage records, or the classified error plus example records
    pub async fn usage_report(&self, scope: Scope, name: &str) -> Fetched<Vec<UsageRecord>> {
        match self.fetch_usage(scope, name).await {
            Ok(records) => {
                info!("Live {} usage metrics for {}", scope, name);
                Fetched::Live(records)
            }
            Err(e) => {
                info!("{} usage fetch failed, using example data: {}", scope, e);
                Fetched::Fallback {
                    diagnosis: Diagnosis::from_fetch_error(&e),
                    example: example_usage(scope),
                }
            }
        }
    }

    /// Live seat assignments, or the classified error plus example seats
    pub async fn seats_report(&self, org: &str) -> Fetched<SeatsResponse> {
        match self.fetch_seats(org).await {
            Ok(seats) => Fetched::Live(seats),
            Err(e) => {
                info!("Seat fetch failed, using example data: {}", e);
                Fetched::Fallback {
                    diagnosis: Diagnosis::from_fetch_error(&e),
                    example: example_seats(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnose::ErrorKind;
    use crate::test_support::ScriptedRunner;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_fetch_usage_passes_name_as_single_argument() {
        let runner = ScriptedRunner::new().ok("[]");
        let client = MetricsClient::new(runner);

        let records = client
            .fetch_usage(Scope::Organization, "evil; rm -rf /")
            .await
            .unwrap();
        assert!(records.is_empty());
        assert_eq!(
            client.runner().calls(),
            vec![vec!["api".to_string(), "/orgs/evil; rm -rf //copilot/usage".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_usage_report_live() {
        let runner = ScriptedRunner::new().ok(
            r#"[{"day":"2024-03-01","total_suggestions_count":10,"total_acceptances_count":4,"total_active_users":2}]"#,
        );
        let client = MetricsClient::new(runner);

        let report = client.usage_report(Scope::Enterprise, "acme").await;
        assert!(report.is_live());
        assert_eq!(report.data()[0].day, "2024-03-01");
        assert_eq!(
            client.runner().calls()[0][1],
            "/enterprises/acme/copilot/usage"
        );
    }

    #[tokio::test]
    async fn test_usage_report_falls_back_on_404() {
        let runner = ScriptedRunner::new().fail("gh: Not Found (HTTP 404)", Some("1"));
        let client = MetricsClient::new(runner);

        let report = client.usage_report(Scope::Organization, "ghost").await;
        assert_eq!(report.diagnosis().map(|d| d.kind), Some(ErrorKind::NotFoundOrNoAccess));
        assert_eq!(report.data(), &example_usage(Scope::Organization));
    }

    #[tokio::test]
    async fn test_usage_report_enoent_is_tooling_missing() {
        let runner = ScriptedRunner::new().fail("gh: command not found", Some("ENOENT"));
        let client = MetricsClient::new(runner);

        let report = client.usage_report(Scope::Organization, "octo").await;
        assert_eq!(report.diagnosis().map(|d| d.kind), Some(ErrorKind::ToolingMissing));
    }

    #[tokio::test]
    async fn test_malformed_json_is_unknown() {
        let runner = ScriptedRunner::new().ok("<html>HTTP 404</html>");
        let client = MetricsClient::new(runner);

        let report = client.usage_report(Scope::Organization, "octo").await;
        let diagnosis = report.diagnosis().unwrap();
        assert_eq!(diagnosis.kind, ErrorKind::Unknown);
        assert!(diagnosis.remediation().starts_with("Error details:"));
    }

    #[tokio::test]
    async fn test_seats_report() {
        let runner = ScriptedRunner::new()
            .ok(r#"{"total_seats":1,"seats":[{"created_at":"2024-01-01T00:00:00Z","assignee":{"login":"octocat","type":"User"}}]}"#)
            .fail("gh: Forbidden (HTTP 403)", Some("1"));
        let client = MetricsClient::new(runner);

        let live = client.seats_report("octo").await;
        assert!(live.is_live());
        assert_eq!(live.data().total_seats, Some(1));

        let fallback = client.seats_report("octo").await;
        assert_eq!(
            fallback.diagnosis().map(|d| d.kind),
            Some(ErrorKind::InsufficientPermissions)
        );
        assert_eq!(fallback.data(), &example_seats());
        assert_eq!(client.runner().calls()[1][1], "/orgs/octo/copilot/billing/seats");
    }

    #[tokio::test]
    async fn test_seats_report_keeps_team_and_null_fields_live() {
        let runner = ScriptedRunner::new().ok(
            r#"{"total_seats":2,"seats":[
                {"created_at":"2024-01-01T00:00:00Z","assignee":{"login":"octocat","type":"User"}},
                {"created_at":null,"last_activity_at":null,
                 "assignee":{"id":7,"name":"Justice League","slug":"justice-league"}}
            ]}"#,
        );
        let client = MetricsClient::new(runner);

        let report = client.seats_report("octo").await;
        assert!(report.is_live());
        let seats = &report.data().seats;
        assert_eq!(seats.len(), 2);
        assert_eq!(
            seats[1].assignee.as_ref().and_then(|a| a.handle()),
            Some("justice-league")
        );
    }

    #[test]
    fn test_display_commands() {
        let client = MetricsClient::new(ScriptedRunner::new());
        assert_eq!(
            client.usage_command(Scope::Organization, "github"),
            "gh api /orgs/github/copilot/usage"
        );
        assert_eq!(
            client.seats_command("github"),
            "gh api /orgs/github/copilot/billing/seats"
        );
    }
}
