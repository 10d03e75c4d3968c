//! Installation and authentication check for the GitHub CLI.

use tracing::debug;

use super::CommandRunner;
use crate::diagnose::Diagnosis;

/// Result of a successful setup check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStatus {
    /// First line of `gh --version`
    pub version: String,
    /// Output of `gh auth status`
    pub auth_status: String,
}

/// Run `gh --version` then `gh auth status`.
///
/// Stops at the first failure and returns its diagnosis.
pub async fn check_setup<R: CommandRunner>(runner: &R) -> Result<SetupStatus, Diagnosis> {
    let version = runner.run(&["--version"]).await.map_err(|e| {
        debug!("{} --version failed: {}", runner.program(), e);
        Diagnosis::from_command_error(&e)
    })?;
    let version = version.stdout.lines().next().unwrap_or_default().to_string();
    debug!("Found {}", version);

    let auth = runner.run(&["auth", "status"]).await.map_err(|e| {
        debug!("{} auth status failed: {}", runner.program(), e);
        Diagnosis::from_command_error(&e)
    })?;

    Ok(SetupStatus {
        version,
        auth_status: auth.text().trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnose::ErrorKind;
    use crate::test_support::ScriptedRunner;

    #[tokio::test]
    async fn test_setup_ready() {
        let runner = ScriptedRunner::new()
            .ok("gh version 2.40.1 (2023-12-13)\nhttps://github.com/cli/cli/releases/tag/v2.40.1\n")
            .ok_stderr("github.com\n  ✓ Logged in to github.com account octocat\n");

        let status = check_setup(&runner).await.unwrap();
        assert_eq!(status.version, "gh version 2.40.1 (2023-12-13)");
        assert!(status.auth_status.contains("Logged in to github.com"));
        assert_eq!(
            runner.calls(),
            vec![
                vec!["--version".to_string()],
                vec!["auth".to_string(), "status".to_string()]
            ]
        );
    }

    #[tokio::test]
    async fn test_setup_missing_tool_stops_early() {
        let runner = ScriptedRunner::new().fail("gh: command not found", Some("ENOENT"));

        let diagnosis = check_setup(&runner).await.unwrap_err();
        assert_eq!(diagnosis.kind, ErrorKind::ToolingMissing);
        assert_eq!(runner.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_setup_not_logged_in() {
        let runner = ScriptedRunner::new()
            .ok("gh version 2.40.1\n")
            .fail("You are not logged into any GitHub hosts. Run gh auth login to authenticate.", Some("1"));

        let diagnosis = check_setup(&runner).await.unwrap_err();
        assert_eq!(diagnosis.kind, ErrorKind::AuthRequired);
        assert!(diagnosis.remediation().contains("gh auth login"));
    }
}
