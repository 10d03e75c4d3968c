use std::io;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use super::{display_command, CommandError, CommandOutput, CommandRunner};

/// Default GitHub CLI executable
pub const DEFAULT_PROGRAM: &str = "gh";

/// Client for invoking the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhClient {
    program: String,
    timeout: Option<Duration>,
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GhClient {
    /// Creates a client for `gh` on PATH with no timeout
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: None,
        }
    }

    /// Use a different executable (absolute path or name on PATH)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Kill the child and fail if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl CommandRunner for GhClient {
    fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let cmdline = display_command(&self.program, args);
        debug!("Executing: {}", cmdline);

        let mut command = Command::new(&self.program);
        command.args(args).kill_on_drop(true);
        let child = command.output();

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child).await {
                Ok(result) => result,
                Err(_) => {
                    debug!("{} timed out after {:?}", cmdline, limit);
                    return Err(CommandError::new(
                        format!("timed out after {:?}", limit),
                        Some("ETIMEDOUT".to_string()),
                        cmdline,
                    ));
                }
            },
            None => child.await,
        };

        let output = result.map_err(|e| spawn_error(&self.program, &cmdline, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let code = output.status.code();
            debug!("{} exited with {:?}", cmdline, code);
            let message = match stderr.trim() {
                "" => match code {
                    Some(c) => format!("exited with status {}", c),
                    None => "terminated by signal".to_string(),
                },
                text => text.to_string(),
            };
            return Err(CommandError::new(
                message,
                code.map(|c| c.to_string()),
                cmdline,
            ));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Map a spawn failure to a CommandError, using "ENOENT" for a missing binary
fn spawn_error(program: &str, cmdline: &str, err: io::Error) -> CommandError {
    if err.kind() == io::ErrorKind::NotFound {
        CommandError::new(
            format!("{}: command not found", program),
            Some("ENOENT".to_string()),
            cmdline,
        )
    } else {
        CommandError::new(err.to_string(), Some(format!("{:?}", err.kind())), cmdline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_not_found() {
        let err = spawn_error(
            "gh",
            "gh --version",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.code.as_deref(), Some("ENOENT"));
        assert_eq!(err.message, "gh: command not found");
        assert_eq!(err.command, "gh --version");
    }

    #[test]
    fn test_spawn_error_other() {
        let err = spawn_error(
            "gh",
            "gh --version",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code.as_deref(), Some("PermissionDenied"));
        assert_eq!(err.message, "denied");
    }

    #[tokio::test]
    async fn test_missing_program_is_enoent() {
        let client = GhClient::new().with_program("ghas-demo-definitely-not-installed");
        let err = client.run(&["--version"]).await.unwrap_err();
        assert_eq!(err.code.as_deref(), Some("ENOENT"));
        assert!(err.message.contains("command not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command_captures_stdout() {
        let client = GhClient::new().with_program("echo");
        let out = client.run(&["hello", "world"]).await.unwrap();
        assert_eq!(out.stdout.trim(), "hello world");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_arguments_are_not_shell_interpreted() {
        let client = GhClient::new().with_program("echo");
        let out = client.run(&["a; echo injected"]).await.unwrap();
        assert_eq!(out.stdout.trim(), "a; echo injected");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_without_stderr() {
        let client = GhClient::new().with_program("false");
        let err = client.run(&[]).await.unwrap_err();
        assert_eq!(err.code.as_deref(), Some("1"));
        assert_eq!(err.message, "exited with status 1");
        assert_eq!(err.command, "false");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_records_command_line() {
        let client = GhClient::new().with_program("ls");
        let err = client
            .run(&["/ghas-demo/no such dir"])
            .await
            .unwrap_err();
        assert_eq!(err.command, "ls '/ghas-demo/no such dir'");
        assert!(!err.message.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_child() {
        let client = GhClient::new()
            .with_program("sleep")
            .with_timeout(Some(Duration::from_millis(100)));
        let err = client.run(&["5"]).await.unwrap_err();
        assert_eq!(err.code.as_deref(), Some("ETIMEDOUT"));
        assert_eq!(err.command, "sleep 5");
    }
}
