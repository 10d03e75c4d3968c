//! GitHub CLI invocation.
//!
//! [`CommandRunner`] is the seam between the metrics flow and the external
//! `gh` binary. [`GhClient`] spawns the real process; tests substitute
//! scripted runners.

mod client;
mod setup;

pub use client::{GhClient, DEFAULT_PROGRAM};
pub use setup::{check_setup, SetupStatus};

use thiserror::Error;

/// Captured output of a successful invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout when non-empty, otherwise stderr.
    ///
    /// Some `gh` subcommands (e.g. `auth status`) report on stderr.
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Failure of an external command
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandError {
    /// Error text (stderr of the process, or the spawn error)
    pub message: String,
    /// OS-level or exit code (e.g. "ENOENT", "1")
    pub code: Option<String>,
    /// Display form of the command that failed
    pub command: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>, code: Option<String>, command: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            command: command.into(),
        }
    }
}

/// Runs the external CLI with a discrete argument vector
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Program name used for display (e.g. "gh")
    fn program(&self) -> &str;

    /// Run the program with `args` and wait for it to exit
    async fn run(&self, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

/// Render a program + argument vector as a copy-pasteable command line.
///
/// Used for display only; arguments are never passed through a shell.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || "'\"$`\\|&;<>()*?!{}[]#~".contains(c));
    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
