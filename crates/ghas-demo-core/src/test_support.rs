//! Scripted command runner shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::gh::{display_command, CommandError, CommandOutput, CommandRunner};

/// Replays queued results in order and records every argument vector
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<Result<CommandOutput, CommandError>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run with `stdout`
    pub fn ok(self, stdout: &str) -> Self {
        self.push(Ok(CommandOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }))
    }

    /// Queue a successful run that only writes to stderr
    pub fn ok_stderr(self, stderr: &str) -> Self {
        self.push(Ok(CommandOutput {
            stdout: String::new(),
            stderr: stderr.to_string(),
        }))
    }

    /// Queue a failed run
    pub fn fail(self, message: &str, code: Option<&str>) -> Self {
        self.push(Err(CommandError::new(
            message,
            code.map(str::to_string),
            "gh",
        )))
    }

    fn push(self, result: Result<CommandOutput, CommandError>) -> Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn program(&self) -> &str {
        "gh"
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(CommandError::new(
                "no scripted response",
                None,
                display_command("gh", args),
            ))
        })
    }
}
