//! Error classification and remediation text.
//!
//! A failed `gh` invocation is reduced to an [`ErrorKind`] by substring
//! matching on its message and code. The first matching rule wins:
//!
//! | match                                   | kind                      |
//! |-----------------------------------------|---------------------------|
//! | "command not found" or code `ENOENT`    | `ToolingMissing`          |
//! | "not logged in" or "authentication"     | `AuthRequired`            |
//! | "404"                                   | `NotFoundOrNoAccess`      |
//! | "403"                                   | `InsufficientPermissions` |
//! | "401"                                   | `AuthRequired`            |
//! | anything else                           | `Unknown`                 |

use std::fmt;

use crate::gh::CommandError;
use crate::metrics::FetchError;
use crate::output::Line;

/// Classified failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The `gh` executable could not be found
    ToolingMissing,
    /// `gh` is not logged in or the token was rejected
    AuthRequired,
    /// The caller lacks admin rights for the resource
    InsufficientPermissions,
    /// The organization/enterprise does not exist or is not visible
    NotFoundOrNoAccess,
    /// Anything else, including malformed responses
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ToolingMissing => write!(f, "tooling missing"),
            ErrorKind::AuthRequired => write!(f, "authentication required"),
            ErrorKind::InsufficientPermissions => write!(f, "insufficient permissions"),
            ErrorKind::NotFoundOrNoAccess => write!(f, "not found or no access"),
            ErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify an error message (and optional OS/exit code)
pub fn classify(message: &str, code: Option<&str>) -> ErrorKind {
    if message.contains("command not found") || code == Some("ENOENT") {
        ErrorKind::ToolingMissing
    } else if message.contains("not logged in") || message.contains("authentication") {
        ErrorKind::AuthRequired
    } else if message.contains("404") {
        ErrorKind::NotFoundOrNoAccess
    } else if message.contains("403") {
        ErrorKind::InsufficientPermissions
    } else if message.contains("401") {
        ErrorKind::AuthRequired
    } else {
        ErrorKind::Unknown
    }
}

/// A classified error together with the remediation to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub kind: ErrorKind,
    /// One-line summary (absent for `Unknown`)
    pub summary: Option<&'static str>,
    /// Suggested next steps
    pub hints: Vec<&'static str>,
    /// Raw error text, shown for `Unknown`
    pub detail: String,
}

impl Diagnosis {
    /// Build the remediation for `kind`, keeping `detail` for display
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        let (summary, hints) = match kind {
            ErrorKind::ToolingMissing => (
                Some("GitHub CLI is not installed. To install:"),
                vec![
                    "macOS: brew install gh",
                    "Windows: winget install --id GitHub.cli",
                    "Linux: See https://github.com/cli/cli/blob/trunk/docs/install_linux.md",
                ],
            ),
            ErrorKind::AuthRequired => (
                Some("Authentication required"),
                vec![
                    "Run: gh auth login",
                    "Choose \"GitHub.com\" and follow the authentication flow",
                    "Ensure you have a valid GitHub token",
                ],
            ),
            ErrorKind::NotFoundOrNoAccess => (
                Some("Organization/Enterprise not found or no access"),
                vec![
                    "Verify the organization/enterprise name is correct",
                    "Ensure you have admin permissions",
                ],
            ),
            ErrorKind::InsufficientPermissions => (
                Some("Insufficient permissions"),
                vec![
                    "You need admin access to view Copilot metrics",
                    "Contact your organization administrator",
                ],
            ),
            ErrorKind::Unknown => (None, Vec::new()),
        };

        Self {
            kind,
            summary,
            hints,
            detail: detail.into(),
        }
    }

    /// Classify a failed command
    pub fn from_command_error(err: &CommandError) -> Self {
        let kind = classify(&err.message, err.code.as_deref());
        Self::new(kind, err.message.clone())
    }

    /// Classify a failed fetch; parse failures are never substring-matched
    pub fn from_fetch_error(err: &FetchError) -> Self {
        match err {
            FetchError::Command(e) => Self::from_command_error(e),
            FetchError::Malformed(e) => Self::new(ErrorKind::Unknown, e.to_string()),
        }
    }

    /// Remediation text, one line per summary/hint
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        match (self.kind, self.summary) {
            (ErrorKind::ToolingMissing, Some(summary)) => {
                lines.push(Line::warning(summary));
                lines.extend(crate::output::bullets(self.hints.iter().copied()));
            }
            (_, Some(summary)) => {
                lines.push(Line::warning(format!("• {}", summary)));
                lines.extend(crate::output::bullets(self.hints.iter().copied()));
            }
            (_, None) => {
                lines.push(Line::detail(format!("Error details: {}", self.detail)));
            }
        }
        lines
    }

    /// Full remediation text as a single string
    pub fn remediation(&self) -> String {
        crate::output::plain_text(&self.lines())
    }
}
