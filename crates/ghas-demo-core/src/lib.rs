//! Core library for the GHAS demo console.
//!
//! Everything here is presentation-neutral: runners return typed errors,
//! renderers return [`output::Line`] values, and the application crate
//! decides how lines reach the terminal.

pub mod catalog;
pub mod diagnose;
pub mod gh;
pub mod inject;
pub mod metrics;
pub mod output;

#[cfg(test)]
mod test_support;

pub use diagnose::{classify, Diagnosis, ErrorKind};
pub use gh::{check_setup, CommandError, CommandOutput, CommandRunner, GhClient, SetupStatus};
pub use metrics::{Fetched, MetricsClient, Scope};
pub use output::{Line, Tone};
