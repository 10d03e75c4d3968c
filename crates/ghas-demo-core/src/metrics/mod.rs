//! Copilot usage metrics: API payload types, rendering, example data, and
//! the fetch-or-fallback client.

mod client;
pub mod examples;
pub mod format;
mod types;

pub use client::MetricsClient;
pub use types::{Assignee, SeatRecord, SeatsResponse, UsageRecord};

use std::fmt;

use thiserror::Error;

use crate::diagnose::Diagnosis;
use crate::gh::CommandError;

/// Level at which usage metrics are queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Organization,
    Enterprise,
}

impl Scope {
    /// REST path of the usage endpoint for `name`
    pub fn usage_path(&self, name: &str) -> String {
        match self {
            Scope::Organization => format!("/orgs/{}/copilot/usage", name),
            Scope::Enterprise => format!("/enterprises/{}/copilot/usage", name),
        }
    }

    /// Whether "Active Organizations" is part of a usage record
    pub fn shows_organizations(&self) -> bool {
        matches!(self, Scope::Enterprise)
    }

    /// Capitalized label ("Organization" / "Enterprise")
    pub fn title(&self) -> &'static str {
        match self {
            Scope::Organization => "Organization",
            Scope::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Organization => write!(f, "organization"),
            Scope::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// REST path of the seat-assignment endpoint for an organization
pub fn seats_path(org: &str) -> String {
    format!("/orgs/{}/copilot/billing/seats", org)
}

/// Why a live metrics fetch produced no payload
#[derive(Debug, Error)]
pub enum FetchError {
    /// `gh` failed to run or exited non-zero
    #[error(transparent)]
    Command(#[from] CommandError),

    /// stdout was not the expected JSON shape
    #[error("invalid JSON response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of a fetch: live data, or example data with the classified error
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback { diagnosis: Diagnosis, example: T },
}

impl<T> Fetched<T> {
    /// The payload to render, live or example
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) => data,
            Fetched::Fallback { example, .. } => example,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    /// The classified error, if the live call failed
    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { diagnosis, .. } => Some(diagnosis),
        }
    }
}
