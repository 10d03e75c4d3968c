//! Payload types returned by the Copilot REST endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One day of Copilot usage (`GET /orgs/{org}/copilot/usage`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Date string, e.g. "2024-01-15"
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(default)]
    pub total_suggestions_count: Option<u64>,
    #[serde(default)]
    pub total_acceptances_count: Option<u64>,
    #[serde(default)]
    pub total_active_users: Option<u64>,
    /// Enterprise endpoint only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_active_organizations: Option<u64>,
}

impl UsageRecord {
    /// Accepted / suggested × 100, when both counts are present and non-zero
    pub fn acceptance_rate(&self) -> Option<f64> {
        match (self.total_suggestions_count, self.total_acceptances_count) {
            (Some(suggestions), Some(acceptances)) if suggestions > 0 && acceptances > 0 => {
                Some(acceptances as f64 / suggestions as f64 * 100.0)
            }
            _ => None,
        }
    }
}

/// User or team holding a seat.
///
/// Users carry `login`; teams carry `slug` and `name` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Assignee {
    /// Login for users, slug (or name) for teams
    pub fn handle(&self) -> Option<&str> {
        Some(self.login.as_str())
            .filter(|login| !login.is_empty())
            .or(self.slug.as_deref())
            .or(self.name.as_deref())
    }
}

/// A Copilot seat assignment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub last_activity_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Body of `GET /orgs/{org}/copilot/billing/seats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatsResponse {
    #[serde(default)]
    pub total_seats: Option<u64>,
    #[serde(default)]
    pub seats: Vec<SeatRecord>,
}
