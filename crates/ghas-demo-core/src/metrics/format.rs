//! Human-readable rendering of usage and seat payloads.

use super::types::{SeatRecord, UsageRecord};
use super::Scope;
use crate::output::Line;

/// Maximum number of assigned seats listed in detail
pub const SEAT_PREVIEW_LIMIT: usize = 5;

/// Format an acceptance rate with two decimals ("70.00%")
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate)
}

fn or_na(value: Option<u64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn text_or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Render daily usage records in input order
pub fn render_usage(records: &[UsageRecord], scope: Scope) -> Vec<Line> {
    if records.is_empty() {
        return vec![Line::warning(format!(
            "No metrics data available for this {}.",
            scope
        ))];
    }

    let mut lines = Vec::new();
    for (index, record) in records.iter().enumerate() {
        lines.push(Line::heading(format!("📅 Date: {}", text_or_na(&record.day))));
        lines.push(Line::detail(format!(
            "   Total Suggestions: {}",
            or_na(record.total_suggestions_count)
        )));
        lines.push(Line::detail(format!(
            "   Accepted Suggestions: {}",
            or_na(record.total_acceptances_count)
        )));
        lines.push(Line::detail(format!(
            "   Active Users: {}",
            or_na(record.total_active_users)
        )));
        if scope.shows_organizations() {
            lines.push(Line::detail(format!(
                "   Active Organizations: {}",
                or_na(record.total_active_organizations)
            )));
        }
        if let Some(rate) = record.acceptance_rate() {
            lines.push(Line::success(format!(
                "   Acceptance Rate: {}",
                format_rate(rate)
            )));
        }
        if index + 1 < records.len() {
            lines.push(Line::blank());
        }
    }
    lines
}

/// Render seat assignments.
///
/// `total_hint` is the API's `total_seats`; when absent or zero the list
/// length is shown instead. The trailing "and N more" count is the list
/// length minus the preview limit.
pub fn render_seats(seats: &[SeatRecord], total_hint: Option<u64>) -> Vec<Line> {
    let assigned: Vec<&SeatRecord> = seats.iter().filter(|s| s.assignee.is_some()).collect();
    if assigned.is_empty() {
        return vec![Line::warning("No seat information available.")];
    }

    let total = total_hint
        .filter(|n| *n > 0)
        .unwrap_or(seats.len() as u64);

    let mut lines = vec![
        Line::heading(format!("Total Seats: {}", total)),
        Line::detail(format!("Active Seats: {}", assigned.len())),
        Line::blank(),
    ];

    for seat in assigned.iter().take(SEAT_PREVIEW_LIMIT) {
        let Some(assignee) = &seat.assignee else {
            continue;
        };
        lines.push(Line::info(format!("👤 {}", assignee.handle().unwrap_or("N/A"))));
        lines.push(Line::detail(format!("   Type: {}", text_or_na(&assignee.kind))));
        lines.push(Line::detail(format!(
            "   Last Activity: {}",
            seat.last_activity_at.as_deref().unwrap_or("N/A")
        )));
        lines.push(Line::detail(format!("   Created: {}", text_or_na(&seat.created_at))));
        lines.push(Line::blank());
    }

    if assigned.len() > SEAT_PREVIEW_LIMIT {
        lines.push(Line::detail(format!(
            "... and {} more seats",
            seats.len() - SEAT_PREVIEW_LIMIT
        )));
    }

    lines
}
