//! Presentation formatting helpers.
//!
//! Formatting is a presentation concern, but the formats are part of the
//! acceptance surface of the digest views, so they live here.

use crate::domain::foundation::{DecisionId, Timestamp};

/// Formats a change date for display, e.g. "Jan 5, 2026".
///
/// Always English month abbreviations; the surrounding application owns
/// locale negotiation.
pub fn format_change_date(at: Timestamp) -> String {
    at.as_datetime().format("%b %-d, %Y").to_string()
}

/// Stable application path for a decision, e.g. "decisions/<id>".
pub fn format_decision_link(id: DecisionId) -> String {
    format!("decisions/{}", id)
}
