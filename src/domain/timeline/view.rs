//! Timeline view records.

use serde::Serialize;

use crate::domain::foundation::{DecisionId, Timestamp};
use crate::ports::RelatedKnowledge;

/// A projected timeline over the decision set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub items: Vec<TimelineItem>,
    /// The active decision, when it survived filtering.
    pub active_item_id: Option<DecisionId>,
}

/// One decision as it appears on the timeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub decision_id: DecisionId,
    pub content: String,
    /// Display name of the meeting this decision cites.
    pub meeting_name: String,
    pub occurred_at: Timestamp,
    pub is_active: bool,
    /// Link to the decision this one replaced, if any.
    pub supersedes: Option<CrossLink>,
    /// Link to the decision that replaced this one, if any.
    pub revisited_by: Option<CrossLink>,
    /// Knowledge annotations (collaboration mode only).
    pub knowledge: Option<RelatedKnowledge>,
}

/// A cross-link label to a chain neighbor.
///
/// Always resolved against the full decision set, so it stays correct
/// even when the neighbor itself was truncated out of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossLink {
    pub decision_id: DecisionId,
    /// Truncated content preview of the linked decision.
    pub label: String,
}
