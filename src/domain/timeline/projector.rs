//! The timeline projector.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{Decision, DecisionSet};
use crate::domain::foundation::DecisionId;
use crate::ports::{MeetingNameResolver, RelatedKnowledgeResolver};

use super::view::{CrossLink, Timeline, TimelineItem};

/// How many decisions the dashboard view shows.
pub const DASHBOARD_WINDOW: usize = 5;

const LINK_PREVIEW_LEN: usize = 50;

/// Which surface the projection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMode {
    /// Fixed small window centered on the active decision.
    Dashboard,
    /// Every decision, unbounded and scrollable, with knowledge
    /// annotations when a resolver is supplied.
    Collaboration,
}

/// Projects the decision set into a display-ready timeline.
///
/// Decisions are ordered oldest-first by creation time (id as a
/// deterministic tiebreak). Cross-links are computed against the full
/// set, not the filtered window. The projector performs no writes.
pub fn project_timeline(
    set: &DecisionSet,
    meetings: &dyn MeetingNameResolver,
    mode: TimelineMode,
    knowledge: Option<&dyn RelatedKnowledgeResolver>,
) -> Timeline {
    let mut ordered: Vec<&Decision> = set.decisions().collect();
    ordered.sort_by_key(|d| (d.created_at(), d.id()));

    let window = match mode {
        TimelineMode::Collaboration => &ordered[..],
        TimelineMode::Dashboard => dashboard_window(&ordered),
    };

    let items: Vec<TimelineItem> = window
        .iter()
        .map(|d| project_item(d, set, meetings, mode, knowledge))
        .collect();

    let active_item_id = items.iter().find(|i| i.is_active).map(|i| i.decision_id);

    Timeline {
        items,
        active_item_id,
    }
}

/// Picks the dashboard window: centered on the active decision when one
/// exists (floor(window/2) before it, the remainder after, clamped to
/// the array bounds), otherwise the most recent `DASHBOARD_WINDOW`.
fn dashboard_window<'a>(ordered: &'a [&'a Decision]) -> &'a [&'a Decision] {
    if ordered.len() <= DASHBOARD_WINDOW {
        return ordered;
    }
    let start = match ordered.iter().position(|d| d.is_active()) {
        Some(active_idx) => {
            let start = active_idx.saturating_sub(DASHBOARD_WINDOW / 2);
            let end = (start + DASHBOARD_WINDOW).min(ordered.len());
            end - DASHBOARD_WINDOW
        }
        None => ordered.len() - DASHBOARD_WINDOW,
    };
    &ordered[start..start + DASHBOARD_WINDOW]
}

fn project_item(
    decision: &Decision,
    set: &DecisionSet,
    meetings: &dyn MeetingNameResolver,
    mode: TimelineMode,
    knowledge: Option<&dyn RelatedKnowledgeResolver>,
) -> TimelineItem {
    let meeting_name = meetings
        .meeting_name(decision.meeting_id())
        .unwrap_or_else(|| "Unknown meeting".to_string());

    // Neighbors are looked up in the full set so links survive truncation.
    let supersedes = decision.previous_id().and_then(|id| cross_link(set, id));
    let revisited_by = decision.next_id().and_then(|id| cross_link(set, id));

    let knowledge = match mode {
        TimelineMode::Collaboration => {
            knowledge.and_then(|r| r.related_knowledge(decision.id()))
        }
        TimelineMode::Dashboard => None,
    };

    TimelineItem {
        decision_id: decision.id(),
        content: decision.content().to_string(),
        meeting_name,
        occurred_at: decision.created_at(),
        is_active: decision.is_active(),
        supersedes,
        revisited_by,
        knowledge,
    }
}

fn cross_link(set: &DecisionSet, id: DecisionId) -> Option<CrossLink> {
    set.get(id).map(|neighbor| CrossLink {
        decision_id: neighbor.id(),
        label: preview(neighbor.content()),
    })
}

fn preview(content: &str) -> String {
    if content.chars().count() <= LINK_PREVIEW_LEN {
        content.to_string()
    } else {
        let truncated: String = content.chars().take(LINK_PREVIEW_LEN).collect();
        format!("{}…", truncated.trim_end())
    }
}
