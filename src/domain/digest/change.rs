//! Change feed records derived from the decision set.

use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionSet;
use crate::domain::foundation::{DecisionId, SphereId, Timestamp, TopicId};

/// What kind of change a feed entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A brand-new lineage was started.
    Created,
    /// An existing decision was revised via the revisit workflow.
    Revised,
}

/// Reporting window for the change digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePeriod {
    SevenDays,
    ThirtyDays,
}

impl ChangePeriod {
    /// Length of the inclusion window, in days.
    pub fn window_days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
        }
    }

    /// The tighter sub-window that marks an entry as recent.
    ///
    /// Affects display emphasis only, never inclusion.
    pub fn recency_days(&self) -> i64 {
        match self {
            Self::SevenDays => 3,
            Self::ThirtyDays => 10,
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "last 7 days",
            Self::ThirtyDays => "last 30 days",
        }
    }
}

/// One entry of the change feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentChange {
    pub decision_id: DecisionId,
    pub content: String,
    pub sphere_id: SphereId,
    pub topic_ids: Vec<TopicId>,
    pub kind: ChangeKind,
    pub changed_at: Timestamp,
}

/// Derives the change feed from the decision set.
///
/// Every record contributes one entry at its creation time: lineage
/// roots as `Created`, successors as `Revised`. Order is unspecified;
/// the period filter sorts.
pub fn collect_changes(set: &DecisionSet) -> Vec<RecentChange> {
    set.decisions()
        .map(|d| RecentChange {
            decision_id: d.id(),
            content: d.content().to_string(),
            sphere_id: d.sphere_id(),
            topic_ids: d.topic_ids().to_vec(),
            kind: if d.previous_id().is_some() {
                ChangeKind::Revised
            } else {
                ChangeKind::Created
            },
            changed_at: d.created_at(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{Decision, NewDecision};
    use crate::domain::foundation::{MeetingId, UserId};

    #[test]
    fn period_windows_match_the_product_rules() {
        assert_eq!(ChangePeriod::SevenDays.window_days(), 7);
        assert_eq!(ChangePeriod::SevenDays.recency_days(), 3);
        assert_eq!(ChangePeriod::ThirtyDays.window_days(), 30);
        assert_eq!(ChangePeriod::ThirtyDays.recency_days(), 10);
    }

    #[test]
    fn collect_changes_classifies_roots_and_successors() {
        let mut set = DecisionSet::new();
        let root = Decision::initial(NewDecision {
            content: "v0".to_string(),
            rationale: "r".to_string(),
            impact: "i".to_string(),
            meeting_id: MeetingId::new(),
            sphere_id: SphereId::new(),
            topic_ids: vec![TopicId::new("process")],
            created_by: UserId::new("tester"),
        })
        .unwrap();
        let successor = Decision::succeeding(
            root.id(),
            NewDecision {
                content: "v1".to_string(),
                rationale: "r".to_string(),
                impact: "i".to_string(),
                meeting_id: MeetingId::new(),
                sphere_id: root.sphere_id(),
                topic_ids: vec![TopicId::new("process")],
                created_by: UserId::new("tester"),
            },
        )
        .unwrap();
        set.insert(root.clone()).unwrap();
        set.insert(successor.clone()).unwrap();

        let changes = collect_changes(&set);
        assert_eq!(changes.len(), 2);

        let root_change = changes.iter().find(|c| c.decision_id == root.id()).unwrap();
        let succ_change = changes.iter().find(|c| c.decision_id == successor.id()).unwrap();
        assert_eq!(root_change.kind, ChangeKind::Created);
        assert_eq!(succ_change.kind, ChangeKind::Revised);
    }
}
