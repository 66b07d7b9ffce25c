//! The immutable decision record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DecisionId, DecisionStatus, MeetingId, SphereId, StateMachine, Timestamp, TopicId, UserId,
};
use crate::domain::taxonomy::validate_assignment;

use super::errors::ChainError;

/// Caller-supplied input for a new decision record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDecision {
    pub content: String,
    pub rationale: String,
    pub impact: String,
    pub meeting_id: MeetingId,
    pub sphere_id: SphereId,
    pub topic_ids: Vec<TopicId>,
    pub created_by: UserId,
}

/// An immutable decision record.
///
/// Content, rationale, impact, meeting and creation time never change
/// after construction. Only `status` and the chain pointers differ between
/// the copies produced by the revisit workflow; no method mutates a record
/// in place, so snapshots held by concurrent readers are never torn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    content: String,
    rationale: String,
    impact: String,
    meeting_id: MeetingId,
    sphere_id: SphereId,
    topic_ids: Vec<TopicId>,
    status: DecisionStatus,
    previous_id: Option<DecisionId>,
    next_id: Option<DecisionId>,
    created_at: Timestamp,
    created_by: UserId,
}

impl Decision {
    /// Creates the first decision of a new lineage.
    ///
    /// The topic set is validated against the catalog; every violated rule
    /// is carried in the error.
    pub fn initial(draft: NewDecision) -> Result<Self, ChainError> {
        Self::with_predecessor(draft, None)
    }

    /// Creates a decision that continues an existing lineage.
    ///
    /// Used by the revisit commit to wire the successor's back pointer
    /// before anything is written to the set.
    pub fn succeeding(previous: DecisionId, draft: NewDecision) -> Result<Self, ChainError> {
        Self::with_predecessor(draft, Some(previous))
    }

    fn with_predecessor(
        draft: NewDecision,
        previous_id: Option<DecisionId>,
    ) -> Result<Self, ChainError> {
        let report = validate_assignment(&draft.topic_ids);
        if !report.is_valid() {
            return Err(ChainError::InvalidTopicAssignment { report });
        }

        Ok(Self {
            id: DecisionId::new(),
            content: draft.content,
            rationale: draft.rationale,
            impact: draft.impact,
            meeting_id: draft.meeting_id,
            sphere_id: draft.sphere_id,
            topic_ids: draft.topic_ids,
            status: DecisionStatus::Active,
            previous_id,
            next_id: None,
            created_at: Timestamp::now(),
            created_by: draft.created_by,
        })
    }

    /// Reconstitutes a decision from persisted data.
    ///
    /// Used by callers that own the storage layer to rebuild records
    /// from their own representation. Bypasses topic validation; the
    /// record was validated when first created.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        content: String,
        rationale: String,
        impact: String,
        meeting_id: MeetingId,
        sphere_id: SphereId,
        topic_ids: Vec<TopicId>,
        status: DecisionStatus,
        previous_id: Option<DecisionId>,
        next_id: Option<DecisionId>,
        created_at: Timestamp,
        created_by: UserId,
    ) -> Self {
        Self {
            id,
            content,
            rationale,
            impact,
            meeting_id,
            sphere_id,
            topic_ids,
            status,
            previous_id,
            next_id,
            created_at,
            created_by,
        }
    }

    /// Returns a superseded copy of this decision pointing at its successor.
    ///
    /// Fails unless the decision is currently active; a superseded record
    /// can never be superseded again.
    pub fn supersede(&self, next_id: DecisionId) -> Result<Self, ChainError> {
        let status = self
            .status
            .transition_to(DecisionStatus::Superseded)
            .map_err(|_| ChainError::NotActive { id: self.id })?;

        let mut superseded = self.clone();
        superseded.status = status;
        superseded.next_id = Some(next_id);
        Ok(superseded)
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn impact(&self) -> &str {
        &self.impact
    }

    /// The meeting this decision cites. Always exactly one.
    pub fn meeting_id(&self) -> MeetingId {
        self.meeting_id
    }

    pub fn sphere_id(&self) -> SphereId {
        self.sphere_id
    }

    pub fn topic_ids(&self) -> &[TopicId] {
        &self.topic_ids
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    /// Returns true if this decision is the active tip of its lineage.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn previous_id(&self) -> Option<DecisionId> {
        self.previous_id
    }

    pub fn next_id(&self) -> Option<DecisionId> {
        self.next_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::AssignmentViolation;

    pub(crate) fn draft(content: &str) -> NewDecision {
        NewDecision {
            content: content.to_string(),
            rationale: "because".to_string(),
            impact: "low".to_string(),
            meeting_id: MeetingId::new(),
            sphere_id: SphereId::new(),
            topic_ids: vec![TopicId::new("architecture")],
            created_by: UserId::new("tester"),
        }
    }

    #[test]
    fn initial_decision_is_active_with_null_pointers() {
        let d = Decision::initial(draft("Use turquoise for active badges")).unwrap();
        assert_eq!(d.status(), DecisionStatus::Active);
        assert!(d.previous_id().is_none());
        assert!(d.next_id().is_none());
        assert_eq!(d.content(), "Use turquoise for active badges");
    }

    #[test]
    fn initial_decision_rejects_invalid_topic_set() {
        let mut bad = draft("x");
        bad.topic_ids = vec![];
        let err = Decision::initial(bad).unwrap_err();
        match err {
            ChainError::InvalidTopicAssignment { report } => {
                assert!(report
                    .violations
                    .contains(&AssignmentViolation::SystemDomainCount { count: 0 }));
            }
            other => panic!("expected InvalidTopicAssignment, got {:?}", other),
        }
    }

    #[test]
    fn supersede_returns_new_copy_and_leaves_original_untouched() {
        let original = Decision::initial(draft("v1")).unwrap();
        let next_id = DecisionId::new();

        let superseded = original.supersede(next_id).unwrap();

        assert_eq!(original.status(), DecisionStatus::Active);
        assert_eq!(superseded.status(), DecisionStatus::Superseded);
        assert_eq!(superseded.next_id(), Some(next_id));
        assert_eq!(superseded.id(), original.id());
        assert_eq!(superseded.content(), original.content());
        assert_eq!(superseded.created_at(), original.created_at());
    }

    #[test]
    fn supersede_fails_on_already_superseded_record() {
        let original = Decision::initial(draft("v1")).unwrap();
        let superseded = original.supersede(DecisionId::new()).unwrap();

        let err = superseded.supersede(DecisionId::new()).unwrap_err();
        assert_eq!(err, ChainError::NotActive { id: original.id() });
    }

    #[test]
    fn succeeding_wires_back_pointer() {
        let first = Decision::initial(draft("v1")).unwrap();
        let second = Decision::succeeding(first.id(), draft("v2")).unwrap();
        assert_eq!(second.previous_id(), Some(first.id()));
        assert!(second.is_active());
    }
}
