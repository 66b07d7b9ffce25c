//! The transactional supersession commit.
//!
//! Composes the decision-store primitives: supersede the original and
//! create the successor, written to the set together or not at all. A
//! caller re-reading the set after a successful commit observes both
//! records with the chain invariants holding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::decision::{Decision, DecisionSet, NewDecision};
use crate::domain::foundation::{TopicId, UserId};

use super::errors::RevisitError;
use super::flow::RevisitFlow;
use super::reason::RevisitReason;

/// Caller-supplied content for the successor decision.
///
/// The meeting comes from the flow (the newly created meeting recorded in
/// the meeting step) and the sphere is inherited from the original.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessorDraft {
    pub content: String,
    pub rationale: String,
    pub impact: String,
    pub topic_ids: Vec<TopicId>,
    pub created_by: UserId,
}

/// Both records produced by a successful commit, plus the audit trail
/// of why the revisit happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisitOutcome {
    pub superseded: Decision,
    pub successor: Decision,
    pub reason: RevisitReason,
    pub justification: String,
}

/// Commits a completed revisit flow against the decision set.
///
/// Preconditions, checked in order:
/// 1. the flow reached `Complete`;
/// 2. the stored original still equals the flow's snapshot (optimistic
///    concurrency; a mismatch means another writer superseded it first);
/// 3. the successor's topic set validates.
///
/// Both records are fully built before the set is touched; partial
/// application is impossible from the caller's perspective.
pub fn commit_revisit(
    set: &mut DecisionSet,
    flow: &RevisitFlow,
    draft: SuccessorDraft,
) -> Result<RevisitOutcome, RevisitError> {
    if !flow.is_complete() {
        return Err(RevisitError::FlowIncomplete { step: flow.step() });
    }
    let reason = flow
        .reason()
        .ok_or(RevisitError::FlowIncomplete { step: flow.step() })?;
    let meeting_id = flow
        .new_meeting_id()
        .ok_or(RevisitError::FlowIncomplete { step: flow.step() })?;

    let stored = set.require(flow.decision_id())?.clone();
    if &stored != flow.original() {
        return Err(RevisitError::StaleOriginal { id: stored.id() });
    }

    let successor = Decision::succeeding(
        stored.id(),
        NewDecision {
            content: draft.content,
            rationale: draft.rationale,
            impact: draft.impact,
            meeting_id,
            sphere_id: stored.sphere_id(),
            topic_ids: draft.topic_ids,
            created_by: draft.created_by,
        },
    )?;
    let superseded = stored.supersede(successor.id())?;

    debug!(
        original = %superseded.id(),
        successor = %successor.id(),
        reason = ?reason,
        "committing revisit"
    );
    set.commit_supersession(superseded.clone(), successor.clone())?;

    Ok(RevisitOutcome {
        superseded,
        successor,
        reason,
        justification: flow.justification().to_string(),
    })
}
