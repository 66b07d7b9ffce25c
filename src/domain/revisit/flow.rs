//! In-progress revisit flow state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, MeetingId};

use super::errors::RevisitError;
use super::reason::RevisitReason;
use super::step::RevisitStep;

/// The state of one in-progress revisit.
///
/// A flow is a scratch value: nothing is committed until
/// [`commit_revisit`](super::commit_revisit) succeeds, so discarding a
/// flow mid-way has no side effects. The flow keeps a snapshot of the
/// original decision as its optimistic-concurrency token; if the stored
/// record changes before commit, the commit is rejected as stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisitFlow {
    original: Decision,
    step: RevisitStep,
    reason: Option<RevisitReason>,
    justification: String,
    new_meeting_id: Option<MeetingId>,
}

impl RevisitFlow {
    /// Starts a flow over an active decision, positioned at `Context`
    /// with the reason unset.
    pub fn start(decision: &Decision) -> Result<Self, RevisitError> {
        if !decision.is_active() {
            return Err(RevisitError::NotActive { id: decision.id() });
        }
        Ok(Self {
            original: decision.clone(),
            step: RevisitStep::Context,
            reason: None,
            justification: String::new(),
            new_meeting_id: None,
        })
    }

    /// The decision being revisited, as it was when the flow started.
    pub fn original(&self) -> &Decision {
        &self.original
    }

    pub fn decision_id(&self) -> DecisionId {
        self.original.id()
    }

    pub fn step(&self) -> RevisitStep {
        self.step
    }

    pub fn reason(&self) -> Option<RevisitReason> {
        self.reason
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    pub fn new_meeting_id(&self) -> Option<MeetingId> {
        self.new_meeting_id
    }

    /// Returns true once the flow has reached its terminal step.
    pub fn is_complete(&self) -> bool {
        self.step == RevisitStep::Complete
    }

    /// Records the reason and its free-text justification.
    pub fn set_reason(&mut self, reason: RevisitReason, justification: impl Into<String>) {
        self.reason = Some(reason);
        self.justification = justification.into();
    }

    /// Records the newly created meeting the successor will cite.
    pub fn set_meeting(&mut self, meeting_id: MeetingId) {
        self.new_meeting_id = Some(meeting_id);
    }

    /// Whether the current step's requirements are satisfied.
    ///
    /// `Context` always proceeds; `Reason` needs a reason and a non-empty
    /// justification; `Meeting` needs the new meeting id; `Complete`
    /// never proceeds.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            RevisitStep::Context => true,
            RevisitStep::Reason => {
                self.reason.is_some() && !self.justification.trim().is_empty()
            }
            RevisitStep::Meeting => self.new_meeting_id.is_some(),
            RevisitStep::Complete => false,
        }
    }

    /// Moves to the next step when the current one is satisfied.
    ///
    /// A no-op (clamped, not an error) at `Complete` or when the current
    /// step's requirements are unmet. Returns the step after the call.
    pub fn advance(&mut self) -> RevisitStep {
        if self.can_proceed() {
            if let Some(next) = self.step.next() {
                debug!(decision = %self.original.id(), from = ?self.step, to = ?next, "revisit step");
                self.step = next;
            }
        }
        self.step
    }

    /// Moves to the previous step; a no-op before `Context`.
    pub fn back(&mut self) -> RevisitStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }
}
