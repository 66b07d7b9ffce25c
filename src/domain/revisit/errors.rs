//! Errors for the revisit workflow.

use thiserror::Error;

use crate::domain::decision::ChainError;
use crate::domain::foundation::DecisionId;

use super::request::EntryPoint;
use super::step::RevisitStep;

/// Errors raised by revisit preconditions, flow stepping, and commit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevisitError {
    /// Only the active tip of a lineage can be revisited.
    #[error("Decision {id} is not active and cannot be revisited")]
    NotActive { id: DecisionId },

    /// The revisit was requested from a disallowed logical origin.
    #[error("Revisit cannot be started from entry point {entry_point:?}")]
    ForbiddenEntryPoint { entry_point: EntryPoint },

    /// Commit was attempted before the flow reached its terminal step.
    #[error("Revisit flow is at step {step:?}, not ready to commit")]
    FlowIncomplete { step: RevisitStep },

    /// The stored original no longer matches the flow's snapshot; another
    /// writer got there first. The caller decides whether to restart.
    #[error("Decision {id} changed since the revisit flow started")]
    StaleOriginal { id: DecisionId },

    /// A chain-level failure during commit.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
