//! Errors for decision records and chain traversal.

use thiserror::Error;

use crate::domain::foundation::DecisionId;
use crate::domain::taxonomy::AssignmentReport;

/// Errors raised by decision construction, supersession, and chain walks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// The topic set violated the assignment rules. The report carries
    /// every violated rule so the caller can display them in one pass.
    #[error("Topic assignment violates {} rule(s)", report.violations.len())]
    InvalidTopicAssignment { report: AssignmentReport },

    /// Attempted to supersede a decision that is not the active tip.
    /// Indicates a caller-side concurrency bug; never retried here.
    #[error("Decision {id} is not active and cannot be superseded")]
    NotActive { id: DecisionId },

    /// The referenced decision is not present in the set.
    #[error("Decision {id} is not in the set")]
    UnknownDecision { id: DecisionId },

    /// A chain walk hit a dangling pointer or revisited a record.
    #[error("Chain through {id} is corrupt: {reason}")]
    CorruptChain { id: DecisionId, reason: String },

    /// Pointer symmetry (or the single-active-tip rule) failed to hold
    /// after a commit. Fatal for the lineage: further writes are refused
    /// rather than auto-repaired.
    #[error("Chain integrity violated at {id}: {detail}")]
    ChainIntegrity { id: DecisionId, detail: String },

    /// The lineage was poisoned by an earlier integrity failure.
    #[error("Lineage rooted at {root} is halted after an integrity failure")]
    LineagePoisoned { root: DecisionId },
}
