//! Domain events emitted by chain writes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, Timestamp};

/// Events recorded by the decision set when a commit lands.
///
/// Accumulated in the set and drained by the caller (for example to feed
/// an audit trail or notification fan-out outside this core).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DecisionEvent {
    /// A new decision record entered the set.
    Created {
        decision_id: DecisionId,
        at: Timestamp,
    },
    /// An active decision was superseded by a successor.
    Superseded {
        decision_id: DecisionId,
        successor_id: DecisionId,
        at: Timestamp,
    },
}
