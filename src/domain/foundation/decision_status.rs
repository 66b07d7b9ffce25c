//! Decision lifecycle status.

use serde::{Deserialize, Serialize};

use super::StateMachine;

/// Status of a decision record within its supersession chain.
///
/// The only legal transition is `Active -> Superseded`, performed by the
/// revisit workflow when a successor decision is committed. A superseded
/// decision never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    /// The current tip of its lineage.
    Active,
    /// Replaced by a successor decision.
    Superseded,
}

impl DecisionStatus {
    /// Returns true if the decision is the active tip of its lineage.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl StateMachine for DecisionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (Self::Active, Self::Superseded))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Active => vec![Self::Superseded],
            Self::Superseded => vec![],
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Superseded => write!(f, "Superseded"),
        }
    }
}
