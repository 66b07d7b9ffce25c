//! Steps of the revisit workflow.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The linear steps of the revisit workflow.
///
/// `Context -> Reason -> Meeting -> Complete`, with no skipping and no
/// re-entry once complete. Moving past either end is clamped by the flow,
/// not treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitStep {
    /// Review the decision being revisited.
    Context,
    /// Pick a reason and justify it.
    Reason,
    /// Cite the meeting where the new decision was made.
    Meeting,
    /// Terminal; the flow is ready to commit.
    Complete,
}

impl RevisitStep {
    /// All steps in workflow order.
    pub fn all() -> &'static [RevisitStep] {
        &[Self::Context, Self::Reason, Self::Meeting, Self::Complete]
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Context => Some(Self::Reason),
            Self::Reason => Some(Self::Meeting),
            Self::Meeting => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Context => None,
            Self::Reason => Some(Self::Context),
            Self::Meeting => Some(Self::Reason),
            Self::Complete => Some(Self::Meeting),
        }
    }

    /// Short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Context => "Context",
            Self::Reason => "Reason",
            Self::Meeting => "Meeting",
            Self::Complete => "Complete",
        }
    }
}

impl StateMachine for RevisitStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}
