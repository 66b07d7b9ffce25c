//! Reasons for revisiting a standing decision.

use serde::{Deserialize, Serialize};

/// Why an active decision is being revisited.
///
/// Picked by the user in the reason step; the free-text justification
/// accompanies it and is required alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitReason {
    /// New facts surfaced since the decision was made.
    NewInformation,
    /// The surrounding context or constraints changed.
    ContextChanged,
    /// The decision did not produce the expected outcome.
    OutcomeNotAchieved,
    /// Scheduled periodic review of standing decisions.
    PeriodicReview,
}

impl RevisitReason {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewInformation => "New information",
            Self::ContextChanged => "Context changed",
            Self::OutcomeNotAchieved => "Outcome not achieved",
            Self::PeriodicReview => "Periodic review",
        }
    }
}
