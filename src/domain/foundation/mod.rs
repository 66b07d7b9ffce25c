//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Decision Ledger domain.

mod decision_status;
mod ids;
mod state_machine;
mod timestamp;

pub use decision_status::DecisionStatus;
pub use ids::{DecisionId, MeetingId, SphereId, TopicId, UserId};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
