//! Decision module - Immutable decision records and supersession chains.
//!
//! A decision is the atomic unit of governance memory. Records are never
//! mutated in place: every lifecycle transition returns a new value, and
//! the chain arena stores the full lineage keyed by id so traversal never
//! has to trust raw pointers blindly.

mod chain;
mod errors;
mod events;
mod record;

pub use chain::{DecisionSet, HistoryIter};
pub use errors::ChainError;
pub use events::DecisionEvent;
pub use record::{Decision, NewDecision};
