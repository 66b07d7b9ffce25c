//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `decision` - Immutable decision records and supersession chains
//! - `taxonomy` - Bounded three-level topic catalog and assignment validation
//! - `revisit` - The revisit workflow state machine and transactional commit
//! - `timeline` - Mode-dependent timeline projections over the decision set
//! - `digest` - Time-windowed "what changed" summaries and feeds

pub mod decision;
pub mod digest;
pub mod foundation;
pub mod revisit;
pub mod taxonomy;
pub mod timeline;
