//! Taxonomy module - Bounded three-level topic classification.
//!
//! Topics answer "what system area does this decision concern". The catalog
//! is process-wide, read-only, and initialized once; assignment (which
//! topics attach to which decision) is validated at decision creation and
//! fixed thereafter.

mod assignment;
mod catalog;
mod topic;

pub use assignment::{validate_assignment, AssignmentReport, AssignmentViolation};
pub use catalog::{catalog, TopicCatalog};
pub use topic::{SystemDomain, Topic, TopicLevel};
