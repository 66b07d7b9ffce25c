//! Ports - Interfaces to the world outside the core.
//!
//! The core never fetches anything itself: meeting names and related
//! knowledge come in through these synchronous resolver traits, supplied
//! by the caller alongside the decision set.

mod knowledge_resolver;
mod meeting_resolver;

pub use knowledge_resolver::{RelatedKnowledge, RelatedKnowledgeResolver};
pub use meeting_resolver::MeetingNameResolver;
