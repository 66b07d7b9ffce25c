//! Related knowledge resolution port.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DecisionId;

/// Knowledge linked to a decision: names of related topics, workspaces
/// and meetings, already resolved to display text by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedKnowledge {
    pub topics: Vec<String>,
    pub workspaces: Vec<String>,
    pub meetings: Vec<String>,
}

impl RelatedKnowledge {
    /// Returns true when nothing is linked.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.workspaces.is_empty() && self.meetings.is_empty()
    }
}

/// Resolves the knowledge linked to a decision.
///
/// Optional: timeline callers that do not need annotations simply pass
/// no resolver.
pub trait RelatedKnowledgeResolver {
    /// Returns the linked knowledge for a decision, or None if there is none.
    fn related_knowledge(&self, decision_id: DecisionId) -> Option<RelatedKnowledge>;
}

impl<F> RelatedKnowledgeResolver for F
where
    F: Fn(DecisionId) -> Option<RelatedKnowledge>,
{
    fn related_knowledge(&self, decision_id: DecisionId) -> Option<RelatedKnowledge> {
        self(decision_id)
    }
}
