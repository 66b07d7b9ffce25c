//! The process-wide topic catalog.
//!
//! The catalog is built once on first access and never mutated afterwards,
//! so unsynchronized concurrent reads are safe. All lookups preserve the
//! stable catalog order; none of them rank by relevance.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::foundation::TopicId;

use super::topic::{SystemDomain, Topic, TopicLevel};

static CATALOG: Lazy<TopicCatalog> = Lazy::new(TopicCatalog::standard);

/// Returns the process-wide, read-only topic catalog.
pub fn catalog() -> &'static TopicCatalog {
    &CATALOG
}

/// Read-only lookup table over the topic taxonomy.
#[derive(Debug)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    by_id: HashMap<TopicId, usize>,
}

impl TopicCatalog {
    /// Builds a catalog from a list of entries.
    ///
    /// Entry order is preserved and becomes the stable lookup order.
    pub fn new(topics: Vec<Topic>) -> Self {
        let by_id = topics
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.id.clone(), idx))
            .collect();
        Self { topics, by_id }
    }

    /// The standard catalog: nine canonical domains, the functional topics
    /// under them, and a handful of contextual topics.
    fn standard() -> Self {
        let mut topics = Vec::new();

        for domain in SystemDomain::all() {
            topics.push(domain_topic(*domain));
        }

        topics.extend([
            functional(
                "component-structure",
                "Component Structure",
                "How UI components are decomposed and composed",
                SystemDomain::Architecture,
                "architecture",
            ),
            functional(
                "state-management",
                "State Management",
                "Where application state lives and how it flows",
                SystemDomain::Architecture,
                "architecture",
            ),
            functional(
                "decision-records",
                "Decision Records",
                "Shape and lifecycle of governance decision records",
                SystemDomain::DataModel,
                "data-model",
            ),
            functional(
                "knowledge-linking",
                "Knowledge Linking",
                "Cross-references between decisions, meetings and spheres",
                SystemDomain::DataModel,
                "data-model",
            ),
            functional(
                "visual-language",
                "Visual Language",
                "Color, typography and badge conventions",
                SystemDomain::UserExperience,
                "user-experience",
            ),
            functional(
                "navigation",
                "Navigation",
                "Entry points, routing and wayfinding",
                SystemDomain::UserExperience,
                "user-experience",
            ),
            functional(
                "access-control",
                "Access Control",
                "Who may originate or approve changes",
                SystemDomain::Security,
                "security",
            ),
            functional(
                "rendering-performance",
                "Rendering Performance",
                "Frame budgets and render cost of views",
                SystemDomain::Performance,
                "performance",
            ),
            functional(
                "external-apis",
                "External APIs",
                "Contracts with backend and third-party services",
                SystemDomain::Integration,
                "integration",
            ),
            functional(
                "meeting-cadence",
                "Meeting Cadence",
                "How and when decision meetings are held",
                SystemDomain::Process,
                "process",
            ),
            functional(
                "revisit-policy",
                "Revisit Policy",
                "When standing decisions should be reconsidered",
                SystemDomain::Governance,
                "governance",
            ),
        ]);

        topics.extend([
            contextual(
                "experiment",
                "Experiment",
                "Decision made provisionally, pending measured results",
            ),
            contextual(
                "tech-debt",
                "Tech Debt",
                "Known shortcut accepted for schedule reasons",
            ),
            contextual(
                "regulatory",
                "Regulatory",
                "Driven by external compliance requirements",
            ),
        ]);

        debug!(entries = topics.len(), "topic catalog initialized");
        Self::new(topics)
    }

    /// Looks up a topic by its id.
    pub fn topic_by_id(&self, id: &TopicId) -> Option<&Topic> {
        self.by_id.get(id).map(|idx| &self.topics[*idx])
    }

    /// Returns all topics at the given level, in catalog order.
    pub fn topics_by_level(&self, level: TopicLevel) -> Vec<&Topic> {
        self.topics.iter().filter(|t| t.level == level).collect()
    }

    /// Returns all topics belonging to a system domain (the domain entry
    /// itself plus its functional children), in catalog order.
    pub fn topics_by_domain(&self, domain: SystemDomain) -> Vec<&Topic> {
        self.topics
            .iter()
            .filter(|t| t.domain == Some(domain))
            .collect()
    }

    /// Returns the functional children of a level-1 topic.
    pub fn child_topics(&self, parent: &TopicId) -> Vec<&Topic> {
        self.topics
            .iter()
            .filter(|t| t.parent_id.as_ref() == Some(parent))
            .collect()
    }

    /// Case-insensitive substring match over name and description.
    ///
    /// Results keep catalog order; there is no relevance ranking.
    pub fn search(&self, query: &str) -> Vec<&Topic> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.topics
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// All catalog entries, in stable order.
    pub fn all(&self) -> &[Topic] {
        &self.topics
    }
}

fn domain_topic(domain: SystemDomain) -> Topic {
    let slug = match domain {
        SystemDomain::Architecture => "architecture",
        SystemDomain::DataModel => "data-model",
        SystemDomain::UserExperience => "user-experience",
        SystemDomain::Security => "security",
        SystemDomain::Performance => "performance",
        SystemDomain::Integration => "integration",
        SystemDomain::Infrastructure => "infrastructure",
        SystemDomain::Process => "process",
        SystemDomain::Governance => "governance",
    };
    Topic {
        id: TopicId::new(slug),
        level: TopicLevel::SystemDomain,
        name: domain.label().to_string(),
        description: format!("{} concerns across the system", domain.label()),
        domain: Some(domain),
        parent_id: None,
    }
}

fn functional(
    slug: &str,
    name: &str,
    description: &str,
    domain: SystemDomain,
    parent_slug: &str,
) -> Topic {
    Topic {
        id: TopicId::new(slug),
        level: TopicLevel::Functional,
        name: name.to_string(),
        description: description.to_string(),
        domain: Some(domain),
        parent_id: Some(TopicId::new(parent_slug)),
    }
}

fn contextual(slug: &str, name: &str, description: &str) -> Topic {
    Topic {
        id: TopicId::new(slug),
        level: TopicLevel::Contextual,
        name: name.to_string(),
        description: description.to_string(),
        domain: None,
        parent_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_system_domains() {
        let domains = catalog().topics_by_level(TopicLevel::SystemDomain);
        assert_eq!(domains.len(), 9);
    }

    #[test]
    fn every_functional_topic_has_a_level_one_parent() {
        for topic in catalog().topics_by_level(TopicLevel::Functional) {
            let parent_id = topic.parent_id.as_ref().expect("functional topic missing parent");
            let parent = catalog().topic_by_id(parent_id).expect("dangling parent id");
            assert_eq!(parent.level, TopicLevel::SystemDomain);
            assert_eq!(parent.domain, topic.domain);
        }
    }

    #[test]
    fn contextual_topics_have_no_parent_or_domain() {
        for topic in catalog().topics_by_level(TopicLevel::Contextual) {
            assert!(topic.parent_id.is_none());
            assert!(topic.domain.is_none());
        }
    }

    #[test]
    fn topic_by_id_finds_known_entry() {
        let topic = catalog().topic_by_id(&TopicId::new("visual-language")).unwrap();
        assert_eq!(topic.name, "Visual Language");
        assert_eq!(topic.domain, Some(SystemDomain::UserExperience));
    }

    #[test]
    fn topic_by_id_returns_none_for_unknown_entry() {
        assert!(catalog().topic_by_id(&TopicId::new("no-such-topic")).is_none());
    }

    #[test]
    fn topics_by_domain_includes_domain_entry_and_children() {
        let arch = catalog().topics_by_domain(SystemDomain::Architecture);
        assert!(arch.iter().any(|t| t.id.as_str() == "architecture"));
        assert!(arch.iter().any(|t| t.id.as_str() == "state-management"));
    }

    #[test]
    fn child_topics_returns_only_functional_children() {
        let children = catalog().child_topics(&TopicId::new("data-model"));
        assert!(!children.is_empty());
        for child in children {
            assert_eq!(child.level, TopicLevel::Functional);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let by_name = catalog().search("VISUAL");
        assert!(by_name.iter().any(|t| t.id.as_str() == "visual-language"));

        let by_description = catalog().search("compliance");
        assert!(by_description.iter().any(|t| t.id.as_str() == "regulatory"));
    }

    #[test]
    fn search_preserves_catalog_order() {
        let all: Vec<_> = catalog().search("e");
        let mut positions = Vec::new();
        for t in &all {
            let pos = catalog().all().iter().position(|c| c.id == t.id).unwrap();
            positions.push(pos);
        }
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn search_with_empty_query_returns_nothing() {
        assert!(catalog().search("").is_empty());
    }
}
