//! Topic assignment validation.
//!
//! A decision's topic set is validated once, at creation time, against the
//! cardinality rules: 1-2 system domains, 0-2 functional topics, at most
//! one contextual topic, and a contextual topic never stands alone. The
//! validator reports every violated rule at once so a caller can surface
//! the full list in a single pass.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::foundation::TopicId;

use super::catalog::{catalog, TopicCatalog};
use super::topic::TopicLevel;

/// Bounds on the number of topics per level on a single decision.
pub const SYSTEM_DOMAIN_MIN: usize = 1;
pub const SYSTEM_DOMAIN_MAX: usize = 2;
pub const FUNCTIONAL_MAX: usize = 2;
pub const CONTEXTUAL_MAX: usize = 1;

/// A single violated assignment rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum AssignmentViolation {
    #[error("Unknown topic id '{id}'")]
    UnknownTopic { id: TopicId },

    #[error("A decision needs 1-2 system domain topics, got {count}")]
    SystemDomainCount { count: usize },

    #[error("A decision allows at most 2 functional topics, got {count}")]
    FunctionalCount { count: usize },

    #[error("A decision allows at most 1 contextual topic, got {count}")]
    ContextualCount { count: usize },

    #[error("A contextual topic cannot exist alone on a decision")]
    ContextualAlone,
}

/// The outcome of validating a topic assignment.
///
/// Carries every violated rule, never just the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReport {
    pub violations: Vec<AssignmentViolation>,
}

impl AssignmentReport {
    /// Returns true when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates a topic set against the process-wide catalog.
pub fn validate_assignment(topic_ids: &[TopicId]) -> AssignmentReport {
    validate_assignment_against(topic_ids, catalog())
}

/// Validates a topic set against an explicit catalog.
///
/// Duplicate ids are collapsed before counting; the assignment is a set.
pub fn validate_assignment_against(
    topic_ids: &[TopicId],
    catalog: &TopicCatalog,
) -> AssignmentReport {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();
    let mut counts = [0usize; 3];

    for id in topic_ids {
        if !seen.insert(id.clone()) {
            continue;
        }
        match catalog.topic_by_id(id) {
            Some(topic) => counts[(topic.level.rank() - 1) as usize] += 1,
            None => violations.push(AssignmentViolation::UnknownTopic { id: id.clone() }),
        }
    }

    let [domains, functional, contextual] = counts;

    if !(SYSTEM_DOMAIN_MIN..=SYSTEM_DOMAIN_MAX).contains(&domains) {
        violations.push(AssignmentViolation::SystemDomainCount { count: domains });
    }
    if functional > FUNCTIONAL_MAX {
        violations.push(AssignmentViolation::FunctionalCount { count: functional });
    }
    if contextual > CONTEXTUAL_MAX {
        violations.push(AssignmentViolation::ContextualCount { count: contextual });
    }
    if contextual > 0 && domains + functional == 0 {
        violations.push(AssignmentViolation::ContextualAlone);
    }

    AssignmentReport { violations }
}
