//! Topic catalog entry types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopicId;

/// Classification level of a topic.
///
/// Levels are ordered by specificity: system domains are the fixed
/// backbone, functional topics refine a single domain, contextual topics
/// add cross-cutting nuance and never stand alone on a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicLevel {
    /// Level 1 - fixed canonical system domains, never extended at runtime.
    SystemDomain,
    /// Level 2 - extensible functional topics, each with exactly one
    /// system-domain parent.
    Functional,
    /// Level 3 - rare contextual topics with no required parent; must
    /// co-occur with at least one level 1/2 topic on the same decision.
    Contextual,
}

impl TopicLevel {
    /// Numeric rank of the level (1 to 3).
    pub fn rank(&self) -> u8 {
        match self {
            Self::SystemDomain => 1,
            Self::Functional => 2,
            Self::Contextual => 3,
        }
    }
}

/// The fixed set of canonical system domains (level-1 backbone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemDomain {
    Architecture,
    DataModel,
    UserExperience,
    Security,
    Performance,
    Integration,
    Infrastructure,
    Process,
    Governance,
}

impl SystemDomain {
    /// All canonical domains, in stable catalog order.
    pub fn all() -> &'static [SystemDomain] {
        &[
            Self::Architecture,
            Self::DataModel,
            Self::UserExperience,
            Self::Security,
            Self::Performance,
            Self::Integration,
            Self::Infrastructure,
            Self::Process,
            Self::Governance,
        ]
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::DataModel => "Data Model",
            Self::UserExperience => "User Experience",
            Self::Security => "Security",
            Self::Performance => "Performance",
            Self::Integration => "Integration",
            Self::Infrastructure => "Infrastructure",
            Self::Process => "Process",
            Self::Governance => "Governance",
        }
    }
}

/// An immutable topic catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub level: TopicLevel,
    pub name: String,
    pub description: String,
    /// The system domain this topic belongs to. Present for level 1
    /// (the domain itself) and level 2 (the parent's domain); absent for
    /// contextual topics.
    pub domain: Option<SystemDomain>,
    /// Parent topic for level-2 entries (always a level-1 id).
    pub parent_id: Option<TopicId>,
}

impl Topic {
    /// Returns true for level-1 entries.
    pub fn is_system_domain(&self) -> bool {
        self.level == TopicLevel::SystemDomain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_nine_canonical_domains() {
        assert_eq!(SystemDomain::all().len(), 9);
    }

    #[test]
    fn level_ranks_are_ordered() {
        assert_eq!(TopicLevel::SystemDomain.rank(), 1);
        assert_eq!(TopicLevel::Functional.rank(), 2);
        assert_eq!(TopicLevel::Contextual.rank(), 3);
    }

    #[test]
    fn level_serializes_to_snake_case() {
        let json = serde_json::to_string(&TopicLevel::SystemDomain).unwrap();
        assert_eq!(json, "\"system_domain\"");
    }
}
