//! Aggregated change summaries.

use serde::Serialize;
use std::collections::HashSet;

use super::change::{ChangeKind, ChangePeriod};
use super::filter::PeriodChange;

/// Counts-only aggregation over a filtered change set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub period: ChangePeriod,
    pub total: usize,
    pub created: usize,
    pub revised: usize,
    pub recent: usize,
    /// Number of distinct spheres touched.
    pub spheres: usize,
}

/// Aggregates a filtered change set into counts.
pub fn change_summary(filtered: &[PeriodChange], period: ChangePeriod) -> ChangeSummary {
    let spheres: HashSet<_> = filtered.iter().map(|c| c.change.sphere_id).collect();
    ChangeSummary {
        period,
        total: filtered.len(),
        created: filtered
            .iter()
            .filter(|c| c.change.kind == ChangeKind::Created)
            .count(),
        revised: filtered
            .iter()
            .filter(|c| c.change.kind == ChangeKind::Revised)
            .count(),
        recent: filtered.iter().filter(|c| c.is_recent).count(),
        spheres: spheres.len(),
    }
}

/// Renders the dashboard headline for a summary.
///
/// Deliberately exposes counts only; per-item detail belongs to the full
/// feed, not the dashboard.
pub fn dashboard_summary(summary: &ChangeSummary) -> String {
    match summary.total {
        0 => format!("No decisions changed in the {}", summary.period.label()),
        1 => format!(
            "1 decision changed in the {} ({} new, {} revised)",
            summary.period.label(),
            summary.created,
            summary.revised
        ),
        n => format!(
            "{} decisions changed in the {} ({} new, {} revised)",
            n,
            summary.period.label(),
            summary.created,
            summary.revised
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::digest::change::RecentChange;
    use crate::domain::foundation::{DecisionId, SphereId, Timestamp, TopicId};

    fn entry(kind: ChangeKind, sphere: SphereId, is_recent: bool) -> PeriodChange {
        PeriodChange {
            change: RecentChange {
                decision_id: DecisionId::new(),
                content: "a decision".to_string(),
                sphere_id: sphere,
                topic_ids: vec![TopicId::new("governance")],
                kind,
                changed_at: Timestamp::from_unix_secs(1_700_000_000),
            },
            is_recent,
        }
    }

    #[test]
    fn summary_counts_by_kind_recency_and_sphere() {
        let sphere_a = SphereId::new();
        let sphere_b = SphereId::new();
        let filtered = vec![
            entry(ChangeKind::Created, sphere_a, true),
            entry(ChangeKind::Revised, sphere_a, false),
            entry(ChangeKind::Revised, sphere_b, true),
        ];

        let summary = change_summary(&filtered, ChangePeriod::SevenDays);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.created, 1);
        assert_eq!(summary.revised, 2);
        assert_eq!(summary.recent, 2);
        assert_eq!(summary.spheres, 2);
    }

    #[test]
    fn dashboard_summary_shows_counts_only() {
        let sphere = SphereId::new();
        let filtered = vec![
            entry(ChangeKind::Created, sphere, true),
            entry(ChangeKind::Revised, sphere, false),
        ];
        let summary = change_summary(&filtered, ChangePeriod::SevenDays);

        let line = dashboard_summary(&summary);
        assert_eq!(line, "2 decisions changed in the last 7 days (1 new, 1 revised)");
        // No per-item content leaks into the headline.
        assert!(!line.contains("a decision"));
    }

    #[test]
    fn dashboard_summary_handles_empty_and_singular() {
        let empty = change_summary(&[], ChangePeriod::ThirtyDays);
        assert_eq!(
            dashboard_summary(&empty),
            "No decisions changed in the last 30 days"
        );

        let one = change_summary(
            &[entry(ChangeKind::Created, SphereId::new(), true)],
            ChangePeriod::SevenDays,
        );
        assert!(dashboard_summary(&one).starts_with("1 decision changed"));
    }
}
