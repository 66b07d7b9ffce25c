//! Period filtering for the change feed.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

use super::change::{ChangePeriod, RecentChange};

/// A change that survived the period filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodChange {
    #[serde(flatten)]
    pub change: RecentChange,
    /// True when the change falls inside the period's tighter recency
    /// sub-window. Display emphasis only; inclusion is decided by the
    /// period cutoff alone.
    pub is_recent: bool,
}

/// Filters changes to the period's window, measured from now.
pub fn filter_changes_by_period(
    changes: &[RecentChange],
    period: ChangePeriod,
) -> Vec<PeriodChange> {
    filter_changes_by_period_at(changes, period, Timestamp::now())
}

/// Filters changes to the period's window, measured from an explicit
/// reference time. Survivors come back newest-first.
pub fn filter_changes_by_period_at(
    changes: &[RecentChange],
    period: ChangePeriod,
    now: Timestamp,
) -> Vec<PeriodChange> {
    let cutoff = now.minus_days(period.window_days());
    let recency_cutoff = now.minus_days(period.recency_days());

    let mut survivors: Vec<PeriodChange> = changes
        .iter()
        .filter(|c| !c.changed_at.is_before(&cutoff))
        .map(|c| PeriodChange {
            change: c.clone(),
            is_recent: !c.changed_at.is_before(&recency_cutoff),
        })
        .collect();

    survivors.sort_by(|a, b| {
        b.change
            .changed_at
            .cmp(&a.change.changed_at)
            .then_with(|| a.change.decision_id.cmp(&b.change.decision_id))
    });
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::digest::change::ChangeKind;
    use crate::domain::foundation::{DecisionId, SphereId, TopicId};

    fn change_aged(days_ago: i64, now: Timestamp) -> RecentChange {
        RecentChange {
            decision_id: DecisionId::new(),
            content: format!("{} days ago", days_ago),
            sphere_id: SphereId::new(),
            topic_ids: vec![TopicId::new("governance")],
            kind: ChangeKind::Created,
            changed_at: now.minus_days(days_ago),
        }
    }

    #[test]
    fn seven_day_period_excludes_older_and_flags_recent() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        let changes = vec![change_aged(8, now), change_aged(2, now)];

        let filtered = filter_changes_by_period_at(&changes, ChangePeriod::SevenDays, now);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].change.content, "2 days ago");
        assert!(filtered[0].is_recent);
    }

    #[test]
    fn five_day_old_change_is_included_but_not_recent() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        let changes = vec![change_aged(5, now)];

        let filtered = filter_changes_by_period_at(&changes, ChangePeriod::SevenDays, now);

        assert_eq!(filtered.len(), 1);
        assert!(!filtered[0].is_recent);
    }

    #[test]
    fn thirty_day_period_uses_ten_day_recency_window() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        let changes = vec![change_aged(9, now), change_aged(25, now), change_aged(31, now)];

        let filtered = filter_changes_by_period_at(&changes, ChangePeriod::ThirtyDays, now);

        assert_eq!(filtered.len(), 2);
        assert!(filtered[0].is_recent, "9 days old is within the 10-day sub-window");
        assert!(!filtered[1].is_recent);
    }

    #[test]
    fn survivors_are_ordered_newest_first() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        let changes = vec![change_aged(6, now), change_aged(1, now), change_aged(4, now)];

        let filtered = filter_changes_by_period_at(&changes, ChangePeriod::SevenDays, now);

        let ages: Vec<_> = filtered.iter().map(|c| c.change.content.as_str()).collect();
        assert_eq!(ages, vec!["1 days ago", "4 days ago", "6 days ago"]);
    }

    #[test]
    fn recency_never_affects_inclusion() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        let changes: Vec<_> = (0..7).map(|d| change_aged(d, now)).collect();

        let filtered = filter_changes_by_period_at(&changes, ChangePeriod::SevenDays, now);
        assert_eq!(filtered.len(), 7);
        assert!(filtered.iter().any(|c| c.is_recent));
        assert!(filtered.iter().any(|c| !c.is_recent));
    }
}
