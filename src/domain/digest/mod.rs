//! Digest module - Time-windowed "what changed" views.
//!
//! The digest is a pure aggregation over decision records: a cutoff
//! filter, a newest-first ordering, a recency flag for display emphasis,
//! and counts-only summaries for the dashboard.

mod change;
mod filter;
mod format;
mod summary;

pub use change::{collect_changes, ChangeKind, ChangePeriod, RecentChange};
pub use filter::{filter_changes_by_period, filter_changes_by_period_at, PeriodChange};
pub use format::{format_change_date, format_decision_link};
pub use summary::{change_summary, dashboard_summary, ChangeSummary};
