//! Timeline module - Derived, mode-dependent read views of the chain.
//!
//! Projections are pure functions over the decision set: computed fresh
//! on every query, never persisted, never written back.

mod projector;
mod view;

pub use projector::{project_timeline, TimelineMode, DASHBOARD_WINDOW};
pub use view::{CrossLink, Timeline, TimelineItem};
