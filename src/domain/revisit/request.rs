//! Revisit preconditions and entry-point authorization.
//!
//! The core does not authenticate anyone; it only rejects disallowed
//! logical origins. Enforcement of the actual UI entry point is external.

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;

use super::errors::RevisitError;

/// Logical origin of a revisit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPoint {
    /// The governance dashboard.
    Dashboard,
    /// An active decision meeting.
    Meeting,
    /// Search results.
    Search,
    /// A shared deep link.
    DirectLink,
}

impl EntryPoint {
    /// Returns true if a revisit may be started from this origin.
    ///
    /// Only the dashboard and a meeting are permitted; passive surfaces
    /// like search results can link to a decision but not rewrite it.
    pub fn permits_revisit(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Meeting)
    }
}

/// Returns true iff the decision can be revisited.
///
/// This is the sole gate: only an active decision qualifies. A superseded
/// record is never revisited directly; its lineage tip is.
pub fn can_revisit(decision: &Decision) -> bool {
    decision.is_active()
}

/// Validates the preconditions for starting a revisit.
///
/// Both failure modes are user-facing and recoverable; nothing has been
/// written when this returns an error.
pub fn validate_revisit_request(
    decision: &Decision,
    entry_point: EntryPoint,
) -> Result<(), RevisitError> {
    if !can_revisit(decision) {
        return Err(RevisitError::NotActive { id: decision.id() });
    }
    if !entry_point.permits_revisit() {
        return Err(RevisitError::ForbiddenEntryPoint { entry_point });
    }
    Ok(())
}
