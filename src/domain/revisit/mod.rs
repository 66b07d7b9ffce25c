//! Revisit module - The workflow that turns an active decision into a new one.
//!
//! Revisiting never edits a record: the workflow gathers a reason, a
//! justification and a new meeting, then commits a supersession pair
//! (superseded original + new active successor) in one step.

mod commit;
mod errors;
mod flow;
mod reason;
mod request;
mod step;

pub use commit::{commit_revisit, RevisitOutcome, SuccessorDraft};
pub use errors::RevisitError;
pub use flow::RevisitFlow;
pub use reason::RevisitReason;
pub use request::{can_revisit, validate_revisit_request, EntryPoint};
pub use step::RevisitStep;
