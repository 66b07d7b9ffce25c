//! Meeting name resolution port.

use crate::domain::foundation::MeetingId;

/// Resolves a meeting id to its display name.
///
/// Meetings live outside the core; projections only need the name. Any
/// `Fn(MeetingId) -> Option<String>` closure implements this.
pub trait MeetingNameResolver {
    /// Returns the meeting's display name, or None if unknown.
    fn meeting_name(&self, meeting_id: MeetingId) -> Option<String>;
}

impl<F> MeetingNameResolver for F
where
    F: Fn(MeetingId) -> Option<String>,
{
    fn meeting_name(&self, meeting_id: MeetingId) -> Option<String> {
        self(meeting_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_implement_the_port() {
        let known = MeetingId::new();
        let resolver = move |id: MeetingId| {
            if id == known {
                Some("Q3 Planning".to_string())
            } else {
                None
            }
        };

        assert_eq!(resolver.meeting_name(known), Some("Q3 Planning".to_string()));
        assert_eq!(resolver.meeting_name(MeetingId::new()), None);
    }
}
