//! Single-record edit session

use crate::entities::project::{ProjectDraft, ProjectRecord};

/// Either idle or holding one draft copied from a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(ProjectDraft),
}

impl EditSession {
    /// Start editing a copy of `record`, dropping any draft in progress
    pub fn begin(&mut self, record: &ProjectRecord) {
        *self = EditSession::Editing(ProjectDraft::from(record));
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn draft(&self) -> Option<&ProjectDraft> {
        match self {
            EditSession::Editing(draft) => Some(draft),
            EditSession::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProjectDraft> {
        match self {
            EditSession::Editing(draft) => Some(draft),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::ProjectId;

    fn record(id: &str, title: &str) -> ProjectRecord {
        ProjectDraft::new("Ana Lee", title).into_record(ProjectId::new(id))
    }

    #[test]
    fn test_begin_copies_record() {
        let mut session = EditSession::default();
        let original = record("1", "Weather App");

        session.begin(&original);
        session.draft_mut().unwrap().project_title = "Weather App v2".to_string();

        assert!(session.is_editing());
        assert_eq!(session.draft().unwrap().project_title, "Weather App v2");
        assert_eq!(original.project_title, "Weather App");
    }

    #[test]
    fn test_begin_replaces_previous_draft() {
        let mut session = EditSession::default();
        session.begin(&record("1", "First"));
        session.draft_mut().unwrap().link = "unsaved".to_string();
        session.begin(&record("2", "Second"));

        let draft = session.draft().unwrap();
        assert_eq!(draft.id, Some(ProjectId::new("2")));
        assert_eq!(draft.link, "");
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = EditSession::default();
        session.begin(&record("1", "First"));
        session.cancel();
        assert_eq!(session, EditSession::Idle);
        assert!(session.draft().is_none());
        assert!(session.draft_mut().is_none());
    }
}
