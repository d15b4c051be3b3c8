use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::session::Session;

/// A child or the trainee themself - the owner of sessions.
///
/// Subjects are created when a parent registers a dependent and are
/// immutable for the duration of a session. Removal is soft: a subject
/// is archived, never deleted, so history stays intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
  pub id: String,
  pub name: String,
  pub sports: Vec<String>,
  /// Display hex color, used for every calendar marker of this subject
  pub color: String,
  pub archived: bool,
}

impl Subject {
  pub fn is_active(&self) -> bool {
    !self.archived
  }
}

/// Look up a subject's display color in the roster
pub fn subject_color<'a>(subjects: &'a [Subject], id: &str) -> Option<&'a str> {
  subjects.iter().find(|s| s.id == id).map(|s| s.color.as_str())
}

/// Check whether a subject id exists in the roster
pub fn subject_exists(subjects: &[Subject], id: &str) -> bool {
  subjects.iter().any(|s| s.id == id)
}

/// Whether a subject may be archived: no active session on or after `today`.
///
/// The archive itself is the caller's mutation; the core only answers
/// the eligibility question.
pub fn can_archive(subject: &Subject, sessions: &[Session], today: NaiveDate) -> bool {
  !sessions.iter().any(|s| {
    s.subject_id == subject.id && s.status.is_active() && s.date >= today
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::session::SessionStatus;
  use crate::test_utils::{mock_session, mock_subject};

  #[test]
  fn test_subject_color_lookup() {
    let subjects = vec![
      mock_subject("child-1", "Maya", "#4A90D9"),
      mock_subject("child-2", "Omar", "#E2574C"),
    ];

    assert_eq!(subject_color(&subjects, "child-2"), Some("#E2574C"));
    assert_eq!(subject_color(&subjects, "child-9"), None);
  }

  #[test]
  fn test_can_archive_with_future_session() {
    let subject = mock_subject("child-1", "Maya", "#4A90D9");
    let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();

    let sessions = vec![mock_session(
      "s1",
      "child-1",
      NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
      "16:00",
      "17:00",
    )];

    assert!(!can_archive(&subject, &sessions, today));
  }

  #[test]
  fn test_can_archive_when_future_session_cancelled() {
    let subject = mock_subject("child-1", "Maya", "#4A90D9");
    let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();

    let mut session = mock_session(
      "s1",
      "child-1",
      NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
      "16:00",
      "17:00",
    );
    session.status = SessionStatus::Cancelled;

    assert!(can_archive(&subject, &[session], today));
  }

  #[test]
  fn test_can_archive_with_only_history() {
    let subject = mock_subject("child-1", "Maya", "#4A90D9");
    let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();

    let mut session = mock_session(
      "s1",
      "child-1",
      NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
      "16:00",
      "17:00",
    );
    session.status = SessionStatus::Completed;

    assert!(can_archive(&subject, &[session], today));
  }

  #[test]
  fn test_other_subjects_sessions_do_not_block_archive() {
    let subject = mock_subject("child-1", "Maya", "#4A90D9");
    let today = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();

    let sessions = vec![mock_session(
      "s1",
      "child-2",
      NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
      "16:00",
      "17:00",
    )];

    assert!(can_archive(&subject, &sessions, today));
  }
}
