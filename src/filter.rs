//! Multi-dimensional session filtering
//!
//! The filter engine is a pure function over an event snapshot: the same
//! `(sessions, spec)` input always yields the same output, so callers can
//! re-run it on every filter-UI interaction without side effects.
//!
//! Screening runs first and is defensive: a malformed record is excluded
//! and reported in a diagnostics list rather than failing the whole
//! calendar.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{EventType, Session, SessionIssue, Subject};
use crate::models::subject::subject_exists;

/// ---------------------------------------------------------------------------
/// Filter Specification
/// ---------------------------------------------------------------------------

/// Date dimension of a filter: everything, a single focus day, or an
/// inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateSelection {
  #[default]
  Any,
  Day {
    date: NaiveDate,
  },
  Range {
    from: NaiveDate,
    to: NaiveDate,
  },
}

impl DateSelection {
  pub fn matches(&self, date: NaiveDate) -> bool {
    match self {
      DateSelection::Any => true,
      DateSelection::Day { date: day } => date == *day,
      DateSelection::Range { from, to } => date >= *from && date <= *to,
    }
  }
}

/// The caller's active filter selection.
///
/// Empty subject/type sets mean "no restriction" in that dimension. The
/// engine never mutates the spec; it is a value object held by the
/// calling screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
  pub subjects: HashSet<String>,
  pub types: HashSet<EventType>,
  pub dates: DateSelection,
}

impl FilterSpec {
  /// A spec with no restrictions - the identity filter
  pub fn all() -> Self {
    Self::default()
  }

  pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
    self.subjects.insert(subject_id.into());
    self
  }

  pub fn with_type(mut self, event_type: EventType) -> Self {
    self.types.insert(event_type);
    self
  }

  pub fn on_day(mut self, date: NaiveDate) -> Self {
    self.dates = DateSelection::Day { date };
    self
  }

  pub fn in_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
    self.dates = DateSelection::Range { from, to };
    self
  }

  /// All three predicates ANDed; there is no OR-across-dimensions mode
  pub fn matches(&self, session: &Session) -> bool {
    let subject_ok = self.subjects.is_empty() || self.subjects.contains(&session.subject_id);
    let type_ok = self.types.is_empty() || self.types.contains(&session.event_type);
    subject_ok && type_ok && self.dates.matches(session.date)
  }
}

/// ---------------------------------------------------------------------------
/// Screening
/// ---------------------------------------------------------------------------

/// A record excluded during screening, reported to the caller as a
/// non-fatal diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSession {
  pub session_id: String,
  pub issue: SessionIssue,
}

/// Drop malformed records before any derived structure is built.
///
/// A session is kept only if its own invariants hold and its subject id
/// is present in the roster; stale subject ids are excluded silently
/// rather than raised.
pub fn screen_sessions(
  sessions: &[Session],
  subjects: &[Subject],
) -> (Vec<Session>, Vec<SkippedSession>) {
  let mut kept = Vec::with_capacity(sessions.len());
  let mut skipped = Vec::new();

  for session in sessions {
    let issue = match session.validate() {
      Err(issue) => Some(issue),
      Ok(()) if !subject_exists(subjects, &session.subject_id) => {
        Some(SessionIssue::UnknownSubject {
          subject_id: session.subject_id.clone(),
        })
      }
      Ok(()) => None,
    };

    match issue {
      Some(issue) => {
        warn!("skipping session {}: {}", session.id, issue);
        skipped.push(SkippedSession {
          session_id: session.id.clone(),
          issue,
        });
      }
      None => kept.push(session.clone()),
    }
  }

  (kept, skipped)
}

/// ---------------------------------------------------------------------------
/// Filter Engine
/// ---------------------------------------------------------------------------

/// Reduce the snapshot to the subset matching `spec`.
///
/// An empty result is a valid outcome; callers render an empty state.
pub fn filter_sessions(sessions: &[Session], spec: &FilterSpec) -> Vec<Session> {
  sessions
    .iter()
    .filter(|s| spec.matches(s))
    .cloned()
    .collect()
}
