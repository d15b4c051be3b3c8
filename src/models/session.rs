//! Session data model
//!
//! A session is the atomic schedulable unit: one subject, one calendar
//! date, one same-day time range. Statuses follow a small state machine;
//! `upcoming` is a presentation synonym for `scheduled` and is folded to
//! it before any branching logic.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Event Type
/// ---------------------------------------------------------------------------

/// Closed set of schedulable activity kinds.
///
/// Extending the set means adding a variant plus its color/icon arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
  Training,
  Match,
  Assessment,
  Event,
}

impl EventType {
  pub fn as_str(&self) -> &'static str {
    match self {
      EventType::Training => "training",
      EventType::Match => "match",
      EventType::Assessment => "assessment",
      EventType::Event => "event",
    }
  }

  /// Display color for type-based legends and chips
  pub fn display_color(&self) -> &'static str {
    match self {
      EventType::Training => "#4A90D9",
      EventType::Match => "#E2574C",
      EventType::Assessment => "#F5A623",
      EventType::Event => "#7B61C4",
    }
  }

  /// Icon name resolved by the rendering collaborator
  pub fn icon(&self) -> &'static str {
    match self {
      EventType::Training => "whistle",
      EventType::Match => "trophy",
      EventType::Assessment => "clipboard",
      EventType::Event => "calendar-star",
    }
  }
}

impl std::fmt::Display for EventType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for EventType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "training" => Ok(EventType::Training),
      "match" => Ok(EventType::Match),
      "assessment" => Ok(EventType::Assessment),
      "event" => Ok(EventType::Event),
      _ => Err(format!("Unknown event type: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Session Status
/// ---------------------------------------------------------------------------

/// Session lifecycle status.
///
/// `scheduled -> completed | cancelled`; both targets are terminal.
/// `Upcoming` is a UI synonym for a confirmed future session and is
/// never a distinct state internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
  Scheduled,
  Completed,
  Upcoming,
  Cancelled,
}

impl SessionStatus {
  /// Fold the `Upcoming` display label to its canonical value.
  /// All branching logic goes through this.
  pub fn canonical(&self) -> SessionStatus {
    match self {
      SessionStatus::Upcoming => SessionStatus::Scheduled,
      other => *other,
    }
  }

  /// Terminal sessions stay visible in history views but are excluded
  /// from conflict checks
  pub fn is_terminal(&self) -> bool {
    matches!(
      self.canonical(),
      SessionStatus::Completed | SessionStatus::Cancelled
    )
  }

  pub fn is_active(&self) -> bool {
    !self.is_terminal()
  }

  /// Valid transitions of the booking state machine
  pub fn can_transition_to(&self, next: SessionStatus) -> bool {
    match (self.canonical(), next.canonical()) {
      (SessionStatus::Scheduled, SessionStatus::Completed) => true,
      (SessionStatus::Scheduled, SessionStatus::Cancelled) => true,
      // Relabeling between the synonyms is a no-op, not a transition
      (SessionStatus::Scheduled, SessionStatus::Scheduled) => true,
      _ => false,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SessionStatus::Scheduled => "scheduled",
      SessionStatus::Completed => "completed",
      SessionStatus::Upcoming => "upcoming",
      SessionStatus::Cancelled => "cancelled",
    }
  }
}

impl std::fmt::Display for SessionStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for SessionStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "scheduled" => Ok(SessionStatus::Scheduled),
      "completed" => Ok(SessionStatus::Completed),
      "upcoming" => Ok(SessionStatus::Upcoming),
      "cancelled" => Ok(SessionStatus::Cancelled),
      _ => Err(format!("Unknown session status: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Session
/// ---------------------------------------------------------------------------

/// The atomic schedulable unit, owned by exactly one subject.
///
/// Invariant: `start < end`, both on the stated date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub id: String,
  pub subject_id: String,
  pub title: String,
  pub event_type: EventType,
  pub date: NaiveDate,
  pub start: NaiveTime,
  pub end: NaiveTime,
  pub status: SessionStatus,
  pub location: String,
  pub note: Option<String>,
}

impl Session {
  /// Check the record's own invariants (roster membership is checked
  /// separately, where the roster is available)
  pub fn validate(&self) -> Result<(), SessionIssue> {
    if self.subject_id.is_empty() {
      return Err(SessionIssue::MissingSubject);
    }
    if self.start >= self.end {
      return Err(SessionIssue::InvalidTimeRange {
        start: self.start,
        end: self.end,
      });
    }
    Ok(())
  }
}

/// A candidate session as submitted by the booking flow (without id and
/// status - both are assigned at booking confirmation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSession {
  pub subject_id: String,
  pub title: String,
  pub event_type: EventType,
  pub date: NaiveDate,
  pub start: NaiveTime,
  pub end: NaiveTime,
  pub location: String,
  pub note: Option<String>,
}

impl NewSession {
  pub fn validate(&self) -> Result<(), SessionIssue> {
    if self.subject_id.is_empty() {
      return Err(SessionIssue::MissingSubject);
    }
    if self.start >= self.end {
      return Err(SessionIssue::InvalidTimeRange {
        start: self.start,
        end: self.end,
      });
    }
    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Record Issues
/// ---------------------------------------------------------------------------

/// Why a record was rejected during screening or candidate validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionIssue {
  #[error("start {start} is not before end {end}")]
  InvalidTimeRange { start: NaiveTime, end: NaiveTime },

  #[error("subject {subject_id} is not in the roster")]
  UnknownSubject { subject_id: String },

  #[error("session has no subject id")]
  MissingSubject,
}
