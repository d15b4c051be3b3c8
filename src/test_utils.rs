//! Test utilities and helpers
//!
//! Mock data factories and time helpers shared across the unit tests.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{EventType, NewSession, Session, SessionStatus, Subject};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_subject(id: &str, name: &str, color: &str) -> Subject {
  Subject {
    id: id.to_string(),
    name: name.to_string(),
    sports: vec!["football".to_string()],
    color: color.to_string(),
    archived: false,
  }
}

/// A scheduled training session with the given date and "HH:MM" times
pub fn mock_session(id: &str, subject_id: &str, date: NaiveDate, start: &str, end: &str) -> Session {
  Session {
    id: id.to_string(),
    subject_id: subject_id.to_string(),
    title: "Training session".to_string(),
    event_type: EventType::Training,
    date,
    start: parse_hhmm(start),
    end: parse_hhmm(end),
    status: SessionStatus::Scheduled,
    location: "Academy pitch 2".to_string(),
    note: None,
  }
}

/// A one-hour afternoon session of the given type
pub fn mock_session_of_type(
  id: &str,
  subject_id: &str,
  date: NaiveDate,
  event_type: EventType,
) -> Session {
  let mut session = mock_session(id, subject_id, date, "16:00", "17:00");
  session.event_type = event_type;
  session
}

pub fn mock_candidate(subject_id: &str, date: NaiveDate, start: &str, end: &str) -> NewSession {
  NewSession {
    subject_id: subject_id.to_string(),
    title: "New booking".to_string(),
    event_type: EventType::Training,
    date,
    start: parse_hhmm(start),
    end: parse_hhmm(end),
    location: "Academy pitch 2".to_string(),
    note: None,
  }
}

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
  NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn parse_hhmm(hhmm: &str) -> NaiveTime {
  NaiveTime::parse_from_str(hhmm, "%H:%M").expect("valid HH:MM test time")
}
