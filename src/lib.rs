//! Scheduling core for a sports coaching app
//!
//! Given an in-memory collection of training sessions belonging to one or
//! more subjects (children or the trainee themself), this crate derives
//! the views the surrounding screens render:
//! - multi-dimensional filtering over subjects, event types, and dates
//! - a date index and truncated marker map for calendar rendering
//! - booking conflict detection over half-open time intervals
//!
//! Every operation is a synchronous, pure transformation over a snapshot
//! owned by the caller; derived structures are fresh values, never edited
//! in place. Rendering, data fetching, and booking persistence are
//! external collaborators.

pub mod calendar;
pub mod conflicts;
pub mod filter;
pub mod models;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_utils;

pub use calendar::{
  aggregate_markers, build_date_index, DayMarkers, MarkerDescriptor, DEFAULT_MAX_DOTS_PER_DATE,
};
pub use conflicts::{find_conflicts, ConflictError, ConflictResult, ACTIVE_STATUSES};
pub use filter::{filter_sessions, screen_sessions, DateSelection, FilterSpec, SkippedSession};
pub use models::{EventType, NewSession, Session, SessionIssue, SessionStatus, Subject};
pub use schedule::ScheduleView;
