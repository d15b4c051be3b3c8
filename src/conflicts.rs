//! Booking conflict detection
//!
//! Two sessions conflict iff they belong to the same subject, fall on the
//! same date, are both in an active status, and their `[start, end)`
//! intervals overlap. The comparison is half-open: back-to-back bookings
//! that touch exactly at the boundary are not conflicts.
//!
//! A found conflict is a normal outcome the booking collaborator acts on
//! (block or warn). The error path is reserved for caller misuse - a
//! candidate that fails validation indicates a bug upstream, not a
//! data-quality issue.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{NewSession, Session, SessionIssue, SessionStatus};

/// Statuses counted for conflict purposes
pub const ACTIVE_STATUSES: [SessionStatus; 2] =
  [SessionStatus::Scheduled, SessionStatus::Upcoming];

/// Outcome of a conflict check, listing every conflicting session so the
/// booking flow can present "this overlaps with X" rather than a bare
/// rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictResult {
  pub has_conflict: bool,
  pub conflicts: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
  #[error("invalid candidate session: {0}")]
  InvalidCandidate(#[from] SessionIssue),

  #[error("candidate belongs to subject {candidate} but the check was for {requested}")]
  SubjectMismatch { requested: String, candidate: String },
}

/// Half-open interval overlap: `[a_start, a_end)` vs `[b_start, b_end)`
fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
  a_start < b_end && b_start < a_end
}

/// Find every existing session the candidate would double-book.
///
/// Terminal sessions (`completed`, `cancelled`) never appear in the
/// result; they stay visible in history views but no longer hold a slot.
pub fn find_conflicts(
  existing: &[Session],
  subject_id: &str,
  candidate: &NewSession,
) -> Result<ConflictResult, ConflictError> {
  candidate.validate()?;
  if candidate.subject_id != subject_id {
    return Err(ConflictError::SubjectMismatch {
      requested: subject_id.to_string(),
      candidate: candidate.subject_id.clone(),
    });
  }

  let conflicts: Vec<Session> = existing
    .iter()
    .filter(|s| s.subject_id == subject_id)
    .filter(|s| s.date == candidate.date)
    .filter(|s| ACTIVE_STATUSES.contains(&s.status))
    .filter(|s| overlaps(candidate.start, candidate.end, s.start, s.end))
    .cloned()
    .collect();

  Ok(ConflictResult {
    has_conflict: !conflicts.is_empty(),
    conflicts,
  })
}
