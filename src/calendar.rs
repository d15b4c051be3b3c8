//! Date index and calendar marker aggregation
//!
//! The index maps each calendar date to its sessions, ordered for list
//! rendering. Markers are the compact per-date dot descriptors a calendar
//! grid renders. Both are derived values: any change to the filter
//! selection or the event snapshot means a full rebuild from the filtered
//! set. Input sizes are a family's sessions, so recomputation is cheap
//! and there is no incremental patching to go stale.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::subject::subject_color;
use crate::models::{Session, Subject};

/// Dots shown per date before truncation kicks in
pub const DEFAULT_MAX_DOTS_PER_DATE: usize = 3;

/// Marker color when a subject has no roster entry to take a color from
pub const FALLBACK_MARKER_COLOR: &str = "#9B9B9B";

/// ---------------------------------------------------------------------------
/// Date Index
/// ---------------------------------------------------------------------------

/// Map each date to its session ids, ordered by start time ascending,
/// ties broken by id for determinism
pub fn build_date_index(sessions: &[Session]) -> BTreeMap<NaiveDate, Vec<String>> {
  let mut by_date: BTreeMap<NaiveDate, Vec<&Session>> = BTreeMap::new();

  for session in sessions {
    by_date.entry(session.date).or_default().push(session);
  }

  let index = by_date
    .into_iter()
    .map(|(date, mut day)| {
      day.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
      (date, day.into_iter().map(|s| s.id.clone()).collect())
    })
    .collect();

  debug!("rebuilt date index for {} sessions", sessions.len());
  index
}

/// ---------------------------------------------------------------------------
/// Marker Aggregation
/// ---------------------------------------------------------------------------

/// One calendar dot, colored by the owning subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
  pub color: String,
}

/// Per-date marker aggregate for the calendar grid.
///
/// The dot list is truncated to the configured maximum; `event_count`
/// keeps the real total so truncation stays a rendering concern only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarkers {
  pub dots: Vec<MarkerDescriptor>,
  pub event_count: usize,
  pub selected: bool,
}

/// Produce the per-date marker map from an index.
///
/// Dots follow the index order (start time, then id), one per session up
/// to `max_dots`. The focused date is flagged `selected` and appears in
/// the output even when it has no sessions; selection never changes
/// event counts.
pub fn aggregate_markers(
  date_index: &BTreeMap<NaiveDate, Vec<String>>,
  sessions: &[Session],
  subjects: &[Subject],
  max_dots: usize,
  focused_date: NaiveDate,
) -> BTreeMap<NaiveDate, DayMarkers> {
  let mut markers: BTreeMap<NaiveDate, DayMarkers> = date_index
    .iter()
    .map(|(date, ids)| {
      let dots = ids
        .iter()
        .take(max_dots)
        .map(|id| MarkerDescriptor {
          color: dot_color(sessions, subjects, id),
        })
        .collect();

      (
        *date,
        DayMarkers {
          dots,
          event_count: ids.len(),
          selected: *date == focused_date,
        },
      )
    })
    .collect();

  markers.entry(focused_date).or_insert(DayMarkers {
    dots: Vec::new(),
    event_count: 0,
    selected: true,
  });

  markers
}

fn dot_color(sessions: &[Session], subjects: &[Subject], session_id: &str) -> String {
  sessions
    .iter()
    .find(|s| s.id == session_id)
    .and_then(|s| subject_color(subjects, &s.subject_id))
    .unwrap_or(FALLBACK_MARKER_COLOR)
    .to_string()
}
