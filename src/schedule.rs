//! Schedule snapshot facade
//!
//! `ScheduleView` assembles everything the calendar and list renderers
//! consume in one pass: screening, filtering, the date index and the
//! marker map. The view is an immutable snapshot - any change to the
//! filter selection, the focused date, or the underlying event store is
//! answered by building a new view, never by editing one in place.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{aggregate_markers, build_date_index, DayMarkers};
use crate::filter::{filter_sessions, screen_sessions, FilterSpec, SkippedSession};
use crate::models::{Session, Subject};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
  /// Screened and filtered sessions - the list renderer's source
  pub sessions: Vec<Session>,
  /// Records excluded during screening, for a non-fatal diagnostic
  pub skipped: Vec<SkippedSession>,
  /// Date -> ordered session ids, for drill-down
  pub date_index: BTreeMap<NaiveDate, Vec<String>>,
  /// Date -> marker descriptors, for the calendar grid
  pub markers: BTreeMap<NaiveDate, DayMarkers>,
  pub focused_date: NaiveDate,
}

impl ScheduleView {
  /// Build a full snapshot view from the caller's event store.
  ///
  /// The inputs are read, never mutated; every derived structure is a
  /// fresh value.
  pub fn build(
    sessions: &[Session],
    subjects: &[Subject],
    spec: &FilterSpec,
    focused_date: NaiveDate,
    max_dots: usize,
  ) -> Self {
    let (screened, skipped) = screen_sessions(sessions, subjects);
    let filtered = filter_sessions(&screened, spec);
    let date_index = build_date_index(&filtered);
    let markers = aggregate_markers(&date_index, &filtered, subjects, max_dots, focused_date);

    Self {
      sessions: filtered,
      skipped,
      date_index,
      markers,
      focused_date,
    }
  }

  pub fn session(&self, id: &str) -> Option<&Session> {
    self.sessions.iter().find(|s| s.id == id)
  }

  /// Sessions on a date, in index order (start time, then id)
  pub fn sessions_on(&self, date: NaiveDate) -> Vec<&Session> {
    self
      .date_index
      .get(&date)
      .map(|ids| ids.iter().filter_map(|id| self.session(id)).collect())
      .unwrap_or_default()
  }

  /// Day view for the focused date
  pub fn focused_sessions(&self) -> Vec<&Session> {
    self.sessions_on(self.focused_date)
  }

  /// Week view: the Monday-based week containing `date`, one entry per
  /// day, served from the stored index without recomputation
  pub fn week_of(&self, date: NaiveDate) -> Vec<(NaiveDate, Vec<&Session>)> {
    let monday = date - Days::new(date.weekday().num_days_from_monday() as u64);

    (0..7)
      .map(|offset| {
        let day = monday + Days::new(offset);
        (day, self.sessions_on(day))
      })
      .collect()
  }

  /// Serialize the snapshot for the UI boundary
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}
