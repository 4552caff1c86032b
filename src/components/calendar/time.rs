use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::models::CalendarEvent;

/// Half-open time span `[start, end)` on the local logical clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window, rejecting degenerate spans where `start >= end`
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// One-hour slot starting at `hour:00` on `date`
    pub fn hour_at(date: NaiveDate, hour: u32) -> Option<Self> {
        let start = date.and_hms_opt(hour, 0, 0)?;
        let end = start.checked_add_signed(Duration::hours(1))?;
        Self::new(start, end)
    }

    pub(crate) fn from_event(event: &CalendarEvent) -> Self {
        Self {
            start: event.start,
            end: event.end,
        }
    }

    /// Whether the window spans a positive amount of time
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// See [`has_conflict`]
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        has_conflict(self, other)
    }
}

/// Whether two windows overlap
///
/// Windows are half-open, so a window ending exactly when the other starts
/// does not conflict. Degenerate windows never conflict with anything.
pub fn has_conflict(a: &TimeWindow, b: &TimeWindow) -> bool {
    if !a.is_valid() || !b.is_valid() {
        return false;
    }
    a.start < b.end && a.end > b.start
}

/// Whether any event accepted by `involved` overlaps `window`
pub fn conflicts_with_any<'a, I, F>(window: &TimeWindow, events: I, mut involved: F) -> bool
where
    I: IntoIterator<Item = &'a CalendarEvent>,
    F: FnMut(&CalendarEvent) -> bool,
{
    events
        .into_iter()
        .any(|event| involved(event) && has_conflict(window, &event.window()))
}
