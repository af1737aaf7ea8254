//! Report window selection
//!
//! Selects the trailing seven-calendar-day slice of the entry store used by
//! the weekly report. The window is anchored to the reference instant, not
//! to a calendar week boundary, so a report generated on any day always
//! covers that day and the six days before it.

use crate::journal::entry::Entry;
use chrono::{Duration, NaiveDateTime};

/// Select all entries within the trailing 7-day window ending at `now`
///
/// The lower bound is `now - 6 days`, inclusive; entries stamped after `now`
/// are outside the snapshot and excluded. The window is returned oldest
/// first regardless of input order, with same-timestamp entries keeping
/// their slice order, so report text concatenation is chronological for any
/// caller. Deterministic given `now` and the store; no side effects.
///
/// An empty result means "nothing to summarize" and is not an error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use reme::journal::{report_window, Entry, SentimentScore};
///
/// let now = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let entries = vec![Entry::new(now, "today", "reply", SentimentScore(80))];
/// assert_eq!(report_window(&entries, now).len(), 1);
/// ```
pub fn report_window(entries: &[Entry], now: NaiveDateTime) -> Vec<&Entry> {
    let lower = now - Duration::days(6);
    let mut window: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.timestamp >= lower && e.timestamp <= now)
        .collect();
    window.sort_by_key(|e| e.timestamp);
    window
}
