//! Scheduling gate for the automatic weekly report
//!
//! A session-scoped two-state machine keeping the automatic report to at
//! most one display per session-day. The gate is not persisted: a new
//! session starts over at `NotShownToday`, so the guarantee is weaker than
//! "once per calendar day" globally.

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Gate states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// The automatic report has not been shown this session-day
    NotShownToday,
    /// The automatic report has already been shown
    ShownToday,
}

/// Once-per-session-day gate for the automatic weekly report
///
/// The manual report path is independent of this gate: it may run at any
/// time the window is non-empty and never changes the gate state.
#[derive(Debug, Clone)]
pub struct SchedulingGate {
    state: GateState,
    report_day: Weekday,
}

impl SchedulingGate {
    /// Create a gate in the initial `NotShownToday` state
    ///
    /// # Arguments
    ///
    /// * `report_day` - the weekday on which the automatic report fires
    pub fn new(report_day: Weekday) -> Self {
        Self {
            state: GateState::NotShownToday,
            report_day,
        }
    }

    /// Current state
    pub fn state(&self) -> GateState {
        self.state
    }

    /// The designated report weekday
    pub fn report_day(&self) -> Weekday {
        self.report_day
    }

    /// Whether the automatic report should fire now
    ///
    /// True only when the reference day-of-week equals the report day, the
    /// window for `now` is non-empty, and the report has not already been
    /// shown. Pure check; callers transition with [`mark_shown`] only after
    /// the report was actually generated and displayed, so a failed
    /// generation does not consume the day.
    ///
    /// [`mark_shown`]: SchedulingGate::mark_shown
    pub fn should_fire(&self, now: NaiveDateTime, window_nonempty: bool) -> bool {
        self.state == GateState::NotShownToday
            && now.weekday() == self.report_day
            && window_nonempty
    }

    /// Record that the automatic report was displayed
    pub fn mark_shown(&mut self) {
        self.state = GateState::ShownToday;
    }

    /// Check the firing condition and transition if it holds
    ///
    /// Convenience for callers that display synchronously: a second call on
    /// the same reference day returns false.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use reme::journal::SchedulingGate;
    ///
    /// // 2025-06-08 is a Sunday
    /// let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let mut gate = SchedulingGate::new(Weekday::Sun);
    /// assert!(gate.try_fire(sunday, true));
    /// assert!(!gate.try_fire(sunday, true));
    /// ```
    pub fn try_fire(&mut self, now: NaiveDateTime, window_nonempty: bool) -> bool {
        if self.should_fire(now, window_nonempty) {
            self.mark_shown();
            true
        } else {
            false
        }
    }
}
