//! Journal core for Re:Me
//!
//! This module holds the emotion-log pipeline: the append-only entry store,
//! the time-bucketing aggregator behind the trend charts, the trailing
//! seven-day report window, the weekly report generator, and the scheduling
//! gate that keeps the automatic report to once per session-day.

pub mod aggregate;
pub mod entry;
pub mod gate;
pub mod report;
pub mod window;

pub use aggregate::{bucket_means, Granularity};
pub use entry::{Entry, EntryStore, SentimentScore};
pub use gate::{GateState, SchedulingGate};
pub use report::generate_weekly_report;
pub use window::report_window;
