//! Defensive decoding of free-form completion responses
//!
//! The provider returns plain text for every call; this module turns those
//! texts into typed values. Sentiment decoding never fails (unparseable
//! responses become the unscored sentinel), while ability decoding returns a
//! tagged error carrying the raw text so a failed cycle can be logged and
//! skipped.

pub mod ability;
pub mod sentiment;

pub use ability::{AbilityScores, ABILITY_AXES};
pub use sentiment::parse_score;
