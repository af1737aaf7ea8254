//! Journal entries and the append-only entry store
//!
//! An `Entry` is one journal interaction: the user's text, the assistant's
//! reply, and the sentiment score derived from the text. Entries are
//! immutable once appended; the pipeline only ever appends.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sentiment score attached to an entry
///
/// The documented range is [0, 100]. Anything outside that range — including
/// the unscored sentinel — is excluded from aggregation but kept on the
/// entry for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(pub i32);

impl SentimentScore {
    /// Sentinel marking a sentiment response that could not be parsed
    pub const UNSCORED: SentimentScore = SentimentScore(-1);

    /// Whether this score falls in the documented [0, 100] range
    ///
    /// # Examples
    ///
    /// ```
    /// use reme::journal::SentimentScore;
    ///
    /// assert!(SentimentScore(70).is_valid());
    /// assert!(!SentimentScore::UNSCORED.is_valid());
    /// assert!(!SentimentScore(250).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        (0..=100).contains(&self.0)
    }
}

/// One journal interaction
///
/// Timestamps are timezone-naive, matching the session clock. Monotonicity
/// holds only when entries are appended in real time; the store does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// When the entry was submitted
    pub timestamp: NaiveDateTime,
    /// The user's raw input
    pub user_text: String,
    /// Opaque model output shown as the reply
    pub ai_reply: String,
    /// Derived sentiment score, or the unscored sentinel
    pub sentiment: SentimentScore,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        timestamp: NaiveDateTime,
        user_text: impl Into<String>,
        ai_reply: impl Into<String>,
        sentiment: SentimentScore,
    ) -> Self {
        Self {
            timestamp,
            user_text: user_text.into(),
            ai_reply: ai_reply.into(),
            sentiment,
        }
    }
}

/// Append-only, per-session ordered collection of entries
///
/// Holds data, no logic: aggregation and windowing are pure functions over
/// the slice this store exposes.
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// Entries are never edited or removed afterwards.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sentiment_score_valid_range() {
        assert!(SentimentScore(0).is_valid());
        assert!(SentimentScore(100).is_valid());
        assert!(SentimentScore(50).is_valid());
        assert!(!SentimentScore(101).is_valid());
        assert!(!SentimentScore(-1).is_valid());
        assert!(!SentimentScore::UNSCORED.is_valid());
    }

    #[test]
    fn test_sentiment_score_serde_transparent() {
        let json = serde_json::to_string(&SentimentScore(85)).unwrap();
        assert_eq!(json, "85");
        let back: SentimentScore = serde_json::from_str("-1").unwrap();
        assert_eq!(back, SentimentScore::UNSCORED);
    }

    #[test]
    fn test_store_append_preserves_insertion_order() {
        let mut store = EntryStore::new();
        store.append(Entry::new(ts(2025, 6, 2, 9), "a", "ra", SentimentScore(80)));
        store.append(Entry::new(ts(2025, 6, 2, 15), "b", "rb", SentimentScore(60)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].user_text, "a");
        assert_eq!(store.entries()[1].user_text, "b");
    }

    #[test]
    fn test_empty_store() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = Entry::new(ts(2025, 6, 2, 9), "text", "reply", SentimentScore(42));
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
