//! Journal persistence for Re:Me
//!
//! Append-only SQLite storage of journal entries, namespaced per user.
//! Writes are best-effort from the pipeline's point of view: a failed write
//! never aborts the in-memory session, but the outcome is surfaced to the
//! caller as a [`WriteStatus`] instead of being swallowed.

use crate::error::{Result, RemeError};
use crate::journal::{Entry, SentimentScore};
use anyhow::Context;
use chrono::NaiveDateTime;
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::path::PathBuf;

/// Timestamp format used in the entries table
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Outcome of a best-effort journal write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    /// The entry was durably appended
    Persisted,
    /// The write failed; the in-memory store remains authoritative for the
    /// session and the entry is not durably saved
    Failed(String),
}

impl WriteStatus {
    /// Whether the entry reached the database
    pub fn is_persisted(&self) -> bool {
        matches!(self, WriteStatus::Persisted)
    }
}

/// SQLite-backed journal store
///
/// Every query is keyed by a user namespace; the store never reads or
/// aggregates across namespaces. Namespaces are freely-typed display names
/// with no uniqueness enforcement — identity is an external concern.
pub struct JournalStore {
    db_path: PathBuf,
}

impl JournalStore {
    /// Create a new store in the user's data directory
    ///
    /// The database path can be overridden with the `REME_JOURNAL_DB`
    /// environment variable, which makes it easy to point the binary at a
    /// test database without touching the application data dir.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var("REME_JOURNAL_DB") {
            return Self::new_with_path(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "reme-app", "reme")
            .ok_or_else(|| RemeError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| RemeError::Storage(e.to_string()))?;

        let db_path = data_dir.join("journal.db");
        let store = Self { db_path };
        store.init()?;
        Ok(store)
    }

    /// Create a new store at the specified database path
    ///
    /// Primarily useful for tests with a temporary directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use reme::storage::JournalStore;
    ///
    /// let store = JournalStore::new_with_path("/tmp/test_journal.db").unwrap();
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| RemeError::Storage(e.to_string()))?;
        }

        let store = Self { db_path };
        store.init()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS journal_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                user_text TEXT NOT NULL,
                ai_reply TEXT NOT NULL,
                sentiment_score INTEGER NOT NULL
            )",
            [],
        )
        .context("Failed to create tables")
        .map_err(|e| RemeError::Storage(e.to_string()))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_journal_entries_user
             ON journal_entries (user_id, timestamp)",
            [],
        )
        .context("Failed to create index")
        .map_err(|e| RemeError::Storage(e.to_string()))?;

        Ok(())
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open database")
            .map_err(|e| RemeError::Storage(e.to_string()).into())
    }

    /// Append one entry under a user namespace
    ///
    /// Entries are never updated or deleted.
    pub fn append_entry(&self, user_id: &str, entry: &Entry) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO journal_entries (user_id, timestamp, user_text, ai_reply, sentiment_score)
             VALUES (?, ?, ?, ?, ?)",
            params![
                user_id,
                entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                entry.user_text,
                entry.ai_reply,
                entry.sentiment.0,
            ],
        )
        .context("Failed to insert entry")
        .map_err(|e| RemeError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Append one entry, reporting the outcome instead of erroring
    ///
    /// The pipeline keeps running on a failed write; the caller decides how
    /// to surface the status.
    pub fn append_entry_best_effort(&self, user_id: &str, entry: &Entry) -> WriteStatus {
        match self.append_entry(user_id, entry) {
            Ok(()) => WriteStatus::Persisted,
            Err(e) => {
                tracing::warn!("Journal write failed for user {}: {}", user_id, e);
                WriteStatus::Failed(e.to_string())
            }
        }
    }

    /// Load all of a user's entries, oldest first
    ///
    /// Ordered by timestamp, ties broken by insertion order (rowid). Used to
    /// bootstrap a session with prior history.
    pub fn load_entries(&self, user_id: &str) -> Result<Vec<Entry>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare(
                "SELECT timestamp, user_text, ai_reply, sentiment_score
                 FROM journal_entries
                 WHERE user_id = ?
                 ORDER BY timestamp ASC, id ASC",
            )
            .context("Failed to prepare statement")
            .map_err(|e| RemeError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                let timestamp: String = row.get(0)?;
                let user_text: String = row.get(1)?;
                let ai_reply: String = row.get(2)?;
                let score: i32 = row.get(3)?;
                Ok((timestamp, user_text, ai_reply, score))
            })
            .context("Failed to query entries")
            .map_err(|e| RemeError::Storage(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            let (timestamp, user_text, ai_reply, score) =
                row.context("Failed to read row").map_err(|e| RemeError::Storage(e.to_string()))?;
            entries.push(Entry::new(
                parse_timestamp(&timestamp)?,
                user_text,
                ai_reply,
                SentimentScore(score),
            ));
        }

        Ok(entries)
    }

    /// Load a user's most recent entries, returned oldest first
    ///
    /// Selects the newest `limit` rows, then reverses them into
    /// chronological order for persona construction in memorial mode.
    pub fn recent_entries(&self, user_id: &str, limit: usize) -> Result<Vec<Entry>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare(
                "SELECT timestamp, user_text, ai_reply, sentiment_score
                 FROM journal_entries
                 WHERE user_id = ?
                 ORDER BY timestamp DESC, id DESC
                 LIMIT ?",
            )
            .context("Failed to prepare statement")
            .map_err(|e| RemeError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id, limit as i64], |row| {
                let timestamp: String = row.get(0)?;
                let user_text: String = row.get(1)?;
                let ai_reply: String = row.get(2)?;
                let score: i32 = row.get(3)?;
                Ok((timestamp, user_text, ai_reply, score))
            })
            .context("Failed to query entries")
            .map_err(|e| RemeError::Storage(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            let (timestamp, user_text, ai_reply, score) =
                row.context("Failed to read row").map_err(|e| RemeError::Storage(e.to_string()))?;
            entries.push(Entry::new(
                parse_timestamp(&timestamp)?,
                user_text,
                ai_reply,
                SentimentScore(score),
            ));
        }

        entries.reverse();
        Ok(entries)
    }
}

/// Parse a stored timestamp back into a NaiveDateTime
fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| RemeError::Storage(format!("Invalid stored timestamp '{}': {}", text, e)).into())
}
