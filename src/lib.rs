//! Re:Me - Reflective journaling CLI library
//!
//! This library provides the core functionality for the Re:Me journaling
//! application: the emotion-log pipeline, completion provider abstraction,
//! defensive response decoding, and journal persistence.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `journal`: entry store, time-bucketing aggregation, report window,
//!   weekly report generation, and the scheduling gate
//! - `session`: per-session context and the submission pipeline
//! - `providers`: completion provider abstraction and the OpenAI-compatible
//!   implementation
//! - `analysis`: defensive decoding of sentiment and ability responses
//! - `prompts`: prompt builders for every completion call
//! - `storage`: append-only SQLite persistence, namespaced per user
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use reme::journal::{bucket_means, Granularity};
//! use reme::storage::JournalStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let storage = JournalStore::new()?;
//!     let entries = storage.load_entries("alice")?;
//!     for (bucket, mean) in bucket_means(&entries, Granularity::Weekday) {
//!         println!("{}: {:.1}", bucket, mean);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod prompts;
pub mod providers;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, RemeError};
pub use journal::{Entry, EntryStore, SentimentScore};
pub use session::SessionContext;
