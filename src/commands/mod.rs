//! Command handlers for the Re:Me CLI
//!
//! Each submodule implements one subcommand. Handlers own the wiring:
//! opening storage, constructing the provider, and driving the session or
//! journal functions, leaving the pipeline itself in the library modules.

pub mod ability;
pub mod chat;
pub mod history;
pub mod memorial;
pub mod report;
pub mod trends;

use crate::config::Config;
use crate::error::Result;
use crate::storage::JournalStore;

/// Open the journal store configured for this run
pub(crate) fn open_storage(config: &Config) -> Result<JournalStore> {
    match &config.storage.db_path {
        Some(path) => JournalStore::new_with_path(path),
        None => JournalStore::new(),
    }
}
