//! Journal history display
//!
//! Prints a user's most recent entries in chronological order, with the
//! sentiment score where one was derived.

use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Print the most recent journal entries for a user
pub fn run_history(config: Config, user: String, limit: usize) -> Result<()> {
    let storage = open_storage(&config)?;
    let entries = storage.recent_entries(&user, limit)?;

    if entries.is_empty() {
        println!("No journal entries yet for {}.", user);
        return Ok(());
    }

    for entry in entries {
        let score = if entry.sentiment.is_valid() {
            format!("score {}", entry.sentiment.0)
        } else {
            "unscored".to_string()
        };
        println!(
            "{} ({})",
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            score.dimmed()
        );
        println!("{} {}", "you:".bold(), entry.user_text);
        println!("{} {}", "Re:Me:".cyan().bold(), entry.ai_reply);
        println!();
    }

    Ok(())
}
