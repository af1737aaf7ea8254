//! Memorial mode
//!
//! Reconstructs a voice from a journal author's own entries and answers a
//! visitor's question in that voice. Uses the author's most recent entries,
//! oldest first, as the persona source.

use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use crate::prompts;
use crate::providers::{Message, OpenAiProvider, Provider};
use colored::Colorize;

/// Answer a visitor's question in the journal author's voice
pub async fn run_memorial(config: Config, user: String, question: String) -> Result<()> {
    let storage = open_storage(&config)?;
    let entries = storage.recent_entries(&user, config.journal.memorial_history_limit)?;

    if entries.is_empty() {
        println!("No journal entries found for {}.", user);
        return Ok(());
    }

    let persona_texts = entries
        .iter()
        .map(|e| e.user_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let provider = OpenAiProvider::new(&config.provider)?;
    let prompt = prompts::memorial_prompt(&persona_texts, &question);
    let response = provider.complete(&[Message::user(prompt)]).await?;

    println!("{} {}", format!("{}:", user).bold(), response.content);
    Ok(())
}
