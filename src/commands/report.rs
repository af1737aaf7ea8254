//! Manual weekly report command
//!
//! Generates the retrospective over the trailing seven days on demand,
//! independent of the scheduling gate.

use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use crate::journal::{generate_weekly_report, report_window};
use crate::providers::OpenAiProvider;
use chrono::Local;
use colored::Colorize;

/// Generate and print the weekly retrospective for a user
pub async fn run_report(config: Config, user: String) -> Result<()> {
    let storage = open_storage(&config)?;
    let entries = storage.load_entries(&user)?;

    let now = Local::now().naive_local();
    let window = report_window(&entries, now);
    if window.is_empty() {
        println!("No entries in the past week. Nothing to summarize yet.");
        return Ok(());
    }

    let provider = OpenAiProvider::new(&config.provider)?;
    let report = generate_weekly_report(&provider, &window).await?;

    println!("{}", "Weekly retrospective".bold());
    println!("{}", report.green());
    Ok(())
}
