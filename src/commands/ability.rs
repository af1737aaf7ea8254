//! Ability comparison command
//!
//! Scores today's and yesterday's entries on the six ability axes and
//! prints them side by side. A day with no entries, or whose response
//! failed to decode, renders as a dash.

use crate::analysis::ability::assess_date;
use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use crate::providers::OpenAiProvider;
use chrono::{Duration, Local};
use prettytable::{row, Table};

/// Print today's ability scores next to yesterday's for a user
pub async fn run_ability(config: Config, user: String) -> Result<()> {
    let storage = open_storage(&config)?;
    let entries = storage.load_entries(&user)?;

    if entries.is_empty() {
        println!("No journal entries yet for {}.", user);
        return Ok(());
    }

    let provider = OpenAiProvider::new(&config.provider)?;
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    let today_scores = assess_date(&provider, &entries, today).await?;
    let yesterday_scores = assess_date(&provider, &entries, yesterday).await?;

    if today_scores.is_none() && yesterday_scores.is_none() {
        println!("No scorable entries for today or yesterday.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Ability", "Yesterday", "Today"]);
    for axis in crate::analysis::ABILITY_AXES {
        let yesterday_cell = cell_for(yesterday_scores.as_ref(), axis);
        let today_cell = cell_for(today_scores.as_ref(), axis);
        table.add_row(row![axis, yesterday_cell, today_cell]);
    }
    table.printstd();

    Ok(())
}

fn cell_for(scores: Option<&crate::analysis::AbilityScores>, axis: &str) -> String {
    match scores.and_then(|s| s.get(axis)) {
        Some(score) => score.to_string(),
        None => "-".to_string(),
    }
}
