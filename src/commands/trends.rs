//! Sentiment trend tables
//!
//! Renders the bucketed mean sentiment mappings as tables. Bucketing is
//! recomputed from the store on every invocation; an empty mapping renders
//! as a "no data" message rather than an empty table.

use crate::cli::TrendGranularity;
use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use crate::journal::{bucket_means, Entry, Granularity};
use prettytable::{row, Table};

/// Print sentiment trend tables for a user
pub fn run_trends(config: Config, user: String, granularity: TrendGranularity) -> Result<()> {
    let storage = open_storage(&config)?;
    let entries = storage.load_entries(&user)?;

    match granularity {
        TrendGranularity::Weekday => print_table("Weekday", &entries, Granularity::Weekday),
        TrendGranularity::Week => print_table("Week", &entries, Granularity::IsoWeek),
        TrendGranularity::Month => print_table("Month", &entries, Granularity::Month),
        TrendGranularity::All => {
            print_table("Weekday", &entries, Granularity::Weekday);
            print_table("Week", &entries, Granularity::IsoWeek);
            print_table("Month", &entries, Granularity::Month);
        }
    }

    Ok(())
}

/// Render one bucket table, or a "no data" line when the mapping is empty
fn print_table(label: &str, entries: &[Entry], granularity: Granularity) {
    let buckets = bucket_means(entries, granularity);
    if buckets.is_empty() {
        println!("{}: no sentiment data to show yet.", label);
        return;
    }

    let mut table = Table::new();
    table.add_row(row![label, "Mean sentiment"]);
    for (key, mean) in buckets {
        table.add_row(row![key, format!("{:.1}", mean)]);
    }
    table.printstd();
}
