//! Command-line interface definition for Re:Me
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the journaling session, reports, trends,
//! history, and memorial mode.

use clap::{Parser, Subcommand, ValueEnum};

/// Re:Me - Reflective journaling CLI
///
/// Talk through your day, track the sentiment of your reflections,
/// and get a weekly retrospective.
#[derive(Parser, Debug, Clone)]
#[command(name = "reme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the journal database path
    #[arg(long, env = "REME_JOURNAL_DB")]
    pub storage_path: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Trend granularities selectable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendGranularity {
    /// Mean sentiment per day of the week
    Weekday,
    /// Mean sentiment per ISO week
    Week,
    /// Mean sentiment per month
    Month,
    /// All three tables
    All,
}

/// Available commands for Re:Me
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive journaling session
    Chat {
        /// Your name or nickname (the journal namespace)
        #[arg(short, long)]
        user: String,
    },

    /// Generate the weekly retrospective report now
    Report {
        /// Your name or nickname (the journal namespace)
        #[arg(short, long)]
        user: String,
    },

    /// Show sentiment trend tables
    Trends {
        /// Your name or nickname (the journal namespace)
        #[arg(short, long)]
        user: String,

        /// Which aggregation to show
        #[arg(short, long, value_enum, default_value_t = TrendGranularity::All)]
        granularity: TrendGranularity,
    },

    /// Show past journal entries
    History {
        /// Your name or nickname (the journal namespace)
        #[arg(short, long)]
        user: String,

        /// Maximum number of entries to show (most recent)
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show today's six-axis ability scores next to yesterday's
    Ability {
        /// Your name or nickname (the journal namespace)
        #[arg(short, long)]
        user: String,
    },

    /// Ask a question of a persona reconstructed from a journal
    Memorial {
        /// Name of the journal author (the namespace to reconstruct)
        #[arg(short, long)]
        user: String,

        /// The visitor's question
        question: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_chat_command() {
        let cli = Cli::try_parse_from(["reme", "chat", "--user", "alice"]).unwrap();
        match cli.command {
            Commands::Chat { user } => assert_eq!(user, "alice"),
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn test_cli_parses_trends_granularity() {
        let cli =
            Cli::try_parse_from(["reme", "trends", "--user", "alice", "--granularity", "weekday"])
                .unwrap();
        match cli.command {
            Commands::Trends { granularity, .. } => {
                assert_eq!(granularity, TrendGranularity::Weekday)
            }
            _ => panic!("expected trends command"),
        }
    }

    #[test]
    fn test_cli_trends_defaults_to_all() {
        let cli = Cli::try_parse_from(["reme", "trends", "--user", "alice"]).unwrap();
        match cli.command {
            Commands::Trends { granularity, .. } => assert_eq!(granularity, TrendGranularity::All),
            _ => panic!("expected trends command"),
        }
    }

    #[test]
    fn test_cli_parses_memorial_question() {
        let cli = Cli::try_parse_from(["reme", "memorial", "--user", "kenji", "What mattered to you?"])
            .unwrap();
        match cli.command {
            Commands::Memorial { user, question } => {
                assert_eq!(user, "kenji");
                assert_eq!(question, "What mattered to you?");
            }
            _ => panic!("expected memorial command"),
        }
    }

    #[test]
    fn test_cli_history_default_limit() {
        let cli = Cli::try_parse_from(["reme", "history", "--user", "alice"]).unwrap();
        match cli.command {
            Commands::History { limit, .. } => assert_eq!(limit, 20),
            _ => panic!("expected history command"),
        }
    }

    #[test]
    fn test_cli_parses_ability_command() {
        let cli = Cli::try_parse_from(["reme", "ability", "--user", "alice"]).unwrap();
        match cli.command {
            Commands::Ability { user } => assert_eq!(user, "alice"),
            _ => panic!("expected ability command"),
        }
    }

    #[test]
    fn test_cli_requires_user() {
        assert!(Cli::try_parse_from(["reme", "chat"]).is_err());
    }

    #[test]
    fn test_cli_global_storage_path() {
        let cli = Cli::try_parse_from([
            "reme",
            "--storage-path",
            "/tmp/custom.db",
            "chat",
            "--user",
            "alice",
        ])
        .unwrap();
        assert_eq!(cli.storage_path.as_deref(), Some("/tmp/custom.db"));
    }
}
