//! Re:Me - Reflective journaling CLI
//!
//! Main entry point for the Re:Me application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reme::cli::{Cli, Commands};
use reme::commands;
use reme::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    match cli.command {
        Commands::Chat { user } => {
            tracing::info!("Starting journaling session for {}", user);
            commands::chat::run_chat(config, user).await?;
            Ok(())
        }
        Commands::Report { user } => {
            tracing::info!("Generating weekly report for {}", user);
            commands::report::run_report(config, user).await?;
            Ok(())
        }
        Commands::Trends { user, granularity } => {
            tracing::info!("Rendering sentiment trends for {}", user);
            commands::trends::run_trends(config, user, granularity)?;
            Ok(())
        }
        Commands::History { user, limit } => {
            tracing::info!("Showing history for {}", user);
            commands::history::run_history(config, user, limit)?;
            Ok(())
        }
        Commands::Ability { user } => {
            tracing::info!("Assessing ability scores for {}", user);
            commands::ability::run_ability(config, user).await?;
            Ok(())
        }
        Commands::Memorial { user, question } => {
            tracing::info!("Starting memorial mode for {}", user);
            commands::memorial::run_memorial(config, user, question).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// level to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "reme=debug" } else { "reme=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
