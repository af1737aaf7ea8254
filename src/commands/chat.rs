//! Interactive journaling session
//!
//! One readline loop: each submission runs the full pipeline (reply,
//! sentiment, append, best-effort persist), then the automatic report gate
//! is checked. Provider failures print inline and the loop continues.

use crate::commands::open_storage;
use crate::config::Config;
use crate::error::Result;
use crate::providers::OpenAiProvider;
use crate::session::SessionContext;
use chrono::Local;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive journaling session for a user
pub async fn run_chat(config: Config, user: String) -> Result<()> {
    let storage = open_storage(&config)?;
    let provider = OpenAiProvider::new(&config.provider)?;
    let mut session = SessionContext::new(&user, config.journal.report_weekday()?);

    match session.bootstrap(&storage) {
        Ok(count) if count > 0 => {
            println!("Restored {} past entries.", count);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!("Could not restore history: {}", e);
            println!("{}", format!("Could not restore history: {}", e).yellow());
        }
    }

    println!(
        "{}",
        "Tell me what you thought about or felt today. /report for a weekly \
         summary, /quit to leave."
            .dimmed()
    );

    show_auto_report(&mut session, &provider).await;

    let mut editor = DefaultEditor::new()
        .map_err(|e| crate::error::RemeError::Config(format!("readline init failed: {}", e)))?;

    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            "/quit" | "/exit" => break,
            "/report" => {
                let now = Local::now().naive_local();
                match session.manual_report(&provider, now).await {
                    Ok(Some(report)) => {
                        println!("\n{}\n{}\n", "Weekly retrospective".bold(), report.green());
                    }
                    Ok(None) => {
                        println!("No entries in the past week yet. Start by reflecting today.");
                    }
                    Err(e) => {
                        println!("{}", format!("Report generation failed: {}", e).red());
                    }
                }
                continue;
            }
            _ => {}
        }

        let now = Local::now().naive_local();
        match session.submit(&provider, &storage, input, now).await {
            Ok(submission) => {
                println!("{} {}", "Re:Me:".cyan().bold(), submission.reply);
                if !submission.write_status.is_persisted() {
                    println!(
                        "{}",
                        "Note: this entry could not be saved and will be lost when the \
                         session ends."
                            .yellow()
                    );
                }
            }
            Err(e) => {
                println!("{}", format!("That didn't go through: {}", e).red());
                continue;
            }
        }

        show_auto_report(&mut session, &provider).await;
    }

    println!("Take care.");
    Ok(())
}

/// Check the scheduling gate and display the automatic report if it fires
async fn show_auto_report(session: &mut SessionContext, provider: &OpenAiProvider) {
    let now = Local::now().naive_local();
    match session.check_auto_report(provider, now).await {
        Ok(Some(report)) => {
            println!(
                "\n{}\n{}\n",
                "This week's retrospective".bold(),
                report.green()
            );
        }
        Ok(None) => {}
        Err(e) => {
            println!("{}", format!("Weekly report failed: {}", e).red());
        }
    }
}
