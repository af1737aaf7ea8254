//! Weekly report generation
//!
//! Formats a non-empty report window into a summarization request and
//! returns the collaborator's response as the report text. The three length
//! caps in the prompt are a request to the model, not a validated
//! postcondition; callers must not assume the returned text respects them.

use crate::error::{Result, RemeError};
use crate::journal::entry::Entry;
use crate::prompts;
use crate::providers::{Message, Provider};

/// Generate the weekly retrospective report for a window of entries
///
/// Concatenates the user text of every entry in the window, oldest first,
/// newline-joined, and asks the provider for a three-part summary.
///
/// # Errors
///
/// Returns `RemeError::EmptyReportWindow` if the window is empty (callers
/// are expected to skip invocation in that case), and propagates provider
/// failures as-is with no retry.
pub async fn generate_weekly_report(
    provider: &dyn Provider,
    window: &[&Entry],
) -> Result<String> {
    if window.is_empty() {
        return Err(RemeError::EmptyReportWindow.into());
    }

    let logs = window
        .iter()
        .map(|e| e.user_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = prompts::weekly_report_prompt(&logs);
    tracing::debug!("Generating weekly report over {} entries", window.len());

    let response = provider.complete(&[Message::user(prompt)]).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::entry::SentimentScore;
    use crate::providers::CompletionResponse;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Test double that records the prompt it was called with
    struct RecordingProvider {
        seen: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
            let mut seen = self.seen.lock().unwrap();
            for m in messages {
                seen.push(m.content.clone());
            }
            Ok(CompletionResponse::new(self.reply.clone()))
        }
    }

    fn entry(day: u32, text: &str) -> Entry {
        let ts = NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Entry::new(ts, text, "reply", SentimentScore(50))
    }

    #[tokio::test]
    async fn test_empty_window_is_rejected_without_provider_call() {
        let provider = RecordingProvider {
            seen: Mutex::new(Vec::new()),
            reply: "unused".to_string(),
        };
        let result = generate_weekly_report(&provider, &[]).await;
        assert!(result.is_err());
        assert!(provider.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_concatenates_user_texts_in_order() {
        let provider = RecordingProvider {
            seen: Mutex::new(Vec::new()),
            reply: "the report".to_string(),
        };
        let a = entry(2, "monday thoughts");
        let b = entry(3, "tuesday thoughts");
        let window = vec![&a, &b];

        let report = generate_weekly_report(&provider, &window).await.unwrap();
        assert_eq!(report, "the report");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("monday thoughts\ntuesday thoughts"));
    }

    #[tokio::test]
    async fn test_report_over_window_is_chronological_for_unsorted_store() {
        let provider = RecordingProvider {
            seen: Mutex::new(Vec::new()),
            reply: "the report".to_string(),
        };
        // Store slice holds Tuesday before Monday.
        let entries = vec![entry(3, "tuesday thoughts"), entry(2, "monday thoughts")];
        // Anchored so June 2 09:00 sits exactly on the lower bound.
        let now = NaiveDate::from_ymd_opt(2025, 6, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let window = crate::journal::report_window(&entries, now);

        generate_weekly_report(&provider, &window).await.unwrap();

        let seen = provider.seen.lock().unwrap();
        assert!(seen[0].contains("monday thoughts\ntuesday thoughts"));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        struct FailingProvider;

        #[async_trait]
        impl Provider for FailingProvider {
            async fn complete(&self, _messages: &[Message]) -> Result<CompletionResponse> {
                Err(RemeError::Provider("rate limited".to_string()).into())
            }
        }

        let a = entry(2, "text");
        let window = vec![&a];
        let result = generate_weekly_report(&FailingProvider, &window).await;
        assert!(result.is_err());
    }
}
