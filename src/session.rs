//! Per-session context and the submission pipeline
//!
//! All session state lives in an explicit [`SessionContext`] passed into
//! each pipeline call: the user namespace, the running chat history seeded
//! with the reflection system prompt, the append-only entry store, and the
//! scheduling gate. Nothing is ambient or process-global.

use crate::error::Result;
use crate::journal::{
    generate_weekly_report, report_window, Entry, EntryStore, SchedulingGate, SentimentScore,
};
use crate::prompts;
use crate::providers::{Message, Provider};
use crate::storage::{JournalStore, WriteStatus};
use chrono::{NaiveDateTime, Weekday};

/// Outcome of one journal submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// The assistant's conversational reply
    pub reply: String,
    /// The sentiment score derived from the user's text
    pub sentiment: SentimentScore,
    /// Whether the entry reached durable storage
    pub write_status: WriteStatus,
}

/// Per-session state for one user
///
/// Created fresh for each session: the chat history starts from the system
/// prompt, the gate starts at `NotShownToday`, and prior entries are
/// restored from storage via [`bootstrap`].
///
/// [`bootstrap`]: SessionContext::bootstrap
pub struct SessionContext {
    user_id: String,
    messages: Vec<Message>,
    store: EntryStore,
    gate: SchedulingGate,
}

impl SessionContext {
    /// Create a fresh session for a user
    pub fn new(user_id: impl Into<String>, report_day: Weekday) -> Self {
        Self {
            user_id: user_id.into(),
            messages: vec![Message::system(prompts::REFLECTION_SYSTEM_PROMPT)],
            store: EntryStore::new(),
            gate: SchedulingGate::new(report_day),
        }
    }

    /// The user namespace this session belongs to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The session's entry store
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Chat history including the system prompt, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Restore the user's prior entries from storage
    ///
    /// A load failure is reported to the caller; the session stays usable
    /// with an empty store either way.
    pub fn bootstrap(&mut self, storage: &JournalStore) -> Result<usize> {
        let entries = storage.load_entries(&self.user_id)?;
        let count = entries.len();
        for entry in entries {
            self.store.append(entry);
        }
        tracing::info!("Restored {} entries for user {}", count, self.user_id);
        Ok(count)
    }

    /// Run one journal submission through the pipeline
    ///
    /// Synchronous from the session's point of view: reply completion,
    /// sentiment completion, in-memory append, then a best-effort persist
    /// whose outcome is part of the returned [`Submission`].
    ///
    /// # Errors
    ///
    /// A failed reply completion leaves the chat history unchanged. A failed
    /// sentiment completion propagates after the reply was recorded; no
    /// entry is appended in either case.
    pub async fn submit(
        &mut self,
        provider: &dyn Provider,
        storage: &JournalStore,
        user_text: &str,
        now: NaiveDateTime,
    ) -> Result<Submission> {
        self.messages.push(Message::user(user_text));

        let reply = match provider.complete(&self.messages).await {
            Ok(response) => response.content,
            Err(e) => {
                self.messages.pop();
                return Err(e);
            }
        };
        self.messages.push(Message::assistant(reply.clone()));

        let sentiment_response = provider
            .complete(&[Message::user(prompts::sentiment_prompt(user_text))])
            .await?;
        let sentiment = crate::analysis::parse_score(&sentiment_response.content);

        let entry = Entry::new(now, user_text, reply.clone(), sentiment);
        self.store.append(entry.clone());
        let write_status = storage.append_entry_best_effort(&self.user_id, &entry);

        tracing::debug!(
            "Recorded entry for user {}: score={}, persisted={}",
            self.user_id,
            sentiment.0,
            write_status.is_persisted()
        );

        Ok(Submission {
            reply,
            sentiment,
            write_status,
        })
    }

    /// Run the automatic weekly report check
    ///
    /// Fires at most once per session-day, and only on the configured report
    /// day with a non-empty trailing window. The gate transitions only after
    /// the report was generated, so a provider failure leaves the day open.
    pub async fn check_auto_report(
        &mut self,
        provider: &dyn Provider,
        now: NaiveDateTime,
    ) -> Result<Option<String>> {
        let window = report_window(self.store.entries(), now);
        if !self.gate.should_fire(now, !window.is_empty()) {
            return Ok(None);
        }
        let report = generate_weekly_report(provider, &window).await?;
        self.gate.mark_shown();
        Ok(Some(report))
    }

    /// Generate the weekly report on a manual trigger
    ///
    /// Independent of the scheduling gate: runs any day, never mutates gate
    /// state. Returns `None` when the window is empty — nothing to
    /// summarize, not an error.
    pub async fn manual_report(
        &self,
        provider: &dyn Provider,
        now: NaiveDateTime,
    ) -> Result<Option<String>> {
        let window = report_window(self.store.entries(), now);
        if window.is_empty() {
            return Ok(None);
        }
        let report = generate_weekly_report(provider, &window).await?;
        Ok(Some(report))
    }
}
