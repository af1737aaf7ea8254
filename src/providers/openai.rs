//! OpenAI-compatible provider implementation for Re:Me
//!
//! This module implements the Provider trait against a hosted
//! `/chat/completions` endpoint. The API base is configurable so tests can
//! point the provider at a mock server.

use crate::config::ProviderConfig;
use crate::error::{Result, RemeError};
use crate::providers::{CompletionResponse, Message, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completion provider
///
/// Connects to a hosted chat-completion API. Every call carries an explicit
/// request timeout; a timeout surfaces as a provider error to the caller,
/// which abandons that pipeline step without retrying.
///
/// # Examples
///
/// ```no_run
/// use reme::config::ProviderConfig;
/// use reme::providers::{OpenAiProvider, Provider, Message};
///
/// # async fn example() -> reme::error::Result<()> {
/// let config = ProviderConfig::default();
/// let provider = OpenAiProvider::new(&config)?;
/// let messages = vec![Message::user("Hello!")];
/// let completion = provider.complete(&messages).await?;
/// println!("{}", completion.content);
/// # Ok(())
/// # }
/// ```
pub struct OpenAiProvider {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

/// Request structure for the chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

/// Response structure from the chat completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// One completion choice in the response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

/// Message payload of a completion choice
#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiProvider {
    /// Create a new provider instance
    ///
    /// Resolves the API key from the environment variable named in the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key environment variable is unset or the
    /// HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| RemeError::MissingCredentials(config.api_key_env.clone()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("reme/0.1.0")
            .build()
            .map_err(|e| RemeError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized completion provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        let url = format!("{}/chat/completions", self.api_base);
        tracing::debug!("Requesting completion: url={}, messages={}", url, messages.len());

        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemeError::Provider(format!("Completion request timed out: {}", e))
                } else {
                    RemeError::Provider(format!("Completion request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion API returned {}: {}", status, error_text);
            return Err(RemeError::Provider(format!(
                "Completion API returned {}: {}",
                status, error_text
            ))
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            RemeError::Provider(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            RemeError::Provider("Completion response contained no choices".to_string())
        })?;

        Ok(CompletionResponse::new(choice.message.content))
    }
}
