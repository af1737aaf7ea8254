//! Error types for Re:Me
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Re:Me operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, provider interactions, response decoding,
/// and journal persistence.
#[derive(Error, Debug)]
pub enum RemeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, authentication, timeouts)
    #[error("Provider error: {0}")]
    Provider(String),

    /// The completion response could not be decoded into the expected shape.
    ///
    /// Carries the raw response text so callers can log it for diagnostics
    /// instead of silently discarding the cycle.
    #[error("Response decode error: {reason} (raw: {raw})")]
    ResponseDecode {
        /// Why decoding failed
        reason: String,
        /// The raw response text that failed to decode
        raw: String,
    },

    /// Report generation was requested for an empty window
    #[error("Report window is empty: nothing to summarize")]
    EmptyReportWindow,

    /// Missing credentials for the provider
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Journal storage errors (database operations)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for Re:Me operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
