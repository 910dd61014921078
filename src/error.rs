//! Error types for mrsend

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while loading configuration or creating merge requests
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is missing or malformed
    #[error("invalid {var}: {message}")]
    Config {
        /// Name of the offending variable
        var: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// The dotenv file could not be read or parsed
    #[error("failed to load env file: {0}")]
    EnvFile(String),

    /// Request payload could not be serialized
    #[error("failed to serialize request: {0}")]
    Json(#[from] serde_json::Error),

    /// Request construction or transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitLab answered with something other than `201 Created`
    #[error("unexpected response status {0}")]
    UnexpectedStatus(StatusCode),

    /// Anything else (e.g. terminal interaction)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using mrsend's error
pub type Result<T> = std::result::Result<T, Error>;
