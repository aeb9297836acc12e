//! Error handling for ActivityBoard
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ActivityBoard client
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Failed to load activities: {0}")]
    LoadFailed(String),

    /// Signup rejected by the backend; the message is the best available
    /// user-facing text (backend `detail` when present).
    #[error("{message}")]
    SignupRejected { message: String },

    #[error("Failed to unregister {email} from {activity}: {reason}")]
    UnregisterFailed {
        activity: String,
        email: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for ActivityBoard operations
pub type Result<T> = std::result::Result<T, BoardError>;
