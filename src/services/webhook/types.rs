//! Webhook Core Types
//!
//! Payload, outcome and error types for the Slack notifier.

use serde::Serialize;
use std::fmt;

/// JSON body posted to the Slack incoming webhook
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlackMessage {
    pub channel: String,
    pub text: String,
}

/// What happened to a message handed to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Slack accepted the POST
    Posted,
    /// Preview mode: the payload was logged only
    Previewed,
    /// The POST failed; the error has already been logged
    Failed(String),
}

impl fmt::Display for SendOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posted => write!(f, "posted"),
            Self::Previewed => write!(f, "previewed"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Webhook-specific errors
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// Slack answered with a non-success status
    #[error("Request failed: {status} {reason}")]
    HttpError { status: u16, reason: String },

    /// The request never got a response
    #[error("Server connection failed: {0}")]
    ConnectionError(String),

    /// The encrypted webhook URL could not be turned into a URL
    #[error("Decryption error: {0}")]
    DecryptionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            },
            None => Self::ConnectionError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
