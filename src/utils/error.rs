//! Error Handling
//!
//! Unified error types for the relay pipeline.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Relay-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The SNS envelope or trigger record lacks a required field or is shaped wrongly
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The embedded `Message` body could not be decoded into message records
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A formatter needed a key the record does not carry
    #[error("Missing field: {0}")]
    MissingField(String),

    /// No formatter is registered for the origin's formatter id
    #[error("Formatter not found: {0}")]
    FormatterNotFound(String),

    /// A `source` value had no entry in the origin registry
    #[error("Classification miss: {0}")]
    ClassificationMiss(String),

    /// A required environment variable is absent or blank
    #[error("Configuration missing: {0}")]
    ConfigMissing(String),
}

/// Result type alias for relay errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a malformed envelope error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedEnvelope(msg.into())
    }

    /// Create an invalid payload error
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a config error
    pub fn config_missing(var: impl Into<String>) -> Self {
        Self::ConfigMissing(var.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}
