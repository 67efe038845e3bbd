//! Settings Models
//!
//! Relay configuration read from the Lambda environment.

use crate::utils::error::{AppError, AppResult};

/// Slack channel to post into
pub const SLACK_CHANNEL_VAR: &str = "SLACK_CHANNEL";
/// Base64 KMS ciphertext of the webhook URL (without scheme)
pub const ENCRYPTED_WEBHOOK_URL_VAR: &str = "KMS_ENCRYPTED_WEBHOOK_URL";
/// When truthy, payloads are logged instead of posted
pub const PREVIEW_MODE_VAR: &str = "SLACK_PREVIEW_MODE";

/// Relay configuration, loaded once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub channel: String,
    pub encrypted_webhook_url: String,
    pub preview_mode: bool,
}

impl RelayConfig {
    /// Load from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let channel = lookup(SLACK_CHANNEL_VAR)
            .ok_or_else(|| AppError::config_missing(SLACK_CHANNEL_VAR))?;
        let encrypted_webhook_url = lookup(ENCRYPTED_WEBHOOK_URL_VAR)
            .ok_or_else(|| AppError::config_missing(ENCRYPTED_WEBHOOK_URL_VAR))?;
        let preview_mode = lookup(PREVIEW_MODE_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let config = Self {
            channel,
            encrypted_webhook_url,
            preview_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject blank values; an empty variable is treated as missing.
    pub fn validate(&self) -> AppResult<()> {
        if self.channel.trim().is_empty() {
            return Err(AppError::config_missing(SLACK_CHANNEL_VAR));
        }
        if self.encrypted_webhook_url.trim().is_empty() {
            return Err(AppError::config_missing(ENCRYPTED_WEBHOOK_URL_VAR));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
