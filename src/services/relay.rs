//! Relay Entry Point
//!
//! Threads one Lambda invocation through parse → classify → dispatch →
//! notify. Every failure is logged and mapped to a [`RelayOutcome`]; the
//! handler itself never fails.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use super::alert::{parse_trigger_event, trigger_message};
use super::webhook::{SecretDecryptor, SendOutcome, SlackNotifier};
use crate::models::RelayConfig;
use crate::utils::error::AppResult;

/// How an invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The event produced no alert text
    NoMessage,
    /// Alert text was produced but the environment is incomplete
    ConfigMissing(String),
    /// The webhook URL could not be recovered
    DecryptionFailed(String),
    /// The notifier ran; see the send outcome
    Delivered(SendOutcome),
}

/// Per-process relay state shared across invocations.
pub struct Relay {
    decryptor: Arc<dyn SecretDecryptor>,
}

impl Relay {
    pub fn new(decryptor: Arc<dyn SecretDecryptor>) -> Self {
        Self { decryptor }
    }

    /// Handle one trigger event using configuration from the environment.
    pub async fn handle(&self, event: &Value) -> RelayOutcome {
        self.handle_with_config(event, RelayConfig::from_env).await
    }

    /// Handle one trigger event. `load_config` is only called when there is
    /// something to send.
    pub async fn handle_with_config(
        &self,
        event: &Value,
        load_config: impl FnOnce() -> AppResult<RelayConfig>,
    ) -> RelayOutcome {
        info!("Event: {}", event);

        let message = match parse_trigger_event(event) {
            Ok(trigger) => trigger_message(&trigger),
            Err(e) => {
                error!("Failed to parse trigger event: {}", e);
                None
            }
        };

        let Some(text) = message else {
            info!("No Message Sent!");
            return RelayOutcome::NoMessage;
        };

        let config = match load_config() {
            Ok(config) => config,
            Err(e) => {
                error!("Unable to load ENV variables: {}", e);
                return RelayOutcome::ConfigMissing(e.to_string());
            }
        };

        let notifier = match SlackNotifier::from_encrypted(
            self.decryptor.as_ref(),
            &config.encrypted_webhook_url,
            config.channel.as_str(),
        )
        .await
        {
            Ok(notifier) => notifier,
            Err(e) => {
                error!("Unable to recover webhook URL: {}", e);
                return RelayOutcome::DecryptionFailed(e.to_string());
            }
        };

        RelayOutcome::Delivered(notifier.send_message(&text, config.preview_mode).await)
    }
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay").finish_non_exhaustive()
    }
}
