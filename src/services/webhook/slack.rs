//! Slack Incoming Webhook Notifier
//!
//! Posts `{"channel", "text"}` to a Slack incoming webhook. Delivery failures
//! are logged and reported as [`SendOutcome::Failed`], never returned as
//! errors, so the invocation always completes.

use tracing::{debug, error, info};

use super::decrypt::{decrypt_webhook_url, SecretDecryptor};
use super::types::{SendOutcome, SlackMessage, WebhookError};

/// Slack incoming webhook client bound to one channel.
pub struct SlackNotifier {
    client: reqwest::Client,
    channel: String,
    hook_url: String,
}

impl SlackNotifier {
    pub fn new(hook_url: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            channel: channel.into(),
            hook_url: hook_url.into(),
        }
    }

    /// Decrypt the stored webhook token and bind the notifier to `channel`.
    pub async fn from_encrypted(
        decryptor: &dyn SecretDecryptor,
        encrypted_hook_url: &str,
        channel: impl Into<String>,
    ) -> Result<Self, WebhookError> {
        let hook_url = decrypt_webhook_url(decryptor, encrypted_hook_url).await?;
        Ok(Self::new(hook_url, channel))
    }

    /// Build the webhook body for `text`.
    pub fn build_message(&self, text: &str) -> SlackMessage {
        SlackMessage {
            channel: self.channel.clone(),
            text: text.to_string(),
        }
    }

    /// Send `text`, or only log it when `preview_mode` is set.
    pub async fn send_message(&self, text: &str, preview_mode: bool) -> SendOutcome {
        let message = self.build_message(text);

        if preview_mode {
            match Self::preview(&message) {
                Ok(json) => info!("{}", json),
                Err(e) => error!("{}", e),
            }
            return SendOutcome::Previewed;
        }

        match self.post(&message).await {
            Ok(()) => {
                info!("Message posted to {}", message.channel);
                SendOutcome::Posted
            }
            Err(e) => {
                error!("{}", e);
                SendOutcome::Failed(e.to_string())
            }
        }
    }

    fn preview(message: &SlackMessage) -> Result<String, WebhookError> {
        Ok(serde_json::to_string(message)?)
    }

    async fn post(&self, message: &SlackMessage) -> Result<(), WebhookError> {
        let response = self.client.post(&self.hook_url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Drain the body so the connection is released cleanly
        if let Err(e) = response.bytes().await {
            debug!("Failed to read Slack response body: {}", e);
        }
        Ok(())
    }
}

impl std::fmt::Debug for SlackNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // hook_url is a credential
        f.debug_struct("SlackNotifier")
            .field("channel", &self.channel)
            .finish()
    }
}
