//! Webhook Notification
//!
//! Delivers rendered alerts to a Slack incoming webhook whose URL is kept
//! encrypted with KMS in the function environment.

pub mod decrypt;
pub mod slack;
pub mod types;

pub use decrypt::{decrypt_webhook_url, KmsDecryptor, SecretDecryptor};
pub use slack::SlackNotifier;
pub use types::*;
