//! CloudWatch Slack Relay - Library
//!
//! Relays AWS monitoring events delivered through SNS into Slack.
//! It includes:
//! - Envelope parsing and origin classification
//! - Per-origin alert formatters
//! - A Slack incoming-webhook notifier with a KMS-encrypted URL
//! - The relay that runs one Lambda invocation end to end

pub mod models;
pub mod services;
pub mod utils;

pub use models::{FormatterId, MessageRecord, OriginDescriptor, RelayConfig, SnsEnvelope, TriggerRecord};
pub use services::{KmsDecryptor, Relay, RelayOutcome, SecretDecryptor, SlackNotifier};
pub use utils::error::{AppError, AppResult};
