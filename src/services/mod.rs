//! Services
//!
//! The alert pipeline, the Slack notifier, and the relay that wires them
//! together for one invocation.

pub mod alert;
pub mod relay;
pub mod webhook;

pub use relay::{Relay, RelayOutcome};
pub use webhook::{KmsDecryptor, SecretDecryptor, SlackNotifier};
