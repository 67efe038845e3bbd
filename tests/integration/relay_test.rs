//! Relay Integration Tests
//!
//! Runs whole invocations through `Relay` with an in-process decryptor.
//! Delivery uses preview mode, or a refused loopback port to exercise the
//! transport failure path without touching the network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use cloudwatch_slack_relay::services::webhook::{SendOutcome, WebhookError};
use cloudwatch_slack_relay::{AppError, Relay, RelayConfig, RelayOutcome, SecretDecryptor};

// ============================================================================
// Helpers
// ============================================================================

/// Base64 of "127.0.0.1:1/hook"
const ENCRYPTED_LOOPBACK_URL: &str = "MTI3LjAuMC4xOjEvaG9vaw==";

/// Passes ciphertext through and remembers every call.
#[derive(Default)]
struct RecordingDecryptor {
    calls: Mutex<Vec<Vec<u8>>>,
}

#[async_trait]
impl SecretDecryptor for RecordingDecryptor {
    async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, WebhookError> {
        self.calls.lock().unwrap().push(ciphertext.clone());
        Ok(ciphertext)
    }
}

struct FailingDecryptor;

#[async_trait]
impl SecretDecryptor for FailingDecryptor {
    async fn decrypt(&self, _ciphertext: Vec<u8>) -> Result<Vec<u8>, WebhookError> {
        Err(WebhookError::DecryptionError("AccessDeniedException".to_string()))
    }
}

fn config(preview_mode: bool) -> RelayConfig {
    RelayConfig {
        channel: "#ops-alerts".to_string(),
        encrypted_webhook_url: ENCRYPTED_LOOPBACK_URL.to_string(),
        preview_mode,
    }
}

fn alarm_event() -> Value {
    let message = json!({
        "AlarmName": "cpu-high",
        "NewStateValue": "ALARM",
        "NewStateReason": "Threshold Crossed"
    });
    json!({
        "Records": [{
            "EventSource": "aws:sns",
            "EventVersion": "1.0",
            "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:my-topic:sub",
            "Sns": {
                "Type": "Notification",
                "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                "TopicArn": "arn:aws:sns:us-east-1:123456789012:my-topic",
                "Subject": "ALARM: cpu-high",
                "Message": message.to_string(),
                "Timestamp": "2024-03-01T04:05:06.789Z"
            }
        }]
    })
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_preview_delivery() {
    let decryptor = Arc::new(RecordingDecryptor::default());
    let relay = Relay::new(decryptor.clone());

    let outcome = relay
        .handle_with_config(&alarm_event(), || Ok(config(true)))
        .await;

    assert_eq!(outcome, RelayOutcome::Delivered(SendOutcome::Previewed));
    let calls = decryptor.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], b"127.0.0.1:1/hook".to_vec());
}

#[tokio::test]
async fn test_transport_failure_is_contained() {
    let relay = Relay::new(Arc::new(RecordingDecryptor::default()));

    let outcome = relay
        .handle_with_config(&alarm_event(), || Ok(config(false)))
        .await;

    assert!(matches!(
        outcome,
        RelayOutcome::Delivered(SendOutcome::Failed(_))
    ));
}

#[tokio::test]
async fn test_missing_config_skips_send() {
    let decryptor = Arc::new(RecordingDecryptor::default());
    let relay = Relay::new(decryptor.clone());

    let outcome = relay
        .handle_with_config(&alarm_event(), || {
            Err(AppError::config_missing("SLACK_CHANNEL"))
        })
        .await;

    assert!(matches!(outcome, RelayOutcome::ConfigMissing(ref m) if m.contains("SLACK_CHANNEL")));
    assert!(decryptor.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_decryption_failure_is_contained() {
    let relay = Relay::new(Arc::new(FailingDecryptor));

    let outcome = relay
        .handle_with_config(&alarm_event(), || Ok(config(true)))
        .await;

    assert!(matches!(outcome, RelayOutcome::DecryptionFailed(ref m) if m.contains("AccessDenied")));
}

#[tokio::test]
async fn test_no_message_never_loads_config() {
    let relay = Relay::new(Arc::new(RecordingDecryptor::default()));
    let event = json!({
        "Records": [{
            "EventSource": "aws:sns",
            "EventVersion": "1.0",
            "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:my-topic:sub"
        }]
    });

    let outcome = relay
        .handle_with_config(&event, || panic!("config must not be read"))
        .await;

    assert_eq!(outcome, RelayOutcome::NoMessage);
}

#[tokio::test]
async fn test_malformed_event_completes() {
    let relay = Relay::new(Arc::new(RecordingDecryptor::default()));

    let mut event = alarm_event();
    event["Records"][0]["Sns"]["TopicArn"] = json!("not-an-arn");

    let outcome = relay.handle_with_config(&event, || Ok(config(true))).await;
    assert_eq!(outcome, RelayOutcome::NoMessage);

    let outcome = relay.handle_with_config(&json!({"foo": 1}), || Ok(config(true))).await;
    assert_eq!(outcome, RelayOutcome::NoMessage);
}
