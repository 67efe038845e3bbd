//! Envelope Parser
//!
//! Decodes the Lambda trigger record, its SNS envelope, and the JSON message
//! body embedded in the envelope into classified message records.

use serde_json::{Map, Value};
use tracing::warn;

use super::classifier::classify_records;
use crate::models::{MessageRecord, SignatureMetadata, SnsEnvelope, TriggerRecord};
use crate::utils::error::{AppError, AppResult};
use crate::utils::time::utc_to_local_display;

/// Index of the topic name within a `:`-split topic ARN.
const TOPIC_NAME_SEGMENT: usize = 5;

/// Parse the first element of a Lambda event's `Records` array.
pub fn parse_trigger_event(event: &Value) -> AppResult<TriggerRecord> {
    let first = event
        .get("Records")
        .and_then(Value::as_array)
        .and_then(|records| records.first())
        .ok_or_else(|| AppError::malformed("Event has no Records"))?;

    parse_trigger_record(first)
}

/// Parse one trigger record. A missing `Sns` key is tolerated.
pub fn parse_trigger_record(record: &Value) -> AppResult<TriggerRecord> {
    let obj = as_object(record, "Trigger record")?;

    let mut trigger = TriggerRecord {
        event_source: required_str(obj, "EventSource")?,
        event_version: required_str(obj, "EventVersion")?,
        event_subscription_arn: required_str(obj, "EventSubscriptionArn")?,
        sns: None,
    };

    match obj.get("Sns") {
        Some(notification) => trigger.sns = Some(parse_envelope(notification)?),
        None => warn!("This CloudWatch Event is NOT from SNS {}", trigger),
    }

    Ok(trigger)
}

/// Parse an SNS notification and classify the records in its body.
pub fn parse_envelope(notification: &Value) -> AppResult<SnsEnvelope> {
    let obj = as_object(notification, "Sns")?;

    let message_id = required_str(obj, "MessageId")?;
    let topic_arn = required_str(obj, "TopicArn")?;
    let topic_name = topic_name(&topic_arn)?;
    let subject = nullable_str(obj, "Subject")?;
    let timestamp = required_str(obj, "Timestamp")?;
    let local_timestamp = utc_to_local_display(&timestamp)?;
    let body = required_str(obj, "Message")?;

    let mut records = decode_message(&body, &message_id, &topic_name)?;
    classify_records(&mut records);

    Ok(SnsEnvelope {
        message_type: optional_str(obj, "Type"),
        message_id,
        topic_arn,
        topic_name,
        subject,
        timestamp,
        local_timestamp,
        signature: SignatureMetadata {
            signature_version: optional_str(obj, "SignatureVersion"),
            signature: optional_str(obj, "Signature"),
            signing_cert_url: optional_str(obj, "SigningCertUrl"),
            unsubscribe_url: optional_str(obj, "UnsubscribeUrl"),
        },
        records,
    })
}

/// Extract the topic's short name from its ARN.
pub fn topic_name(topic_arn: &str) -> AppResult<String> {
    topic_arn
        .split(':')
        .nth(TOPIC_NAME_SEGMENT)
        .map(str::to_string)
        .ok_or_else(|| AppError::malformed(format!("TopicArn has too few segments: {}", topic_arn)))
}

/// Decode a `Message` body into unclassified records.
///
/// A JSON array yields one record per element, a JSON object yields one record.
pub fn decode_message(
    body: &str,
    message_id: &str,
    topic_name: &str,
) -> AppResult<Vec<MessageRecord>> {
    let decoded: Value = serde_json::from_str(body)?;

    let objects = match decoded {
        Value::Array(items) => items
            .into_iter()
            .map(into_object)
            .collect::<AppResult<Vec<_>>>()?,
        other => vec![into_object(other)?],
    };

    Ok(objects
        .into_iter()
        .map(|fields| MessageRecord::new(fields, message_id, topic_name))
        .collect())
}

fn into_object(value: Value) -> AppResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::invalid_payload(format!(
            "Expected a JSON object in Message, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> AppResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AppError::malformed(format!("{} is not a JSON object", what)))
}

fn required_str(obj: &Map<String, Value>, key: &str) -> AppResult<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::malformed(format!("{} is not a string", key))),
        None => Err(AppError::malformed(format!("Missing {}", key))),
    }
}

/// Key must be present; JSON `null` maps to `None`.
fn nullable_str(obj: &Map<String, Value>, key: &str) -> AppResult<Option<String>> {
    match obj.get(key) {
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::malformed(format!("{} is not a string", key))),
        None => Err(AppError::malformed(format!("Missing {}", key))),
    }
}

fn optional_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
