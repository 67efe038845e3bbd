//! Envelope Models
//!
//! The Lambda trigger record and the SNS envelope it carries.

use std::fmt;

use super::message::MessageRecord;

/// SNS signing fields. Carried along for completeness, never verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureMetadata {
    pub signature_version: Option<String>,
    pub signature: Option<String>,
    pub signing_cert_url: Option<String>,
    pub unsubscribe_url: Option<String>,
}

/// A parsed SNS notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SnsEnvelope {
    pub message_type: Option<String>,
    pub message_id: String,
    pub topic_arn: String,
    /// Sixth colon-delimited segment of `topic_arn`
    pub topic_name: String,
    pub subject: Option<String>,
    /// Raw UTC timestamp as delivered
    pub timestamp: String,
    /// `timestamp` shifted to +08:00 for display
    pub local_timestamp: String,
    pub signature: SignatureMetadata,
    /// Records decoded from `Message`, classified in order
    pub records: Vec<MessageRecord>,
}

/// Element of the Lambda `Records` array.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRecord {
    pub event_source: String,
    pub event_version: String,
    pub event_subscription_arn: String,
    /// Absent when the record was not delivered through SNS
    pub sns: Option<SnsEnvelope>,
}

impl fmt::Display for TriggerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.event_source, self.event_version, self.event_subscription_arn
        )
    }
}
