//! Formatter Dispatch
//!
//! Picks the formatter for an envelope's records and renders the alert.
//! The decision is keyed off the first record only: its origin decides both
//! whether an alert is sent and which formatter renders every record.

use tracing::{error, info, warn};

use super::formatters::{
    AlertFormatter, AutoScalingFormatter, CloudWatchAlarmFormatter, DbInstanceEventFormatter,
    GuardDutyFormatter, RdsNotificationFormatter, UnknownFormatter,
};
use crate::models::{FormatterId, MessageRecord, SnsEnvelope, TriggerRecord};
use crate::utils::error::{AppError, AppResult};

/// Result of a dispatch that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Rendered alert text
    Alert(String),
    /// Nothing to send: no records, or alerts are off for the origin
    NoAlert,
}

/// Resolve the formatter registered for `id`.
///
/// `CloudTrail` and `SecurityHub` have no formatter; their origins are
/// registered with alerts disabled.
pub fn resolve_formatter(id: FormatterId) -> Option<&'static dyn AlertFormatter> {
    match id {
        FormatterId::CloudWatchAlarm => Some(&CloudWatchAlarmFormatter),
        FormatterId::RdsNotification => Some(&RdsNotificationFormatter),
        FormatterId::DbInstanceEvent => Some(&DbInstanceEventFormatter),
        FormatterId::GuardDuty => Some(&GuardDutyFormatter),
        FormatterId::AutoScaling => Some(&AutoScalingFormatter),
        FormatterId::Unknown => Some(&UnknownFormatter),
        FormatterId::CloudTrail | FormatterId::SecurityHub => None,
    }
}

/// Render the alert for a classified record sequence.
pub fn dispatch(
    local_timestamp: &str,
    subject: Option<&str>,
    records: &[MessageRecord],
) -> AppResult<DispatchOutcome> {
    let Some(first) = records.first() else {
        info!("Message doesn't exist, no alert generated");
        return Ok(DispatchOutcome::NoAlert);
    };

    let Some(origin) = first.origin() else {
        warn!("First message record was never classified, no alert generated");
        return Ok(DispatchOutcome::NoAlert);
    };

    if !origin.alert_enabled {
        info!(
            "Alerts are turned off for {} events, no alert generated",
            origin.service_name
        );
        return Ok(DispatchOutcome::NoAlert);
    }

    let formatter = resolve_formatter(origin.formatter_id)
        .ok_or_else(|| AppError::FormatterNotFound(origin.formatter_id.to_string()))?;

    formatter
        .format_message(local_timestamp, subject, records)
        .map(DispatchOutcome::Alert)
}

/// Produce the Slack text for an envelope, logging instead of failing.
pub fn generate_message(envelope: &SnsEnvelope) -> Option<String> {
    match dispatch(
        &envelope.local_timestamp,
        envelope.subject.as_deref(),
        &envelope.records,
    ) {
        Ok(DispatchOutcome::Alert(text)) => Some(text),
        Ok(DispatchOutcome::NoAlert) => None,
        Err(e) => {
            error!(
                "Failed to generate alert for message {}: {}",
                envelope.message_id, e
            );
            None
        }
    }
}

/// Produce the Slack text for a trigger record, if it carries an SNS envelope.
pub fn trigger_message(trigger: &TriggerRecord) -> Option<String> {
    trigger.sns.as_ref().and_then(generate_message)
}
