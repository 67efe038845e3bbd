//! Origin Classifier
//!
//! Assigns each message record an origin from the static registry based on
//! which marker fields it carries. The checks run in a fixed order:
//! `AlarmName`, then `Event Source`, then `source`. A record carrying both
//! `AlarmName` and `source` is therefore an alarm.

use serde_json::Value;
use tracing::warn;

use crate::models::origin::{self, OriginDescriptor};
use crate::models::{display_value, MessageRecord};
use crate::utils::error::AppError;

/// Present on every CloudWatch Alarm state-change message
const ALARM_MARKER: &str = "AlarmName";
/// Present on RDS event subscription messages
const RDS_NOTIFICATION_MARKER: &str = "Event Source";
/// EventBridge rule source, looked up in the registry
const SOURCE_FIELD: &str = "source";

/// Classify every record in place.
pub fn classify_records(records: &mut [MessageRecord]) {
    for record in records.iter_mut() {
        let origin = classify(record);
        record.set_origin(origin);
    }
}

/// Determine the origin of a single record.
pub fn classify(record: &MessageRecord) -> &'static OriginDescriptor {
    if record.contains(ALARM_MARKER) {
        &origin::ALARM
    } else if record.contains(RDS_NOTIFICATION_MARKER) {
        &origin::RDS_NOTIFICATION
    } else if let Some(source) = record.get(SOURCE_FIELD) {
        lookup_source(source).unwrap_or_else(|err| {
            warn!("Event Origin is UNKNOWN: {}", err);
            &origin::UNKNOWN
        })
    } else {
        &origin::UNKNOWN
    }
}

fn lookup_source(source: &Value) -> Result<&'static OriginDescriptor, AppError> {
    match source.as_str() {
        Some(key) => origin::lookup_origin(key),
        None => Err(AppError::ClassificationMiss(display_value(source))),
    }
}
