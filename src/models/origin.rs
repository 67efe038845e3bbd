//! Event Origin Models
//!
//! Origin descriptors and the static registry that maps a classification key
//! (an `Alarm`/`RDSNotification` marker or an EventBridge `source` value) to
//! the descriptor that says how to handle the event.

use serde::Serialize;
use std::fmt;

use crate::utils::error::{AppError, AppResult};

/// Identifies which formatter renders an origin's messages
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum FormatterId {
    CloudWatchAlarm,
    RdsNotification,
    DbInstanceEvent,
    GuardDuty,
    AutoScaling,
    CloudTrail,
    SecurityHub,
    Unknown,
}

impl fmt::Display for FormatterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudWatchAlarm => write!(f, "CloudWatchAlarm"),
            Self::RdsNotification => write!(f, "RDSNotification"),
            Self::DbInstanceEvent => write!(f, "DBInstanceEvent"),
            Self::GuardDuty => write!(f, "GuardDuty"),
            Self::AutoScaling => write!(f, "AutoScaling"),
            Self::CloudTrail => write!(f, "CloudTrail"),
            Self::SecurityHub => write!(f, "SecurityHub"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Static description of an upstream service and how its events are handled
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OriginDescriptor {
    pub service_name: &'static str,
    pub event_type: &'static str,
    pub formatter_id: FormatterId,
    /// When false the event is dropped without formatting
    pub alert_enabled: bool,
}

impl OriginDescriptor {
    const fn new(service_name: &'static str, formatter_id: FormatterId, alert_enabled: bool) -> Self {
        Self {
            service_name,
            event_type: ALL_EVENTS,
            formatter_id,
            alert_enabled,
        }
    }
}

const ALL_EVENTS: &str = "All Events";

/// Registry key for records carrying `AlarmName`
pub const ALARM_KEY: &str = "Alarm";
/// Registry key for records carrying `Event Source`
pub const RDS_NOTIFICATION_KEY: &str = "RDSNotification";
/// Registry key used when nothing else matches
pub const UNKNOWN_KEY: &str = "UNKNOWN";

pub static ALARM: OriginDescriptor =
    OriginDescriptor::new("CloudWatch Alarm", FormatterId::CloudWatchAlarm, true);
pub static RDS_NOTIFICATION: OriginDescriptor =
    OriginDescriptor::new("RDS Notification Event", FormatterId::RdsNotification, true);
pub static UNKNOWN: OriginDescriptor = OriginDescriptor::new("UNKNOWN", FormatterId::Unknown, true);

/// Process-wide origin table, keyed by classification key.
static REGISTRY: [(&str, &OriginDescriptor); 8] = [
    (ALARM_KEY, &ALARM),
    (RDS_NOTIFICATION_KEY, &RDS_NOTIFICATION),
    (
        "aws.guardduty",
        &OriginDescriptor::new("GuardDuty", FormatterId::GuardDuty, true),
    ),
    (
        "aws.cloudtrail",
        &OriginDescriptor::new("CloudTrail", FormatterId::CloudTrail, false),
    ),
    (
        "aws.securityhub",
        &OriginDescriptor::new("SecurityHub", FormatterId::SecurityHub, false),
    ),
    (
        "aws.rds",
        &OriginDescriptor::new("RDS", FormatterId::DbInstanceEvent, true),
    ),
    (
        "aws.autoscaling",
        &OriginDescriptor::new("Auto Scaling", FormatterId::AutoScaling, true),
    ),
    (UNKNOWN_KEY, &UNKNOWN),
];

/// Look up an origin by classification key.
///
/// Returns `ClassificationMiss` carrying the key when the registry has no entry.
pub fn lookup_origin(key: &str) -> AppResult<&'static OriginDescriptor> {
    REGISTRY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, origin)| *origin)
        .ok_or_else(|| AppError::ClassificationMiss(key.to_string()))
}
