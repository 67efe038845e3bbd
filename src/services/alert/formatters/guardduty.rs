//! GuardDuty Finding Formatter
//!
//! Findings at or below `SEVERITY_THRESHOLD` render with an empty body.

use super::{render, AlertFormatter};
use crate::models::{display_value, FormatterId, MessageRecord};
use crate::utils::error::{AppError, AppResult};

const GUARDDUTY_SUBJECT: &str = "AWS GuardDuty Notification";

/// Findings must score strictly above this to be reported.
const SEVERITY_THRESHOLD: f64 = 2.0;

pub struct GuardDutyFormatter;

impl AlertFormatter for GuardDutyFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::GuardDuty
    }

    fn format_message(
        &self,
        local_timestamp: &str,
        _subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String> {
        let mut body = String::new();
        for record in records {
            let event_message = format!(
                "{} - {} ",
                record.nested_text("detail", "type")?,
                record.nested_text("detail", "description")?
            );

            let severity = record.require_nested("detail", "severity")?;
            let score = severity.as_f64().ok_or_else(|| {
                AppError::invalid_payload(format!(
                    "detail.severity is not a number: {}",
                    severity
                ))
            })?;

            body = if score > SEVERITY_THRESHOLD {
                format!(
                    "*{}* (Severity {}) {}",
                    GUARDDUTY_SUBJECT,
                    display_value(severity),
                    event_message
                )
            } else {
                String::new()
            };
        }

        Ok(render(local_timestamp, Some(GUARDDUTY_SUBJECT), &body))
    }
}
