//! RDS Event Subscription Formatter

use super::{render, AlertFormatter};
use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

/// Renders `(<Source ID>) <Event Message>` for RDS event subscription messages.
pub struct RdsNotificationFormatter;

impl AlertFormatter for RdsNotificationFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::RdsNotification
    }

    fn format_message(
        &self,
        local_timestamp: &str,
        subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String> {
        let mut body = String::new();
        for record in records {
            body = format!(
                "({}) {}",
                record.text("Source ID")?,
                record.text("Event Message")?
            );
        }

        Ok(render(local_timestamp, subject, &body))
    }
}
