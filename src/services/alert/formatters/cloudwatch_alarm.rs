//! CloudWatch Alarm Formatter
//!
//! Shows the alarm's `NewStateReason` in a code block.

use super::{code_block, render, AlertFormatter};
use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

pub struct CloudWatchAlarmFormatter;

impl AlertFormatter for CloudWatchAlarmFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::CloudWatchAlarm
    }

    fn format_message(
        &self,
        local_timestamp: &str,
        subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String> {
        let mut body = String::new();
        for record in records {
            body = code_block(&record.text("NewStateReason")?);
        }

        Ok(render(local_timestamp, subject, &body))
    }
}
