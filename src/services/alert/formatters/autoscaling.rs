//! Auto Scaling Activity Formatter

use super::{render, AlertFormatter};
use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

pub struct AutoScalingFormatter;

impl AlertFormatter for AutoScalingFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::AutoScaling
    }

    fn format_message(
        &self,
        local_timestamp: &str,
        subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String> {
        let mut body = String::new();
        for record in records {
            let status_code = record.text("StatusCode")?;
            let cause = record.text("Cause")?;
            body = format!("Status: {} , Cause: {}", status_code, cause);
        }

        Ok(render(local_timestamp, subject, &body))
    }
}
