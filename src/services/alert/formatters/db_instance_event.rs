//! RDS EventBridge Formatter
//!
//! EventBridge `aws.rds` events carry their own `detail-type`, which replaces
//! the SNS subject.

use super::{code_block, render, AlertFormatter};
use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

pub struct DbInstanceEventFormatter;

impl AlertFormatter for DbInstanceEventFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::DbInstanceEvent
    }

    fn format_message(
        &self,
        local_timestamp: &str,
        subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String> {
        let mut subject = subject.map(str::to_string);
        let mut body = String::new();
        for record in records {
            subject = Some(record.text("detail-type")?);
            body = format!(
                "Source Type is {}, ({}) {}",
                record.nested_text("detail", "SourceType")?,
                record.nested_text("detail", "SourceIdentifier")?,
                code_block(&record.nested_text("detail", "Message")?)
            );
        }

        Ok(render(local_timestamp, subject.as_deref(), &body))
    }
}
