//! Fallback Formatter
//!
//! Used for records whose origin could not be identified. Only the SNS
//! identifiers are shown since the body shape is unknown.

use super::{render, AlertFormatter};
use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

pub struct UnknownFormatter;

impl AlertFormatter for UnknownFormatter {
    fn formatter_id(&self) -> FormatterId {
        FormatterId::Unknown
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
                "SNS Topic: {}, Message ID: {}",
                record.topic_name(),
                record.message_id()
            );
        }

        Ok(render(local_timestamp, subject, &body))
    }
}
