//! Alert Formatter Trait
//!
//! Defines the trait every origin-specific formatter implements, plus the
//! rendering helpers they share.
//!
//! All formatters walk the full record list but keep only the last record's
//! body (and subject override). Earlier records are still validated, so a
//! missing field anywhere fails the whole call.

pub mod autoscaling;
pub mod cloudwatch_alarm;
pub mod db_instance_event;
pub mod guardduty;
pub mod rds_notification;
pub mod unknown;

use crate::models::{FormatterId, MessageRecord};
use crate::utils::error::AppResult;

pub use autoscaling::AutoScalingFormatter;
pub use cloudwatch_alarm::CloudWatchAlarmFormatter;
pub use db_instance_event::DbInstanceEventFormatter;
pub use guardduty::GuardDutyFormatter;
pub use rds_notification::RdsNotificationFormatter;
pub use unknown::UnknownFormatter;

/// Renders a classified record sequence into Slack message text.
///
/// Implementations must be pure: the same inputs always give the same text.
pub trait AlertFormatter: Send + Sync {
    /// Formatter identifier this implementation serves.
    fn formatter_id(&self) -> FormatterId;

    /// Render `[<timestamp>] <subject prefix> <body>`.
    fn format_message(
        &self,
        local_timestamp: &str,
        subject: Option<&str>,
        records: &[MessageRecord],
    ) -> AppResult<String>;
}

/// `*<subject>*:` for a real subject, empty for `None` or the literal `"None"`.
pub fn format_subject(subject: Option<&str>) -> String {
    match subject {
        None | Some("None") => String::new(),
        Some(s) => format!("*{}*:", s),
    }
}

/// Assemble the final alert line.
pub fn render(local_timestamp: &str, subject: Option<&str>, body: &str) -> String {
    format!("[{}] {} {}", local_timestamp, format_subject(subject), body)
}

/// Wrap text in a Slack code block.
pub(crate) fn code_block(text: &str) -> String {
    format!("```{}```", text)
}
