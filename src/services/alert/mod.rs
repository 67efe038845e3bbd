//! Alert Pipeline
//!
//! Turns an SNS-delivered monitoring event into Slack message text:
//! parse the envelope, classify each record's origin, then render it with
//! the formatter registered for that origin.

pub mod classifier;
pub mod dispatch;
pub mod formatters;
pub mod parser;

pub use classifier::{classify, classify_records};
pub use dispatch::{dispatch, generate_message, resolve_formatter, trigger_message, DispatchOutcome};
pub use formatters::AlertFormatter;
pub use parser::{parse_envelope, parse_trigger_event, parse_trigger_record};
