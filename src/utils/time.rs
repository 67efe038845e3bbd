//! Timestamp Utilities
//!
//! Converts SNS UTC timestamps into the display form used in alerts.
//! The conversion applies a fixed +08:00 offset; it does not consult a
//! timezone database, so no daylight-saving rules are applied.

use chrono::{FixedOffset, NaiveDateTime};

use crate::utils::error::{AppError, AppResult};

/// Offset applied to every envelope timestamp, in hours east of UTC.
pub const LOCAL_OFFSET_HOURS: i32 = 8;

/// SNS timestamp layout, e.g. `2024-03-01T04:05:06.789Z`.
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Display layout. `%:z` renders the offset as `+08:00`.
const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Render a UTC SNS timestamp as `YYYY-MM-DD HH:MM:SS+08:00`.
pub fn utc_to_local_display(utc: &str) -> AppResult<String> {
    let naive = NaiveDateTime::parse_from_str(utc, UTC_FORMAT)
        .map_err(|e| AppError::malformed(format!("Invalid Timestamp '{}': {}", utc, e)))?;

    let offset = FixedOffset::east_opt(LOCAL_OFFSET_HOURS * 3600)
        .ok_or_else(|| AppError::malformed("Invalid local offset"))?;

    Ok(naive
        .and_utc()
        .with_timezone(&offset)
        .format(LOCAL_FORMAT)
        .to_string())
}
