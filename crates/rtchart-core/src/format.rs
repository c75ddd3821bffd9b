// File: crates/rtchart-core/src/format.rs
// Summary: Label text formatting for response times and timestamps.

use chrono::{DateTime, FixedOffset};

/// Decimals used for seconds in the tooltip.
pub const TOOLTIP_DECIMALS: usize = 2;
/// Decimals used for seconds on the y-axis.
pub const AXIS_DECIMALS: usize = 1;
/// Text for labels that have no data behind them.
pub const PLACEHOLDER: &str = "-";

/// Milliseconds below one second print as whole `ms`, otherwise as seconds
/// with `decimals` fraction digits.
pub fn format_response_time(ms: f64, decimals: usize) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else {
        format!("{:.*}s", decimals, ms / 1000.0)
    }
}

pub fn tooltip_value(ms: f64) -> String { format_response_time(ms, TOOLTIP_DECIMALS) }

pub fn axis_value(ms: f64) -> String { format_response_time(ms, AXIS_DECIMALS) }

fn local(ts_ms: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(ts_ms).map(|dt| dt.with_timezone(&offset))
}

/// `HH:MM` in the given zone.
pub fn clock_label(ts_ms: i64, offset: FixedOffset) -> String {
    local(ts_ms, offset)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `MMM dd, yyyy HH:mm` in the given zone, e.g. `Mar 05, 2024 14:07`.
pub fn tooltip_datetime(ts_ms: i64, offset: FixedOffset) -> String {
    local(ts_ms, offset)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
