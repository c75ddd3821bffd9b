// File: crates/rtchart-core/src/types.rs
// Summary: Shared constants and layout options (sizes, paddings, thresholds, hit radii).

use chrono::{FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Default chart height in pixels.
pub const HEIGHT: f32 = 300.0;
/// Samples further apart than this (strictly) start a new segment.
pub const GAP_THRESHOLD_MS: i64 = 30 * 60 * 1000;
/// Hit radius for mouse/pen pointers, in pixels.
pub const POINTER_HIT_RADIUS: f32 = 20.0;
/// Hit radius for touch input, in pixels.
pub const TOUCH_HIT_RADIUS: f32 = 30.0;
/// Containers at or below this width count as narrow viewports.
pub const NARROW_VIEWPORT: f32 = 768.0;
/// Approximate horizontal room each x label needs.
pub const X_TICK_SPACING: f32 = 80.0;
pub const MIN_X_TICKS: usize = 2;
pub const MAX_X_TICKS: usize = 6;
/// Number of y labels, always.
pub const Y_LABELS: usize = 6;

/// Screen margins around the plot rectangle, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on both sides of each axis.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::symmetric(48.0, 24.0)
    }
}

/// Host-tunable layout and interaction options.
///
/// Every field has a default, so a host may deserialize a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub height: f32,
    pub insets: Insets,
    pub gap_threshold_ms: i64,
    pub pointer_hit_radius: f32,
    pub touch_hit_radius: f32,
    pub narrow_viewport: f32,
    pub x_tick_spacing: f32,
    /// Estimated tooltip box size used for edge clamping.
    pub tooltip_width: f32,
    pub tooltip_height: f32,
    /// Distance between cursor and tooltip box.
    pub tooltip_offset: f32,
    /// The tooltip never goes above this y.
    pub tooltip_min_top: f32,
    /// Offset used to render "local" times, in minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            insets: Insets::default(),
            gap_threshold_ms: GAP_THRESHOLD_MS,
            pointer_hit_radius: POINTER_HIT_RADIUS,
            touch_hit_radius: TOUCH_HIT_RADIUS,
            narrow_viewport: NARROW_VIEWPORT,
            x_tick_spacing: X_TICK_SPACING,
            tooltip_width: 168.0,
            tooltip_height: 52.0,
            tooltip_offset: 12.0,
            tooltip_min_top: 8.0,
            utc_offset_minutes: 0,
        }
    }
}

impl ChartOptions {
    /// Default options with label times rendered in the machine's local zone.
    pub fn with_local_offset() -> Self {
        let secs = Local::now().offset().fix().local_minus_utc();
        Self { utc_offset_minutes: secs / 60, ..Self::default() }
    }

    /// Label offset as a chrono zone; out-of-range values fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }
}
