// File: crates/rtchart-core/src/axis.rs
// Summary: Axis label generator; adaptive x ticks (HH:MM) and fixed y ticks (ms/s).

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::format::{axis_value, clock_label, PLACEHOLDER};
use crate::geometry::{clamp, PlotRect};
use crate::grid::linspace;
use crate::scale::{TimeScale, ValueScale};
use crate::types::{Insets, MAX_X_TICKS, MIN_X_TICKS, Y_LABELS};

pub const Y_AXIS_TITLE: &str = "Response time";

/// Horizontal text alignment relative to `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    /// x for the time axis, y for the value axis.
    pub position: f32,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Option<String>,
    pub labels: Vec<AxisLabel>,
}

/// Number of x intervals: `clamp(floor(plot_width / spacing), 2, 6)`.
pub fn x_tick_count(plot_width: f32, spacing: f32) -> usize {
    let raw = if spacing > 0.0 { (plot_width.max(0.0) / spacing).floor() as usize } else { 0 };
    raw.clamp(MIN_X_TICKS, MAX_X_TICKS)
}

/// `ticks + 1` labels evenly spaced across the time domain. `None` for the
/// scale means there is no data and dash placeholders are emitted.
pub fn x_labels(
    scale: Option<&TimeScale>,
    plot: &PlotRect,
    container_width: f32,
    insets: &Insets,
    spacing: f32,
    offset: FixedOffset,
) -> Vec<AxisLabel> {
    let ticks = x_tick_count(plot.width(), spacing);
    let lo = insets.left;
    let hi = container_width - insets.right;
    (0..=ticks)
        .map(|i| {
            let frac = i as f64 / ticks as f64;
            let anchor = if i == 0 { Anchor::Start } else if i == ticks { Anchor::End } else { Anchor::Middle };
            let position = clamp(plot.left + plot.width() * frac as f32, lo, hi);
            let text = match scale {
                Some(s) => {
                    let t = s.domain.min + s.domain.span() * frac;
                    clock_label(t.round() as i64, offset)
                }
                None => PLACEHOLDER.to_string(),
            };
            AxisLabel { position, text, anchor }
        })
        .collect()
}

/// Six labels from the bottom of the value domain to the top, right-aligned
/// against the plot's left edge.
pub fn y_labels(scale: Option<&ValueScale>, plot: &PlotRect) -> Vec<AxisLabel> {
    match scale {
        Some(s) => linspace(s.domain.min, s.domain.min + s.domain.span(), Y_LABELS)
            .into_iter()
            .map(|v| AxisLabel { position: s.to_px(v), text: axis_value(v), anchor: Anchor::End })
            .collect(),
        None => linspace(plot.bottom as f64, plot.top as f64, Y_LABELS)
            .into_iter()
            .map(|y| AxisLabel { position: y as f32, text: PLACEHOLDER.to_string(), anchor: Anchor::End })
            .collect(),
    }
}
