// File: crates/rtchart-core/src/grid.rs
// Summary: Tick layout helpers and horizontal grid line placement.

use serde::{Deserialize, Serialize};

use crate::geometry::PlotRect;

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// A dashed horizontal guide across the plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f32,
    pub x1: f32,
    pub x2: f32,
}

/// Dash pattern for grid lines, in pixels (on, off).
pub const GRID_DASH: [f32; 2] = [4.0, 4.0];

/// One horizontal line per y label position; no vertical lines.
pub fn horizontal_lines(plot: &PlotRect, count: usize) -> Vec<GridLine> {
    linspace(plot.bottom as f64, plot.top as f64, count)
        .into_iter()
        .map(|y| GridLine { y: y as f32, x1: plot.left, x2: plot.right })
        .collect()
}
