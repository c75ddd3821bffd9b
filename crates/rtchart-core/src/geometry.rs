// File: crates/rtchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangle, clamping).

use serde::{Deserialize, Serialize};

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

/// Padded plot area inside a container of `width` x `height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Inset a container. An unmeasured or too-small container collapses the
    /// plot onto its left/top padding edge instead of inverting.
    pub fn from_container(width: f32, height: f32, insets: &Insets) -> Self {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let plot_w = (width - insets.hsum()).max(0.0);
        let plot_h = (height - insets.vsum()).max(0.0);
        Self::from_ltrb(insets.left, insets.top, insets.left + plot_w, insets.top + plot_h)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_y(&self) -> f32 { self.top + self.height() * 0.5 }
}

/// Clamp without panicking when `lo > hi`; `lo` wins.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { if hi < lo { lo } else { hi } } else { v }
}
