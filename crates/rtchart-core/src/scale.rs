// File: crates/rtchart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales mapping normalized samples onto the padded plot rectangle.

use serde::{Deserialize, Serialize};

use crate::geometry::PlotRect;
use crate::sample::Sample;

/// A sample placed in pixel space. Rebuilt wholesale, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
    pub value: f64,
    pub timestamp_ms: i64,
}

/// Closed range of domain values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Observed time extremes. Assumes `samples` is normalized.
    pub fn of_times(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        Some(Self::new(first.timestamp_ms as f64, last.timestamp_ms as f64))
    }

    /// Observed value extremes.
    pub fn of_values(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() { return None; }
        let (lo, hi) = samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.value), hi.max(s.value))
        });
        Some(Self::new(lo, hi))
    }

    /// Width of the range with a floor of 1 for degenerate domains.
    pub fn span(&self) -> f64 {
        let s = self.max - self.min;
        if s > 0.0 { s } else { 1.0 }
    }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Horizontal time scale: epoch milliseconds to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub width_px: f32,
    pub domain: Domain,
}

impl TimeScale {
    pub fn new(left_px: f32, width_px: f32, domain: Domain) -> Self {
        Self { left_px, width_px: width_px.max(0.0), domain }
    }
    #[inline]
    pub fn to_px(&self, t_ms: f64) -> f32 {
        self.left_px + ((t_ms - self.domain.min) / self.domain.span()) as f32 * self.width_px
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        if self.width_px <= 0.0 { return self.domain.min; }
        self.domain.min + ((px - self.left_px) / self.width_px) as f64 * self.domain.span()
    }
}

/// Vertical value scale mapping the data range to [top, bottom] pixels (inverted y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub domain: Domain,
}

impl ValueScale {
    /// A constant domain is widened to a unit range centred on the value,
    /// which places it at the vertical middle of the plot.
    pub fn new_linear(top_px: f32, bottom_px: f32, domain: Domain) -> Self {
        let domain = if (domain.max - domain.min).abs() < 1e-12 {
            Domain::new(domain.min - 0.5, domain.min + 0.5)
        } else {
            domain
        };
        Self { top_px, bottom_px, domain }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.bottom_px - ((v - self.domain.min) / self.domain.span()) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let h = self.bottom_px - self.top_px;
        if h <= 0.0 { return self.domain.min; }
        self.domain.min + ((self.bottom_px - py) / h) as f64 * self.domain.span()
    }
}

/// Pair of scales for one geometry pass. Identical inputs give identical output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapper {
    pub time: TimeScale,
    pub value: ValueScale,
}

impl ScaleMapper {
    /// Scales over the observed domains of `samples` (normalized).
    pub fn new(samples: &[Sample], plot: &PlotRect) -> Self {
        let time = Domain::of_times(samples).unwrap_or(Domain::new(0.0, 1.0));
        Self::with_time_domain(samples, time, plot)
    }

    /// Scales over an explicit time domain; values are autoscaled to `samples`.
    pub fn with_time_domain(samples: &[Sample], time: Domain, plot: &PlotRect) -> Self {
        let value = Domain::of_values(samples).unwrap_or(Domain::new(0.0, 1.0));
        Self {
            time: TimeScale::new(plot.left, plot.width(), time),
            value: ValueScale::new_linear(plot.top, plot.bottom, value),
        }
    }

    #[inline]
    pub fn point(&self, s: &Sample) -> ChartPoint {
        ChartPoint {
            x: self.time.to_px(s.timestamp_ms as f64),
            y: self.value.to_px(s.value),
            value: s.value,
            timestamp_ms: s.timestamp_ms,
        }
    }

    /// One point per sample, index for index.
    pub fn map(&self, samples: &[Sample]) -> Vec<ChartPoint> {
        samples.iter().map(|s| self.point(s)).collect()
    }
}
