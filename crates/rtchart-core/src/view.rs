// File: crates/rtchart-core/src/view.rs
// Summary: Visible time window: zoom/pan/reset over the full sample range, always kept inside it.

use std::ops::Range;

use crate::sample::Sample;
use crate::scale::Domain;

/// Zoom factor per zoom step.
pub const ZOOM_STEP: f64 = 2.0;
/// Fraction of the visible span moved per pan step.
pub const PAN_FRACTION: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub full: Domain,
    pub visible: Domain,
}

impl ViewWindow {
    pub fn new(full: Domain) -> Self {
        Self { full, visible: full }
    }

    /// Window over the whole (normalized) sample range; `None` when empty.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        Domain::of_times(samples).map(Self::new)
    }

    pub fn is_zoomed(&self) -> bool { self.visible != self.full }

    pub fn reset(&mut self) { self.visible = self.full; }

    /// Halve the visible span around its centre.
    pub fn zoom_in(&mut self) {
        let c = self.center();
        let span = (self.visible.max - self.visible.min) / ZOOM_STEP;
        self.set(c - span * 0.5, c + span * 0.5);
    }

    /// Double the visible span around its centre, capped at the full range.
    pub fn zoom_out(&mut self) {
        let c = self.center();
        let span = ((self.visible.max - self.visible.min) * ZOOM_STEP).min(self.full.max - self.full.min);
        self.slide_into(c - span * 0.5, c + span * 0.5);
    }

    pub fn pan_left(&mut self) {
        let d = (self.visible.max - self.visible.min) * PAN_FRACTION;
        self.slide_into(self.visible.min - d, self.visible.max - d);
    }

    pub fn pan_right(&mut self) {
        let d = (self.visible.max - self.visible.min) * PAN_FRACTION;
        self.slide_into(self.visible.min + d, self.visible.max + d);
    }

    /// Drag-pan: positive `dx` moves the content right (earlier times come into view).
    pub fn pan_by_pixels(&mut self, dx: f64, plot_width: f64) {
        let plot_w = plot_width.max(1.0);
        let shift = -dx / plot_w * (self.visible.max - self.visible.min);
        self.slide_into(self.visible.min + shift, self.visible.max + shift);
    }

    /// Samples whose timestamps fall inside the visible window (normalized input).
    pub fn visible_samples<'a>(&self, samples: &'a [Sample]) -> &'a [Sample] {
        &samples[self.visible_range(samples)]
    }

    /// Visible samples plus the nearest sample on each side of the window, so
    /// lines and gap bands crossing a window edge still reach it.
    pub fn context_samples<'a>(&self, samples: &'a [Sample]) -> &'a [Sample] {
        let r = self.visible_range(samples);
        &samples[r.start.saturating_sub(1)..(r.end + 1).min(samples.len())]
    }

    fn visible_range(&self, samples: &[Sample]) -> Range<usize> {
        let lo = samples.partition_point(|s| (s.timestamp_ms as f64) < self.visible.min);
        let hi = samples.partition_point(|s| (s.timestamp_ms as f64) <= self.visible.max);
        lo..hi.max(lo)
    }

    fn center(&self) -> f64 { (self.visible.min + self.visible.max) * 0.5 }

    fn set(&mut self, min: f64, max: f64) {
        self.visible = Domain::new(min.max(self.full.min), max.min(self.full.max));
    }

    /// Move `[min, max]` back inside the full range without changing its span.
    fn slide_into(&mut self, mut min: f64, mut max: f64) {
        if min < self.full.min {
            max += self.full.min - min;
            min = self.full.min;
        }
        if max > self.full.max {
            min -= max - self.full.max;
            max = self.full.max;
        }
        self.set(min, max);
    }
}
