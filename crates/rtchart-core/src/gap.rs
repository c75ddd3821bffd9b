// File: crates/rtchart-core/src/gap.rs
// Summary: Gap segmenter; splits chart points at under-sampled spans and emits "no data" bands.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::scale::ChartPoint;

/// Shaded band between two samples further apart than the gap threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapRegion {
    pub x_start: f32,
    pub width: f32,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Break indices plus the bands and contiguous segments they induce.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmentation {
    /// Strictly increasing, each within `[1, N-1]`.
    pub breaks: Vec<usize>,
    /// One per break.
    pub regions: Vec<GapRegion>,
    /// Maximal runs of point indices with no internal gap.
    pub segments: Vec<Range<usize>>,
}

/// Indices `i` where `t[i] - t[i-1]` is strictly greater than `threshold_ms`.
pub fn find_breaks(points: &[ChartPoint], threshold_ms: i64) -> Vec<usize> {
    points
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1].timestamp_ms - w[0].timestamp_ms > threshold_ms)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Bands spanning the pixel interval between the two samples around each break.
pub fn gap_regions(points: &[ChartPoint], breaks: &[usize]) -> Vec<GapRegion> {
    breaks
        .iter()
        .map(|&i| {
            let (a, b) = (&points[i - 1], &points[i]);
            GapRegion {
                x_start: a.x,
                width: (b.x - a.x).max(0.0),
                start_ms: a.timestamp_ms,
                end_ms: b.timestamp_ms,
            }
        })
        .collect()
}

/// Partition `0..len` at `breaks`. Empty input yields no segments.
pub fn segment_ranges(len: usize, breaks: &[usize]) -> Vec<Range<usize>> {
    if len == 0 { return Vec::new(); }
    let mut out = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0usize;
    for &b in breaks {
        out.push(start..b);
        start = b;
    }
    out.push(start..len);
    out
}

pub fn segment(points: &[ChartPoint], threshold_ms: i64) -> Segmentation {
    let breaks = find_breaks(points, threshold_ms);
    let regions = gap_regions(points, &breaks);
    let segments = segment_ranges(points.len(), &breaks);
    Segmentation { breaks, regions, segments }
}
