// File: crates/rtchart-core/tests/gaps.rs
// Purpose: Gap segmentation, "no data" bands and per-segment shapes.

mod support;

use proptest::prelude::*;
use rtchart_core::gap::{find_breaks, segment_ranges};
use rtchart_core::types::GAP_THRESHOLD_MS;
use rtchart_core::{ChartOptions, Geometry, Sample};
use support::{samples_at_minutes, width_for_plot, BASE_MS};

fn layout(samples: &[Sample]) -> Geometry {
    Geometry::compute(samples, width_for_plot(400.0), None, &ChartOptions::default())
}

#[test]
fn dense_samples_have_no_breaks() {
    let samples = vec![
        Sample::new(BASE_MS, 100.0),
        Sample::new(BASE_MS + 60_000, 120.0),
        Sample::new(BASE_MS + 120_000, 90.0),
    ];
    let g = layout(&samples);
    assert!(g.segmentation.breaks.is_empty());
    assert!(g.gaps.is_empty());
    assert_eq!(g.shapes.len(), 1);
}

#[test]
fn forty_minute_hole_breaks_once_at_index_one() {
    let samples = samples_at_minutes(&[0, 40], 100.0);
    let g = layout(&samples);
    assert_eq!(g.segmentation.breaks, vec![1]);
    assert_eq!(g.segmentation.regions.len(), 1);

    let r = g.segmentation.regions[0];
    assert_eq!(r.x_start, g.points[0].x);
    assert_eq!(r.x_start + r.width, g.points[1].x);
    assert_eq!((r.start_ms, r.end_ms), (g.points[0].timestamp_ms, g.points[1].timestamp_ms));

    let band = g.gaps[0];
    assert_eq!((band.y, band.height), (g.plot.top, g.plot.height()));
}

#[test]
fn exactly_threshold_is_not_a_gap() {
    let samples = samples_at_minutes(&[0, 30, 61], 100.0);
    let g = layout(&samples);
    assert_eq!(g.segmentation.breaks, vec![2]);
}

#[test]
fn zero_or_one_sample_never_breaks() {
    assert!(layout(&[]).segmentation.breaks.is_empty());
    assert!(layout(&samples_at_minutes(&[0], 1.0)).segmentation.breaks.is_empty());
    assert!(segment_ranges(0, &[]).is_empty());
}

#[test]
fn segments_render_independently_and_isolated_points_become_markers() {
    // [0,1,2] gap [100] gap [200,201]
    let samples = samples_at_minutes(&[0, 1, 2, 100, 200, 201], 100.0);
    let g = layout(&samples);
    assert_eq!(g.segmentation.breaks, vec![3, 4]);
    assert_eq!(g.segmentation.segments, vec![0..3, 3..4, 4..6]);
    assert_eq!(g.shapes.len(), 2);
    assert_eq!(g.markers.len(), 1);
    assert_eq!(g.markers[0].center.x, g.points[3].x);
    assert_eq!(g.gaps.len(), 2);
}

#[test]
fn single_sample_chart_draws_a_marker() {
    let g = layout(&samples_at_minutes(&[0], 300.0));
    assert!(g.shapes.is_empty());
    assert_eq!(g.markers.len(), 1);
}

proptest! {
    #[test]
    fn breaks_are_strictly_increasing_and_in_range(
        mins in prop::collection::vec(0i64..600, 0..40)
    ) {
        let mut mins = mins;
        mins.sort_unstable();
        let g = layout(&samples_at_minutes(&mins, 10.0));
        let n = g.points.len();
        prop_assert_eq!(g.segmentation.regions.len(), g.segmentation.breaks.len());
        prop_assert_eq!(&g.segmentation.breaks, &find_breaks(&g.points, GAP_THRESHOLD_MS));
        for w in g.segmentation.breaks.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for &b in &g.segmentation.breaks {
            prop_assert!(b >= 1 && b <= n - 1);
        }
        let covered: usize = g.segmentation.segments.iter().map(|r| r.len()).sum();
        prop_assert_eq!(covered, n);
    }
}
