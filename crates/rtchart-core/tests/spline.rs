// File: crates/rtchart-core/tests/spline.rs
// Purpose: Line/area path construction per segment and determinism of the geometry pass.

mod support;

use rtchart_core::geometry::Point;
use rtchart_core::spline::{area_path, fmt_px, line_path, PathCommand};
use rtchart_core::{ChartOptions, ChartPoint, Geometry, Sample};
use support::{samples_at_minutes, width_for_plot, BASE_MS, MINUTE};

fn cp(x: f32, y: f32) -> ChartPoint {
    ChartPoint { x, y, value: 0.0, timestamp_ms: 0 }
}

#[test]
fn two_points_make_a_straight_line() {
    let samples = vec![Sample::new(BASE_MS, 100.0), Sample::new(BASE_MS + MINUTE, 200.0)];
    let g = Geometry::compute(&samples, width_for_plot(400.0), None, &ChartOptions::default());
    assert_eq!(g.shapes[0].line.to_string(), "M 48 276 L 448 24");
}

#[test]
fn fewer_than_two_points_make_no_path() {
    assert!(line_path(&[]).is_empty());
    assert!(line_path(&[cp(1.0, 2.0)]).is_empty());
    assert!(area_path(&[cp(1.0, 2.0)], 100.0).is_empty());
}

#[test]
fn curve_interpolates_every_point() {
    let pts = [cp(0.0, 10.0), cp(10.0, 0.0), cp(20.0, 10.0), cp(30.0, 5.0)];
    let path = line_path(&pts);
    assert_eq!(path.commands.len(), 4);
    assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(0.0, 10.0)));
    for (cmd, p) in path.commands[1..].iter().zip(&pts[1..]) {
        match *cmd {
            PathCommand::CubicTo { to, .. } => assert_eq!(to, Point::new(p.x, p.y)),
            other => panic!("expected cubic, got {other:?}"),
        }
    }
}

#[test]
fn endpoint_controls_duplicate_the_endpoint() {
    // With p[-1] == p[0] the first control point lies on the chord p0 -> p1.
    let pts = [cp(0.0, 0.0), cp(10.0, 10.0), cp(20.0, 0.0)];
    let path = line_path(&pts);
    let PathCommand::CubicTo { c1, .. } = path.commands[1] else { panic!("expected cubic") };
    assert!((c1.x - c1.y).abs() < 1e-5);
    assert!(c1.x > 0.0 && c1.x < 10.0);
    let PathCommand::CubicTo { c2, .. } = path.commands[2] else { panic!("expected cubic") };
    assert!((c2.y - (20.0 - c2.x)).abs() < 1e-5);
}

#[test]
fn area_closes_on_baseline_at_both_ends() {
    let samples = samples_at_minutes(&[0, 1, 2, 3, 60, 61, 62], 100.0)
        .into_iter()
        .enumerate()
        .map(|(i, s)| Sample::new(s.timestamp_ms, 100.0 + (i as f64 * 37.0) % 90.0))
        .collect::<Vec<_>>();
    let g = Geometry::compute(&samples, 900.0, None, &ChartOptions::default());
    assert_eq!(g.shapes.len(), 2);
    for (shape, range) in g.shapes.iter().zip(&g.segmentation.segments) {
        let first = g.points[range.start];
        let last = g.points[range.end - 1];
        let n = shape.area.commands.len();
        assert_eq!(shape.area.commands[n - 3], PathCommand::LineTo(Point::new(last.x, g.plot.bottom)));
        assert_eq!(shape.area.commands[n - 2], PathCommand::LineTo(Point::new(first.x, g.plot.bottom)));
        assert_eq!(shape.area.commands[n - 1], PathCommand::Close);
        assert_eq!(&shape.area.commands[..n - 3], &shape.line.commands[..]);
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let samples = samples_at_minutes(&[5, 0, 3, 90, 91], 0.0)
        .into_iter()
        .enumerate()
        .map(|(i, s)| Sample::new(s.timestamp_ms, 300.0 + i as f64 * 211.0))
        .collect::<Vec<_>>();
    let opts = ChartOptions::default();
    let a = Geometry::compute(&samples, 640.0, None, &opts);
    let b = Geometry::compute(&samples, 640.0, None, &opts);
    let paths = |g: &Geometry| g.shapes.iter().map(|s| (s.line.to_string(), s.area.to_string())).collect::<Vec<_>>();
    assert_eq!(paths(&a), paths(&b));
    assert_eq!(a.x_labels, b.x_labels);
    assert_eq!(a.y_labels, b.y_labels);
}

#[test]
fn pixel_numbers_are_trimmed() {
    assert_eq!(fmt_px(48.0), "48");
    assert_eq!(fmt_px(12.5), "12.5");
    assert_eq!(fmt_px(1.254), "1.25");
    assert_eq!(fmt_px(-0.001), "0");
}

#[test]
fn line_starts_and_ends_on_the_segment_points() {
    let pts = [cp(10.0, 50.0), cp(20.0, 30.0), cp(35.0, 60.0)];
    let line = line_path(&pts);
    assert_eq!(line.first_point(), Some(Point::new(10.0, 50.0)));
    assert_eq!(line.last_point(), Some(Point::new(35.0, 60.0)));
    let area = area_path(&pts, 100.0);
    assert_eq!(area.last_point(), Some(Point::new(10.0, 100.0)));
}
