// File: crates/rtchart-core/src/spline.rs
// Summary: Spline path builder; cardinal spline through segment points as cubic Bezier commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::scale::ChartPoint;

/// Cardinal tension; 0.0 is Catmull-Rom, 1.0 collapses to straight lines.
pub const TENSION: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Renderer-agnostic path. `Display` gives the SVG `d` attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn first_point(&self) -> Option<Point> {
        match self.commands.first()? {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        }
    }

    pub fn last_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_px(p.x), fmt_px(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_px(p.x), fmt_px(p.y))?,
                PathCommand::CubicTo { c1, c2, to } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    fmt_px(c1.x), fmt_px(c1.y), fmt_px(c2.x), fmt_px(c2.y), fmt_px(to.x), fmt_px(to.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Pixel value with at most two decimals and no trailing zeros.
pub fn fmt_px(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Smooth line through `points`. Fewer than two points yield an empty path;
/// exactly two yield a straight line.
pub fn line_path(points: &[ChartPoint]) -> PathData {
    let n = points.len();
    if n < 2 { return PathData::default(); }
    let p = |i: usize| Point::new(points[i].x, points[i].y);

    let mut commands = Vec::with_capacity(n);
    commands.push(PathCommand::MoveTo(p(0)));
    if n == 2 {
        commands.push(PathCommand::LineTo(p(1)));
        return PathData { commands };
    }

    let k = (1.0 - TENSION) / 6.0;
    for i in 0..n - 1 {
        // Endpoints reuse themselves as the missing neighbour.
        let p0 = p(i.saturating_sub(1));
        let p1 = p(i);
        let p2 = p(i + 1);
        let p3 = p((i + 2).min(n - 1));
        let c1 = Point::new(p1.x + (p2.x - p0.x) * k, p1.y + (p2.y - p0.y) * k);
        let c2 = Point::new(p2.x - (p3.x - p1.x) * k, p2.y - (p3.y - p1.y) * k);
        commands.push(PathCommand::CubicTo { c1, c2, to: p2 });
    }
    PathData { commands }
}

/// Line geometry closed down to `baseline_y` at the segment's last and first x.
pub fn area_path(points: &[ChartPoint], baseline_y: f32) -> PathData {
    let mut path = line_path(points);
    let (Some(first), Some(last)) = (points.first(), points.last()) else { return path };
    if path.is_empty() { return path; }
    path.commands.push(PathCommand::LineTo(Point::new(last.x, baseline_y)));
    path.commands.push(PathCommand::LineTo(Point::new(first.x, baseline_y)));
    path.commands.push(PathCommand::Close);
    path
}
