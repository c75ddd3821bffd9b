// File: crates/rtchart-core/src/draw.rs
// Summary: Declarative drawing instructions handed to the host renderer, plus an SVG serializer.
// Notes:
// - The engine decides what to draw; pixels are the host's business. `to_svg`
//   is a reference host for consumers that accept SVG.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::axis::{Anchor, Axis};
use crate::geometry::{PlotRect, Point};
use crate::grid::{GridLine, GRID_DASH};
use crate::spline::{fmt_px, PathData};
use crate::theme::{Palette, Rgba};
use crate::interaction::Tooltip;

pub const EMPTY_MESSAGE: &str = "No response time data";
pub const MARKER_RADIUS: f32 = 3.0;
pub const AXIS_FONT_SIZE: f32 = 11.0;

/// Line and filled area for one gap-free segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentShape {
    pub line: PathData,
    pub area: PathData,
}

/// Dot for a point that has no neighbour to connect to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: Point,
    pub radius: f32,
}

/// "No data" band spanning the plot's full height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmptyState {
    pub message: String,
    pub center: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub plot: PlotRect,
    pub grid: Vec<GridLine>,
    pub gaps: Vec<GapRect>,
    pub shapes: Vec<SegmentShape>,
    pub markers: Vec<Marker>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub tooltip: Option<Tooltip>,
    pub empty: Option<EmptyState>,
    pub palette: Palette,
}

fn anchor_attr(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn rgb(c: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn opacity(c: Rgba) -> String {
    fmt_px(c.opacity())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl DrawList {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out).expect("writing to a String cannot fail");
        out
    }

    /// Stream the SVG document into any `fmt::Write` sink.
    pub fn write_svg<W: Write>(&self, out: &mut W) -> std::fmt::Result {
        let p = &self.palette;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_px(self.width),
            h = fmt_px(self.height)
        )?;
        writeln!(out, r#"<defs><linearGradient id="rtchart-area" x1="0" y1="0" x2="0" y2="1">"#)?;
        for stop in &p.area {
            writeln!(
                out,
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                fmt_px(stop.offset),
                rgb(stop.color),
                opacity(stop.color)
            )?;
        }
        writeln!(out, "</linearGradient>")?;
        writeln!(
            out,
            r#"<clipPath id="rtchart-plot"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
            fmt_px(self.plot.left),
            fmt_px(self.plot.top),
            fmt_px(self.plot.width()),
            fmt_px(self.plot.height())
        )?;

        for g in &self.grid {
            writeln!(
                out,
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-dasharray="{} {}"/>"#,
                fmt_px(g.x1),
                fmt_px(g.x2),
                rgb(p.grid),
                fmt_px(GRID_DASH[0]),
                fmt_px(GRID_DASH[1]),
                y = fmt_px(g.y)
            )?;
        }
        for r in &self.gaps {
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                fmt_px(r.x),
                fmt_px(r.y),
                fmt_px(r.width),
                fmt_px(r.height),
                rgb(p.gap_fill),
                opacity(p.gap_fill)
            )?;
        }
        writeln!(out, r#"<g clip-path="url(#rtchart-plot)">"#)?;
        for s in &self.shapes {
            writeln!(out, r#"<path d="{}" fill="url(#rtchart-area)" stroke="none"/>"#, s.area)?;
            writeln!(out, r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#, s.line, rgb(p.line))?;
        }
        for m in &self.markers {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                fmt_px(m.center.x),
                fmt_px(m.center.y),
                fmt_px(m.radius),
                rgb(p.marker)
            )?;
        }
        writeln!(out, "</g>")?;

        let label_y = self.plot.bottom + 18.0;
        for l in &self.x_axis.labels {
            writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
                fmt_px(l.position),
                fmt_px(label_y),
                anchor_attr(l.anchor),
                fmt_px(AXIS_FONT_SIZE),
                rgb(p.axis_text),
                escape(&l.text)
            )?;
        }
        let label_x = self.plot.left - 8.0;
        for l in &self.y_axis.labels {
            writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
                fmt_px(label_x),
                fmt_px(l.position + 4.0),
                anchor_attr(l.anchor),
                fmt_px(AXIS_FONT_SIZE),
                rgb(p.axis_text),
                escape(&l.text)
            )?;
        }
        if let Some(title) = &self.y_axis.title {
            let cy = (self.plot.top + self.plot.bottom) * 0.5;
            writeln!(
                out,
                r#"<text x="12" y="{cy}" transform="rotate(-90 12 {cy})" text-anchor="middle" font-size="12" fill="{}">{}</text>"#,
                rgb(p.axis_text),
                escape(title),
                cy = fmt_px(cy)
            )?;
        }

        if let Some(e) = &self.empty {
            writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle" font-size="13" fill="{}">{}</text>"#,
                fmt_px(e.center.x),
                fmt_px(e.center.y),
                rgb(p.axis_text),
                escape(&e.message)
            )?;
        }

        if let Some(t) = self.tooltip.as_ref().filter(|t| t.visible) {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="4" fill="{}"/>"#,
                fmt_px(t.anchor.x),
                fmt_px(t.anchor.y),
                rgb(p.line)
            )?;
            writeln!(
                out,
                r#"<g transform="translate({} {})"><rect width="{}" height="{}" rx="6" fill="{}" stroke="{}"/><text x="10" y="20" font-size="11" fill="{}">{}</text><text x="10" y="40" font-size="13" fill="{}">{}</text></g>"#,
                fmt_px(t.position.left),
                fmt_px(t.position.top),
                fmt_px(t.width),
                fmt_px(t.height),
                rgb(p.tooltip_background),
                rgb(p.tooltip_border),
                rgb(p.tooltip_text),
                escape(&t.datetime_text),
                rgb(p.tooltip_text),
                escape(&t.value_text)
            )?;
        }
        writeln!(out, "</svg>")
    }
}
