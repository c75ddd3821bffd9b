// File: crates/rtchart-core/src/interaction.rs
// Summary: Hover state machine (Idle / Hovering) driven by normalized pointer samples; tooltip placement.

use serde::{Deserialize, Serialize};

use crate::format::{tooltip_datetime, tooltip_value};
use crate::geometry::Point;
use crate::scale::ChartPoint;
use crate::types::ChartOptions;

/// Which physical device produced a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// One pointer/touch position in container coordinates, already adapted by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub kind: PointerKind,
}

impl PointerSample {
    pub const fn mouse(x: f32, y: f32) -> Self { Self { x, y, kind: PointerKind::Mouse } }
    pub const fn touch(x: f32, y: f32) -> Self { Self { x, y, kind: PointerKind::Touch } }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer move or touch move.
    Move(PointerSample),
    /// Pointer leave or touch end.
    Leave,
}

/// Top-left corner of the tooltip box in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub left: f32,
    pub top: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub visible: bool,
    pub position: TooltipPosition,
    pub datetime_text: String,
    pub value_text: String,
    /// The hovered point, for a marker on the line.
    pub anchor: Point,
    pub width: f32,
    pub height: f32,
}

/// The engine's only mutable interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    pub point: Option<ChartPoint>,
    pub index: Option<usize>,
    pub tooltip_position: Option<TooltipPosition>,
    pub visible: bool,
}

impl HoverState {
    pub const IDLE: Self = Self { point: None, index: None, tooltip_position: None, visible: false };

    pub fn is_hovering(&self) -> bool { self.visible && self.point.is_some() }
}

/// Index and horizontal distance of the point nearest to `x`.
/// Ties keep the lowest index.
pub fn nearest_point(points: &[ChartPoint], x: f32) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = (p.x - x).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

pub fn hit_radius(kind: PointerKind, opts: &ChartOptions) -> f32 {
    match kind {
        PointerKind::Mouse => opts.pointer_hit_radius,
        PointerKind::Touch => opts.touch_hit_radius,
    }
}

/// Tooltip box above and to the right of the cursor, pulled back inside the
/// right edge and kept below `tooltip_min_top`. Narrow containers centre it
/// horizontally instead.
pub fn tooltip_position(cursor: Point, container_width: f32, opts: &ChartOptions) -> TooltipPosition {
    let w = opts.tooltip_width;
    let mut left = if container_width <= opts.narrow_viewport {
        (container_width - w) * 0.5
    } else {
        cursor.x + opts.tooltip_offset
    };
    let overflow = left + w - container_width;
    if overflow > 0.0 {
        left -= overflow;
    }
    let top = (cursor.y - opts.tooltip_offset - opts.tooltip_height).max(opts.tooltip_min_top);
    TooltipPosition { left: left.max(0.0), top }
}

/// Hover state machine over the current chart points.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    state: HoverState,
}

impl Interaction {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &HoverState { &self.state }

    /// Drop any hover, e.g. after the points were recomputed.
    pub fn reset(&mut self) { self.state = HoverState::IDLE; }

    /// Apply one event. Returns true when the visible state changed.
    pub fn handle(&mut self, event: PointerEvent, points: &[ChartPoint], container_width: f32, opts: &ChartOptions) -> bool {
        let next = match event {
            PointerEvent::Leave => HoverState::IDLE,
            PointerEvent::Move(sample) => match nearest_point(points, sample.x) {
                Some((index, d)) if d <= hit_radius(sample.kind, opts) => HoverState {
                    point: Some(points[index]),
                    index: Some(index),
                    tooltip_position: Some(tooltip_position(Point::new(sample.x, sample.y), container_width, opts)),
                    visible: true,
                },
                _ => HoverState::IDLE,
            },
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Tooltip payload while hovering.
    pub fn tooltip(&self, opts: &ChartOptions) -> Option<Tooltip> {
        let (point, position) = (self.state.point?, self.state.tooltip_position?);
        let offset = opts.offset();
        Some(Tooltip {
            visible: self.state.visible,
            position,
            datetime_text: tooltip_datetime(point.timestamp_ms, offset),
            value_text: tooltip_value(point.value),
            anchor: Point::new(point.x, point.y),
            width: opts.tooltip_width,
            height: opts.tooltip_height,
        })
    }
}
