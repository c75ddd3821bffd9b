// File: crates/rtchart-core/src/lib.rs
// Summary: Core library entry point; exports the response-time chart engine's public API.

pub mod chart;
pub mod sample;
pub mod scale;
pub mod gap;
pub mod spline;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod format;
pub mod interaction;
pub mod view;
pub mod theme;
pub mod draw;
pub mod reactive;
pub mod error;

pub use chart::{Chart, Geometry};
pub use sample::{RawSample, Sample};
pub use scale::{ChartPoint, ScaleMapper};
pub use gap::{GapRegion, Segmentation};
pub use spline::PathData;
pub use axis::{Anchor, AxisLabel};
pub use types::{ChartOptions, Insets};
pub use interaction::{HoverState, PointerEvent, PointerKind, PointerSample, Tooltip, TooltipPosition};
pub use view::ViewWindow;
pub use theme::{Palette, Rgba, ThemeDescriptor};
pub use draw::DrawList;
pub use reactive::{ChartHost, Notification, Recompute, SubscriptionId, Topic};
pub use error::{ColorError, SampleError};
