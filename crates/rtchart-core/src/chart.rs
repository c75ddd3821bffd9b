// File: crates/rtchart-core/src/chart.rs
// Summary: Chart engine; pure geometry pass plus the stateful wrapper that reacts to data, resize, theme and pointer input.

use std::borrow::Cow;

use crate::axis::{x_labels, y_labels, Axis, AxisLabel, Y_AXIS_TITLE};
use crate::draw::{DrawList, EmptyState, GapRect, Marker, SegmentShape, EMPTY_MESSAGE, MARKER_RADIUS};
use crate::gap::{segment, Segmentation};
use crate::geometry::{PlotRect, Point};
use crate::grid::{horizontal_lines, GridLine};
use crate::interaction::{HoverState, Interaction, PointerEvent};
use crate::reactive::{ChartHost, Notification, Recompute, Subscriptions};
use crate::sample::{is_normalized, normalize, normalize_raw, RawSample, Sample};
use crate::scale::{ChartPoint, Domain, ScaleMapper};
use crate::spline::{area_path, line_path};
use crate::theme::{Palette, ThemeDescriptor};
use crate::types::{ChartOptions, Y_LABELS};
use crate::view::ViewWindow;

/// Everything width- and data-dependent, recomputed from scratch each pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub plot: PlotRect,
    /// `None` when there is nothing to plot.
    pub scale: Option<ScaleMapper>,
    /// One per visible sample; hover hit-tests against these.
    pub points: Vec<ChartPoint>,
    /// Points the paths run through. Equal to `points` unless zoomed, when the
    /// nearest off-plot sample on each side is included.
    pub path_points: Vec<ChartPoint>,
    /// Indexes into `path_points`.
    pub segmentation: Segmentation,
    pub shapes: Vec<SegmentShape>,
    pub markers: Vec<Marker>,
    pub gaps: Vec<GapRect>,
    pub grid: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
}

impl Geometry {
    /// Lay out `samples` in a container `width` pixels wide. Unsorted input is
    /// normalized first. With a view window the time axis spans the window,
    /// the value axis fits the visible samples, and lines and gap bands run
    /// out to the window edges.
    pub fn compute(samples: &[Sample], width: f32, window: Option<&ViewWindow>, opts: &ChartOptions) -> Self {
        let samples: Cow<'_, [Sample]> = if is_normalized(samples) {
            Cow::Borrowed(samples)
        } else {
            Cow::Owned(normalize(samples))
        };
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let plot = PlotRect::from_container(width, opts.height, &opts.insets);

        // `context` extends `visible` by one neighbour per side while zoomed.
        let (visible, context, time) = match window {
            Some(w) => (w.visible_samples(&samples), w.context_samples(&samples), Some(w.visible)),
            None => (&samples[..], &samples[..], Domain::of_times(&samples)),
        };
        let scale = match time {
            Some(t) if !context.is_empty() => {
                // Inside an outage the values come from the samples on either side.
                let fit = if visible.is_empty() { context } else { visible };
                Some(ScaleMapper::with_time_domain(fit, t, &plot))
            }
            _ => None,
        };

        let points = scale.map(|s| s.map(visible)).unwrap_or_default();
        let path_points = scale.map(|s| s.map(context)).unwrap_or_default();
        let segmentation = segment(&path_points, opts.gap_threshold_ms);

        let mut shapes = Vec::with_capacity(segmentation.segments.len());
        let mut markers = Vec::new();
        for range in &segmentation.segments {
            let seg = &path_points[range.clone()];
            match seg {
                [] => {}
                [only] if time.is_some_and(|t| t.contains(only.timestamp_ms as f64)) => {
                    markers.push(Marker { center: Point::new(only.x, only.y), radius: MARKER_RADIUS })
                }
                [_] => {}
                _ => shapes.push(SegmentShape { line: line_path(seg), area: area_path(seg, plot.bottom) }),
            }
        }

        // Bands are clipped to the plot; paths are clipped by the renderer.
        let gaps = segmentation
            .regions
            .iter()
            .filter_map(|r| {
                let x0 = r.x_start.max(plot.left);
                let x1 = (r.x_start + r.width).min(plot.right);
                (x1 >= x0).then(|| GapRect { x: x0, y: plot.top, width: x1 - x0, height: plot.height() })
            })
            .collect();

        let x = x_labels(scale.as_ref().map(|s| &s.time), &plot, width, &opts.insets, opts.x_tick_spacing, opts.offset());
        let y = y_labels(scale.as_ref().map(|s| &s.value), &plot);

        tracing::debug!(
            samples = visible.len(),
            breaks = segmentation.breaks.len(),
            width,
            "geometry recomputed"
        );

        Self {
            width,
            plot,
            scale,
            points,
            path_points,
            segmentation,
            shapes,
            markers,
            gaps,
            grid: horizontal_lines(&plot, Y_LABELS),
            x_labels: x,
            y_labels: y,
        }
    }

    /// True only when there are no samples at all. A zoom window that lands
    /// inside an outage still has a scale and labels.
    pub fn is_empty(&self) -> bool { self.scale.is_none() }
}

/// Stateful chart: owns samples, container width, theme, view window and hover.
///
/// Geometry follows `{samples, width, window}`; the palette follows the theme.
/// Each is recomputed only when one of its own inputs actually changes.
pub struct Chart {
    opts: ChartOptions,
    samples: Vec<Sample>,
    theme: ThemeDescriptor,
    window: Option<ViewWindow>,
    geometry: Geometry,
    palette: Palette,
    interaction: Interaction,
    subscriptions: Subscriptions,
    geometry_passes: u64,
    palette_passes: u64,
}

impl Chart {
    pub fn new(opts: ChartOptions, theme: ThemeDescriptor) -> Self {
        let geometry = Geometry::compute(&[], 0.0, None, &opts);
        Self {
            palette: Palette::from_theme(&theme),
            opts,
            samples: Vec::new(),
            theme,
            window: None,
            geometry,
            interaction: Interaction::new(),
            subscriptions: Subscriptions::default(),
            geometry_passes: 1,
            palette_passes: 1,
        }
    }

    pub fn options(&self) -> &ChartOptions { &self.opts }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn width(&self) -> f32 { self.geometry.width }
    pub fn theme(&self) -> &ThemeDescriptor { &self.theme }
    pub fn geometry(&self) -> &Geometry { &self.geometry }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn hover(&self) -> &HoverState { self.interaction.state() }
    pub fn view(&self) -> Option<&ViewWindow> { self.window.as_ref() }
    pub fn is_mounted(&self) -> bool { self.subscriptions.is_active() }

    /// Number of geometry passes so far (including the initial one).
    pub fn geometry_passes(&self) -> u64 { self.geometry_passes }
    /// Number of palette passes so far (including the initial one).
    pub fn palette_passes(&self) -> u64 { self.palette_passes }

    /// Replace the sample set. Resets zoom and hover.
    pub fn set_samples(&mut self, samples: &[Sample]) {
        self.samples = normalize(samples);
        self.window = ViewWindow::from_samples(&self.samples);
        self.recompute_geometry(self.geometry.width);
    }

    /// Replace the sample set from wire records; unparsable records are skipped.
    pub fn set_raw_samples(&mut self, raw: &[RawSample]) {
        self.samples = normalize_raw(raw);
        self.window = ViewWindow::from_samples(&self.samples);
        self.recompute_geometry(self.geometry.width);
    }

    /// Returns true when the width changed and geometry was rebuilt.
    pub fn resize(&mut self, width: f32) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width == self.geometry.width {
            return false;
        }
        self.recompute_geometry(width);
        true
    }

    /// Returns true when the theme changed and the palette was rebuilt.
    /// Geometry is left untouched.
    pub fn set_theme(&mut self, theme: ThemeDescriptor) -> bool {
        if theme == self.theme {
            return false;
        }
        self.theme = theme;
        self.palette = Palette::from_theme(&self.theme);
        self.palette_passes += 1;
        tracing::debug!(dark = theme.dark, "palette recomputed");
        true
    }

    /// Measure the container, read the theme and subscribe to both signals.
    pub fn mount(&mut self, host: &mut dyn ChartHost) {
        if self.subscriptions.is_active() {
            self.subscriptions.release(host);
        }
        self.resize(host.container_width());
        self.set_theme(host.theme());
        self.subscriptions = Subscriptions::acquire(host);
    }

    /// Release both subscriptions.
    pub fn unmount(&mut self, host: &mut dyn ChartHost) {
        self.subscriptions.release(host);
        self.interaction.reset();
    }

    /// Apply a host notification, recomputing only what it invalidates.
    pub fn notify(&mut self, n: Notification) -> Recompute {
        match n {
            Notification::Resized(w) if self.resize(w) => Recompute::Geometry,
            Notification::ThemeChanged(t) if self.set_theme(t) => Recompute::Palette,
            _ => Recompute::Nothing,
        }
    }

    /// Feed one pointer event. Returns true when the hover state changed.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        self.interaction.handle(event, &self.geometry.points, self.geometry.width, &self.opts)
    }

    pub fn zoom_in(&mut self) { self.update_window(ViewWindow::zoom_in); }
    pub fn zoom_out(&mut self) { self.update_window(ViewWindow::zoom_out); }
    pub fn pan_left(&mut self) { self.update_window(ViewWindow::pan_left); }
    pub fn pan_right(&mut self) { self.update_window(ViewWindow::pan_right); }
    pub fn reset_view(&mut self) { self.update_window(ViewWindow::reset); }

    /// Drag-pan by `dx` pixels.
    pub fn pan_by_pixels(&mut self, dx: f32) {
        let plot_w = self.geometry.plot.width() as f64;
        self.update_window(|w| w.pan_by_pixels(dx as f64, plot_w));
    }

    /// Drawing instructions for the current state.
    pub fn draw_list(&self) -> DrawList {
        let g = &self.geometry;
        let empty = g.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            center: Point::new(
                (g.plot.left + g.plot.right) * 0.5,
                g.plot.center_y(),
            ),
        });
        DrawList {
            width: g.width,
            height: self.opts.height,
            plot: g.plot,
            grid: g.grid.clone(),
            gaps: g.gaps.clone(),
            shapes: g.shapes.clone(),
            markers: g.markers.clone(),
            x_axis: Axis { title: None, labels: g.x_labels.clone() },
            y_axis: Axis { title: Some(Y_AXIS_TITLE.to_string()), labels: g.y_labels.clone() },
            tooltip: self.interaction.tooltip(&self.opts),
            empty,
            palette: self.palette.clone(),
        }
    }

    fn update_window(&mut self, f: impl FnOnce(&mut ViewWindow)) {
        let Some(mut w) = self.window else { return };
        f(&mut w);
        if Some(w) != self.window {
            self.window = Some(w);
            self.recompute_geometry(self.geometry.width);
        }
    }

    fn recompute_geometry(&mut self, width: f32) {
        self.geometry = Geometry::compute(&self.samples, width, self.window.as_ref(), &self.opts);
        self.geometry_passes += 1;
        // Hover referred to points that no longer exist.
        self.interaction.reset();
    }
}
