// File: crates/rtchart-render-skia/src/lib.rs
// Summary: Headless Skia CPU raster host that paints an rtchart `DrawList` to PNG.

pub mod text;

use anyhow::Result;
use rtchart_core::axis::Anchor;
use rtchart_core::draw::{DrawList, AXIS_FONT_SIZE};
use rtchart_core::grid::GRID_DASH;
use rtchart_core::spline::{PathCommand, PathData};
use rtchart_core::theme::Rgba;
use skia_safe as skia;

pub use text::LabelPainter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Device pixel ratio applied to the whole canvas.
    pub scale: f32,
    pub background: Rgba,
    /// Off for byte-stable output across platforms with different fonts.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: Rgba::rgb(255, 255, 255), draw_text: true }
    }
}

impl RasterOptions {
    pub fn for_dark() -> Self {
        Self { background: Rgba::rgb(0x12, 0x12, 0x14), ..Self::default() }
    }

    /// Pixel size of the surface for `draw`.
    pub fn surface_size(&self, draw: &DrawList) -> (i32, i32) {
        let s = if self.scale.is_finite() && self.scale > 0.0 { self.scale } else { 1.0 };
        let w = (draw.width * s).ceil().max(1.0) as i32;
        let h = (draw.height * s).ceil().max(1.0) as i32;
        (w, h)
    }
}

pub fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn to_skia_path(data: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &data.commands {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathCommand::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathCommand::CubicTo { c1, c2, to } => { path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (to.x, to.y)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn rasterize(draw: &DrawList, opts: &RasterOptions) -> Result<skia::Surface> {
    let (w, h) = opts.surface_size(draw);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(color(opts.background));
    canvas.save();
    canvas.scale((w as f32 / draw.width.max(1.0), h as f32 / draw.height.max(1.0)));
    paint(canvas, draw, opts);
    canvas.restore();
    Ok(surface)
}

/// Render to in-memory PNG bytes.
pub fn render_png_bytes(draw: &DrawList, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(draw, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    tracing::debug!(width = image.width(), height = image.height(), bytes = data.as_bytes().len(), "rasterized chart");
    Ok(data.as_bytes().to_vec())
}

/// Render to unpremultiplied RGBA8 rows. Returns `(width, height, pixels)`.
pub fn render_rgba(draw: &DrawList, opts: &RasterOptions) -> Result<(u32, u32, Vec<u8>)> {
    let mut surface = rasterize(draw, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((w as u32, h as u32, pixels))
}

/// Render and write a PNG file, creating parent directories.
pub fn render_png(draw: &DrawList, opts: &RasterOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_png_bytes(draw, opts)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

fn paint(canvas: &skia::Canvas, draw: &DrawList, opts: &RasterOptions) {
    let p = &draw.palette;

    // ---- grid ----------------------------------------------------------------
    let mut grid = skia::Paint::default();
    grid.set_anti_alias(true);
    grid.set_style(skia::paint::Style::Stroke);
    grid.set_stroke_width(1.0);
    grid.set_color(color(p.grid));
    grid.set_path_effect(skia::PathEffect::dash(&GRID_DASH, 0.0));
    for g in &draw.grid {
        canvas.draw_line((g.x1, g.y), (g.x2, g.y), &grid);
    }

    // ---- gap bands -----------------------------------------------------------
    let mut gap = skia::Paint::default();
    gap.set_style(skia::paint::Style::Fill);
    gap.set_color(color(p.gap_fill));
    for r in &draw.gaps {
        canvas.draw_rect(skia::Rect::from_xywh(r.x, r.y, r.width, r.height), &gap);
    }

    // ---- series --------------------------------------------------------------
    let colors: Vec<skia::Color> = p.area.iter().map(|s| color(s.color)).collect();
    let offsets: Vec<f32> = p.area.iter().map(|s| s.offset).collect();
    let shader = skia::Shader::linear_gradient(
        ((0.0, draw.plot.top), (0.0, draw.plot.bottom)),
        colors.as_slice(),
        offsets.as_slice(),
        skia::TileMode::Clamp,
        None,
        None,
    );
    let mut area = skia::Paint::default();
    area.set_anti_alias(true);
    area.set_style(skia::paint::Style::Fill);
    match shader {
        Some(s) => { area.set_shader(s); }
        None => { area.set_color(color(p.line.with_opacity(0.25))); }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color(p.line));

    // Zoomed paths run past the plot edges to the nearest off-window sample.
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(draw.plot.left, draw.plot.top, draw.plot.right, draw.plot.bottom),
        None,
        Some(true),
    );
    for s in &draw.shapes {
        canvas.draw_path(&to_skia_path(&s.area), &area);
        canvas.draw_path(&to_skia_path(&s.line), &stroke);
    }

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(color(p.marker));
    for m in &draw.markers {
        canvas.draw_circle((m.center.x, m.center.y), m.radius, &dot);
    }
    canvas.restore();

    // ---- labels --------------------------------------------------------------
    let labels = opts.draw_text.then(LabelPainter::new);
    if let Some(tp) = &labels {
        let text = color(p.axis_text);
        for l in &draw.x_axis.labels {
            tp.draw(canvas, &l.text, l.position, draw.plot.bottom + 18.0, AXIS_FONT_SIZE, text, l.anchor);
        }
        for l in &draw.y_axis.labels {
            tp.draw(canvas, &l.text, draw.plot.left - 8.0, l.position + 4.0, AXIS_FONT_SIZE, text, l.anchor);
        }
        if let Some(title) = &draw.y_axis.title {
            let cy = (draw.plot.top + draw.plot.bottom) * 0.5;
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(12.0, cy)));
            tp.draw(canvas, title, 12.0, cy, 12.0, text, Anchor::Middle);
            canvas.restore();
        }
        if let Some(e) = &draw.empty {
            tp.draw(canvas, &e.message, e.center.x, e.center.y, 13.0, text, Anchor::Middle);
        }
    }

    // ---- tooltip -------------------------------------------------------------
    if let Some(t) = draw.tooltip.as_ref().filter(|t| t.visible) {
        let mut anchor = skia::Paint::default();
        anchor.set_anti_alias(true);
        anchor.set_color(color(p.line));
        canvas.draw_circle((t.anchor.x, t.anchor.y), 4.0, &anchor);

        let rect = skia::Rect::from_xywh(t.position.left, t.position.top, t.width, t.height);
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(color(p.tooltip_background));
        canvas.draw_round_rect(rect, 6.0, 6.0, &bg);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(color(p.tooltip_border));
        canvas.draw_round_rect(rect, 6.0, 6.0, &border);

        if let Some(tp) = &labels {
            let fg = color(p.tooltip_text);
            let x = t.position.left + 10.0;
            tp.draw(canvas, &t.datetime_text, x, t.position.top + 20.0, 11.0, fg, Anchor::Start);
            tp.draw(canvas, &t.value_text, x, t.position.top + 40.0, 13.0, fg, Anchor::Start);
        }
    }
}
