// File: crates/rtchart-render-skia/src/text.rs
// Summary: Label painter on Skia textlayout; aligns paragraphs to an axis anchor.

use rtchart_core::axis::Anchor;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct LabelPainter {
    fonts: FontCollection,
}

impl Default for LabelPainter {
    fn default() -> Self { Self::new() }
}

impl LabelPainter {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Roboto", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"]);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, placed against `x` per `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        // Paragraphs paint from their top-left corner.
        p.paint(canvas, (left, y - size * 0.8));
    }
}
