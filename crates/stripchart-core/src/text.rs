// File: crates/stripchart-core/src/text.rs
// Summary: Text shaper/renderer on Skia textlayout; measures and draws scaled legend titles.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::TextExtent;
use crate::types::Rgb;

/// Pixel size of text drawn at scale 1.0.
pub const BASE_FONT_PX: f32 = 22.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, scale: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(BASE_FONT_PX * scale, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Box of `text` at `scale`: width of the longest line, ascent above the
    /// baseline and descent below it. Heights round down so stacked rows
    /// never outgrow the space they were scaled for.
    pub fn measure(&self, text: &str, scale: f32) -> TextExtent {
        let p = self.layout(text, scale, skia::Color::TRANSPARENT);
        let ascent = p.alphabetic_baseline();
        TextExtent {
            width: p.longest_line().ceil() as i32,
            height: ascent.floor() as i32,
            baseline: (p.height() - ascent).max(0.0).floor() as i32,
        }
    }

    /// Draw `text` with its baseline starting at `(x, y)`.
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, scale: f32, color: Rgb) {
        let mut p = self.layout(text, scale, color.to_skia());
        // Paragraph paints from its top-left corner.
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (x, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
