// File: crates/stripchart-core/src/recording.rs
// Summary: Surface that records draw calls instead of rasterizing, with fixed text metrics.

use crate::error::{ChartError, Result};
use crate::geometry::{PointF, RectI32};
use crate::surface::{Surface, TextExtent};
use crate::types::Rgb;

/// Text metrics at scale 1.0 used by `RecordingSurface::measure_text`.
pub const GLYPH_WIDTH: f32 = 10.0;
pub const GLYPH_HEIGHT: f32 = 20.0;
pub const GLYPH_DESCENT: f32 = 6.0;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    Line { from: PointF, to: PointF, color: Rgb, thickness: f32 },
    FillRect { rect: RectI32, color: Rgb },
    Text { text: String, origin: PointF, scale: f32, color: Rgb },
    Blit { left: i32, top: i32, width: i32, height: i32 },
}

/// Headless surface: keeps the geometry of every primitive in call order.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Line segments drawn so far, in call order.
    pub fn lines(&self) -> impl Iterator<Item = (PointF, PointF, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    /// Line segments drawn in `color`.
    pub fn lines_in(&self, color: Rgb) -> Vec<(PointF, PointF)> {
        self.lines().filter(|&(_, _, c)| c == color).map(|(a, b, _)| (a, b)).collect()
    }
}

impl Surface for RecordingSurface {
    fn allocate(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSize { width, height });
        }
        Ok(Self { width, height, ops: Vec::new() })
    }

    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }

    fn clear(&mut self, color: Rgb) {
        // A clear wipes whatever was drawn before it.
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgb, thickness: f32) {
        self.ops.push(DrawOp::Line { from, to, color, thickness });
    }

    fn fill_rect(&mut self, rect: RectI32, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: PointF, scale: f32, color: Rgb) {
        self.ops.push(DrawOp::Text { text: text.to_owned(), origin, scale, color });
    }

    fn measure_text(&self, text: &str, scale: f32) -> TextExtent {
        let chars = text.chars().count() as f32;
        TextExtent {
            width: (GLYPH_WIDTH * scale * chars).floor() as i32,
            height: (GLYPH_HEIGHT * scale).floor() as i32,
            baseline: (GLYPH_DESCENT * scale).floor() as i32,
        }
    }

    fn blit(&mut self, src: &Self, left: i32, top: i32) {
        self.ops.push(DrawOp::Blit { left, top, width: src.width, height: src.height });
    }
}
