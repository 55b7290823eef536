// File: crates/stripchart-core/src/scale.rs
// Summary: Sliding time (X) and clamped value (Y) scales mapping data to canvas pixels.

use crate::axis::Range;
use crate::geometry::clamp;

/// Horizontal scale for a window of `width` time units ending at the newest
/// sample: `start` maps to pixel 0, `start + width` to `canvas_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: f64,
    pub width: f64,
    pub canvas_width: f32,
}

impl TimeScale {
    /// Scale whose right edge sits at `newest`.
    pub fn ending_at(newest: f64, width: f64, canvas_width: i32) -> Self {
        Self { start: newest - width, width, canvas_width: canvas_width as f32 }
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        (((x - self.start) / self.width) as f32) * self.canvas_width
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.start + (px / self.canvas_width) as f64 * self.width
    }

    /// True when `x` falls inside the visible window.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x
    }
}

/// Vertical scale; values outside `range` are clamped to its edges, larger
/// values plot higher (smaller pixel y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub range: Range,
    pub canvas_height: f32,
}

impl ValueScale {
    pub fn new(range: Range, canvas_height: i32) -> Self {
        Self { range, canvas_height: canvas_height as f32 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let cropped = clamp(v, self.range.min, self.range.max);
        let weight = ((cropped - self.range.min) / self.range.width()) as f32;
        self.canvas_height - self.canvas_height * weight
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let weight = ((self.canvas_height - py) / self.canvas_height) as f64;
        self.range.min + weight * self.range.width()
    }
}
