// File: crates/stripchart-core/src/render.rs
// Summary: Maps buffered samples to canvas pixels and draws per-channel polylines plus the reference line.

use crate::axis::{AxisStyle, Range};
use crate::buffer::TimeWindowBuffer;
use crate::geometry::PointF;
use crate::scale::{TimeScale, ValueScale};
use crate::surface::Surface;
use crate::types::Rgb;

/// Stateless polyline renderer for the scrolling chart.
#[derive(Clone, Copy, Debug)]
pub struct ChartRenderer {
    pub thickness: f32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self { thickness: 1.0 }
    }
}

impl ChartRenderer {
    /// Scales for the current canvas; `None` when the buffer is empty.
    pub fn scales<const N: usize>(
        buffer: &TimeWindowBuffer<N>,
        y_range: Range,
        width: i32,
        height: i32,
    ) -> Option<(TimeScale, ValueScale)> {
        let newest = buffer.back()?;
        let x = TimeScale::ending_at(newest.x, buffer.window_width(), width);
        Some((x, ValueScale::new(y_range, height)))
    }

    /// Pixel polyline for `channel`, newest sample first.
    ///
    /// The walk stops at the first sample left of the window. That sample is
    /// not plotted at its own position; the segment towards it is cut where it
    /// crosses `x = 0` instead. Coincident pixel columns leave the cut out.
    pub fn trace<const N: usize>(
        buffer: &TimeWindowBuffer<N>,
        channel: usize,
        x: &TimeScale,
        y: &ValueScale,
    ) -> Vec<PointF> {
        let mut points: Vec<PointF> = Vec::with_capacity(buffer.len());
        for sample in buffer.iter().rev() {
            let px = x.to_px(sample.x);
            let py = y.to_px(sample.value(channel));
            if x.contains(sample.x) {
                points.push((px, py));
                continue;
            }
            if let Some(&(prev_x, prev_y)) = points.last() {
                let run = (px - prev_x).abs();
                if run > 0.0 {
                    let weight = prev_x / run;
                    points.push((0.0, (py - prev_y) * weight + prev_y));
                }
            }
            break;
        }
        points
    }

    /// Horizontal line across the vertical center of the canvas.
    pub fn draw_reference_line<S: Surface>(&self, surface: &mut S, color: Rgb) {
        let mid = (surface.height() / 2) as f32;
        let right = surface.width() as f32;
        surface.draw_line((0.0, mid), (right, mid), color, self.thickness);
    }

    /// Draw every channel of `buffer` in its style color.
    pub fn draw_channels<S: Surface, const N: usize>(
        &self,
        surface: &mut S,
        buffer: &TimeWindowBuffer<N>,
        styles: &[AxisStyle],
        y_range: Range,
    ) {
        let Some((x, y)) = Self::scales(buffer, y_range, surface.width(), surface.height()) else {
            return;
        };
        for (channel, style) in styles.iter().enumerate().take(N) {
            let points = Self::trace(buffer, channel, &x, &y);
            surface.draw_polyline(&points, style.color, self.thickness);
        }
    }
}
