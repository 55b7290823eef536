// File: crates/stripchart-core/src/surface.rs
// Summary: Drawing backend seam (`Surface`) and its Skia CPU raster implementation.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::{PointF, RectI32};
use crate::text::TextShaper;
use crate::types::Rgb;

/// Measured text box: `height` above the baseline, `baseline` below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
    pub baseline: i32,
}

impl TextExtent {
    /// Full line height, ascent plus descent.
    pub const fn line_height(&self) -> i32 {
        self.height + self.baseline
    }
}

/// Pixel canvas primitives the chart renders through.
pub trait Surface: Sized {
    fn allocate(width: i32, height: i32) -> Result<Self>;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self, color: Rgb);
    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgb, thickness: f32);
    fn fill_rect(&mut self, rect: RectI32, color: Rgb);
    /// Draw `text` with the left end of its baseline at `origin`.
    fn draw_text(&mut self, text: &str, origin: PointF, scale: f32, color: Rgb);
    fn measure_text(&self, text: &str, scale: f32) -> TextExtent;
    /// Copy `src` into this surface with its top-left corner at `(left, top)`,
    /// clipped to the destination.
    fn blit(&mut self, src: &Self, left: i32, top: i32);

    /// Connect consecutive `points` with line segments.
    fn draw_polyline(&mut self, points: &[PointF], color: Rgb, thickness: f32) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color, thickness);
        }
    }
}

/// RGBA8888 pixel buffer drawn with Skia's CPU rasterizer.
pub struct RasterSurface {
    info: skia::ImageInfo,
    pixels: Vec<u8>,
    shaper: TextShaper,
}

fn raster_canvas<'a>(info: &skia::ImageInfo, pixels: &'a mut [u8]) -> Option<skia::OwnedCanvas<'a>> {
    skia::Canvas::from_raster_direct(info, pixels, info.min_row_bytes(), None)
}

fn stroke(color: Rgb, thickness: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color.to_skia());
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(thickness);
    paint
}

impl RasterSurface {
    pub fn row_bytes(&self) -> usize {
        self.info.min_row_bytes()
    }

    /// Raw RGBA8888 rows, `row_bytes()` apart.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let at = y as usize * self.row_bytes() + x as usize * 4;
        let px = &self.pixels[at..at + 4];
        Some(Rgb::new(px[0], px[1], px[2]))
    }

    /// Returns (pixels, width, height, stride).
    pub fn to_rgba8(&self) -> (Vec<u8>, u32, u32, usize) {
        (self.pixels.clone(), self.width() as u32, self.height() as u32, self.row_bytes())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let data = skia::Data::new_copy(&self.pixels);
        let image = skia::images::raster_from_data(&self.info, data, self.row_bytes())
            .ok_or_else(|| ChartError::Encode("failed to wrap pixels as image".into()))?;
        #[allow(deprecated)]
        let png = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("encode PNG failed".into()))?;
        Ok(png.as_bytes().to_vec())
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for RasterSurface {
    fn allocate(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidSize { width, height });
        }
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut pixels = vec![0u8; info.min_row_bytes() * height as usize];
        if raster_canvas(&info, &mut pixels).is_none() {
            return Err(ChartError::SurfaceAllocation { width, height });
        }
        log::debug!("allocated {width}x{height} raster surface");
        Ok(Self { info, pixels, shaper: TextShaper::new() })
    }

    fn width(&self) -> i32 {
        self.info.width()
    }

    fn height(&self) -> i32 {
        self.info.height()
    }

    fn clear(&mut self, color: Rgb) {
        if let Some(canvas) = raster_canvas(&self.info, &mut self.pixels) {
            canvas.clear(color.to_skia());
        }
    }

    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgb, thickness: f32) {
        if let Some(canvas) = raster_canvas(&self.info, &mut self.pixels) {
            canvas.draw_line(from, to, &stroke(color, thickness));
        }
    }

    fn draw_polyline(&mut self, points: &[PointF], color: Rgb, thickness: f32) {
        let Some((&first, rest)) = points.split_first() else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        if let Some(canvas) = raster_canvas(&self.info, &mut self.pixels) {
            canvas.draw_path(&path, &stroke(color, thickness));
        }
    }

    fn fill_rect(&mut self, rect: RectI32, color: Rgb) {
        let mut paint = skia::Paint::default();
        paint.set_color(color.to_skia());
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        if let Some(canvas) = raster_canvas(&self.info, &mut self.pixels) {
            canvas.draw_rect(rect.to_skia(), &paint);
        }
    }

    fn draw_text(&mut self, text: &str, origin: PointF, scale: f32, color: Rgb) {
        let Self { info, pixels, shaper } = self;
        if let Some(canvas) = raster_canvas(info, pixels) {
            shaper.draw_baseline(&canvas, text, origin.0, origin.1, scale, color);
        }
    }

    fn measure_text(&self, text: &str, scale: f32) -> TextExtent {
        self.shaper.measure(text, scale)
    }

    fn blit(&mut self, src: &Self, left: i32, top: i32) {
        if let Some(canvas) = raster_canvas(&self.info, &mut self.pixels) {
            if !canvas.write_pixels(&src.info, &src.pixels, src.row_bytes(), (left, top)) {
                log::warn!("blit of {}x{} at ({left}, {top}) copied nothing", src.width(), src.height());
            }
        }
    }
}
