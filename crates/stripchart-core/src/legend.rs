// File: crates/stripchart-core/src/legend.rs
// Summary: Legend overlay layout (one global font scale fitted to a height budget) and painting.

use crate::axis::AxisStyle;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::surface::{Surface, TextExtent};
use crate::text::BASE_FONT_PX;
use crate::theme::Theme;

/// Legend spacing, in pixels unless noted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendOptions {
    pub margin_x: i32,
    pub margin_y: i32,
    pub icon_padding: i32,
    /// Legend height as a fraction of the canvas height.
    pub height_ratio: f32,
    /// Top-left corner of the overlay on the chart canvas.
    pub inset: (i32, i32),
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { margin_x: 3, margin_y: 3, icon_padding: 2, height_ratio: 0.10, inset: (5, 5) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch: RectI32,
    /// Left end of the title baseline.
    pub text_origin: (i32, i32),
    pub extent: TextExtent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub width: i32,
    pub height: i32,
    pub scale: f32,
    pub icon_size: i32,
    pub rows: Vec<LegendRow>,
    /// Row cursor after the last row, i.e. the height the rows actually use.
    pub content_height: i32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LegendBuilder {
    pub options: LegendOptions,
}

impl LegendBuilder {
    pub fn new(options: LegendOptions) -> Self {
        Self { options }
    }

    /// Lay out one row per style inside `ceil(canvas_height * height_ratio)`.
    pub fn layout<S: Surface>(&self, styles: &[AxisStyle], canvas_height: i32, measure: &S) -> Result<LegendLayout> {
        let o = &self.options;
        if styles.is_empty() {
            return Err(ChartError::NoChannels);
        }
        let rows = styles.len() as i32;
        let height = (canvas_height as f32 * o.height_ratio).ceil() as i32;
        let usable = height - o.margin_y * (rows + 1);

        let reference: i32 = styles.iter().map(|s| measure.measure_text(&s.title, 1.0).line_height()).sum();
        if usable <= 0 || reference <= 0 {
            return Err(ChartError::LegendTooSmall { canvas_height });
        }
        let scale = usable as f32 / reference as f32;
        if BASE_FONT_PX * scale < 1.0 {
            return Err(ChartError::LegendTooSmall { canvas_height });
        }

        let extents: Vec<TextExtent> = styles.iter().map(|s| measure.measure_text(&s.title, scale)).collect();
        let max_title_width = extents.iter().map(|e| e.width).max().unwrap_or(0);
        let first_extent = extents.first().copied().unwrap_or_default();
        let icon_size = (first_extent.line_height() - 2 * o.icon_padding).max(1);
        let width = icon_size + 2 * o.icon_padding + 2 * o.margin_x + max_title_width;
        log::trace!("legend scale {scale:.3} -> {width}x{height}");

        let text_left = o.icon_padding + icon_size + o.icon_padding + o.margin_x;
        let mut top = o.margin_y;
        let mut laid_out = Vec::with_capacity(extents.len());
        for extent in extents {
            laid_out.push(LegendRow {
                swatch: RectI32::from_ltwh(o.icon_padding, top + o.icon_padding, icon_size, icon_size),
                text_origin: (text_left, top + extent.height),
                extent,
            });
            top += extent.line_height() + o.margin_y;
        }

        Ok(LegendLayout { width, height, scale, icon_size, rows: laid_out, content_height: top })
    }

    /// Paint `layout` onto a fresh overlay surface.
    pub fn paint<S: Surface>(&self, layout: &LegendLayout, styles: &[AxisStyle], theme: &Theme) -> Result<S> {
        let mut overlay = S::allocate(layout.width, layout.height)?;
        overlay.clear(theme.legend_background);
        for (row, style) in layout.rows.iter().zip(styles) {
            overlay.fill_rect(row.swatch, style.color);
            let (x, y) = row.text_origin;
            overlay.draw_text(&style.title, (x as f32, y as f32), layout.scale, theme.legend_text);
        }
        Ok(overlay)
    }

    /// Layout and paint in one go.
    pub fn build<S: Surface>(&self, styles: &[AxisStyle], measure: &S, theme: &Theme) -> Result<(LegendLayout, S)> {
        let layout = self.layout(styles, measure.height(), measure)?;
        let overlay = self.paint(&layout, styles, theme)?;
        log::debug!("rebuilt {}x{} legend for {} channels", layout.width, layout.height, styles.len());
        Ok((layout, overlay))
    }
}
