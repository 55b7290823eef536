// File: crates/stripchart-core/src/graph.rs
// Summary: Static (non-scrolling) line graph over a pull-style sample source.

use crate::axis::{AxisStyles, Range};
use crate::error::{ChartError, Result};
use crate::scale::ValueScale;
use crate::surface::{RasterSurface, Surface};
use crate::theme::Theme;

/// Frame width of the static graph; the height follows the range aspect.
pub const FRAME_WIDTH: i32 = 512;
/// Upper bound on the derived frame height for very flat ranges.
pub const MAX_FRAME_HEIGHT: i32 = 4096;
const CENTER_LINE_THICKNESS: f32 = 2.0;

/// Fixed-length data the static graph pulls from.
pub trait SampleSource {
    fn channel_count(&self) -> usize;
    fn len(&self, channel: usize) -> usize;
    fn value_at(&self, channel: usize, index: usize) -> f64;
}

/// Samples `i` of every channel plot at `x = i * width / divisions`.
pub struct LineGraph<S: Surface = RasterSurface> {
    x_range: Range,
    y_range: Range,
    divisions: usize,
    theme: Theme,
    source: Option<Box<dyn SampleSource>>,
    frame: S,
}

fn frame_size(x: Range, y: Range) -> (i32, i32) {
    let aspect = x.width() / y.width();
    let height = (FRAME_WIDTH as f64 / aspect).round().clamp(1.0, MAX_FRAME_HEIGHT as f64);
    (FRAME_WIDTH, height as i32)
}

impl<S: Surface> LineGraph<S> {
    /// Ranges `[-1, 1]` on both axes, 100 divisions.
    pub fn new() -> Result<Self> {
        let unit = Range::new(-1.0, 1.0)?;
        let (w, h) = frame_size(unit, unit);
        let theme = Theme::graph();
        let mut frame = S::allocate(w, h)?;
        frame.clear(theme.background);
        Ok(Self { x_range: unit, y_range: unit, divisions: 100, theme, source: None, frame })
    }

    /// Reconfigure ranges and the number of x divisions. Invalid input is
    /// rejected and the graph keeps its previous configuration.
    pub fn set_range(&mut self, x: (f64, f64), y: (f64, f64), divisions: usize) -> Result<()> {
        let x_range = Range::new(x.0, x.1)?;
        let y_range = Range::new(y.0, y.1)?;
        if divisions == 0 {
            return Err(ChartError::InvalidDivisions(divisions));
        }
        let (w, h) = frame_size(x_range, y_range);
        let mut frame = S::allocate(w, h)?;
        frame.clear(self.theme.background);
        self.x_range = x_range;
        self.y_range = y_range;
        self.divisions = divisions;
        self.frame = frame;
        Ok(())
    }

    pub fn set_source(&mut self, source: Box<dyn SampleSource>) {
        self.source = Some(source);
    }

    /// Repaint the frame from the source. Without a source the blank frame is
    /// returned as is.
    pub fn draw(&mut self) -> Result<&S> {
        let Some(source) = self.source.as_deref() else {
            return Ok(&self.frame);
        };
        let frame = &mut self.frame;
        let (w, h) = (frame.width() as f32, frame.height() as f32);
        frame.clear(self.theme.background);
        frame.draw_line((0.0, h / 2.0), (w, h / 2.0), self.theme.reference_line, CENTER_LINE_THICKNESS);
        frame.draw_line((w / 2.0, 0.0), (w / 2.0, h), self.theme.reference_line, CENTER_LINE_THICKNESS);

        let y = ValueScale::new(self.y_range, frame.height());
        let dx = w / self.divisions as f32;
        let styles = AxisStyles::with_defaults(source.channel_count(), &self.theme.palette);
        for (channel, style) in styles.as_slice().iter().enumerate() {
            let points: Vec<(f32, f32)> = (0..source.len(channel))
                .map(|i| (i as f32 * dx, y.to_px(source.value_at(channel, i))))
                .collect();
            frame.draw_polyline(&points, style.color, 1.0);
        }
        Ok(&self.frame)
    }

    pub fn frame(&self) -> &S { &self.frame }
    pub fn x_range(&self) -> Range { self.x_range }
    pub fn y_range(&self) -> Range { self.y_range }
    pub fn divisions(&self) -> usize { self.divisions }
}
