// File: crates/stripchart-core/src/chart.rs
// Summary: Scrolling chart engine; owns buffer, styles, legend and canvas and repaints only when dirty.

use crate::axis::{AxisStyles, Range};
use crate::buffer::TimeWindowBuffer;
use crate::error::{ChartError, Result};
use crate::legend::{LegendBuilder, LegendLayout, LegendOptions};
use crate::render::ChartRenderer;
use crate::sample::Sample;
use crate::surface::{RasterSurface, Surface};
use crate::theme::Theme;
use crate::types::{Rgb, DEFAULT_CAPACITY, DEFAULT_X_RANGE, DEFAULT_Y_RANGE, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    /// Only the width matters: the window slides with the newest sample.
    pub x_range: Range,
    pub y_range: Range,
    pub capacity: usize,
    pub legend: bool,
    pub theme: Theme,
    pub legend_options: LegendOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_range: Range { min: DEFAULT_X_RANGE.0, max: DEFAULT_X_RANGE.1 },
            y_range: Range { min: DEFAULT_Y_RANGE.0, max: DEFAULT_Y_RANGE.1 },
            capacity: DEFAULT_CAPACITY,
            legend: false,
            theme: Theme::default(),
            legend_options: LegendOptions::default(),
        }
    }
}

/// Whether the canvas reflects the current data and configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Clean,
    Dirty,
}

/// Legend overlay plus whether it still matches styles and canvas height.
struct Legend<S> {
    layout: LegendLayout,
    overlay: S,
    stale: bool,
}

/// Scrolling line chart over `N` channels.
pub struct ChartEngine<const N: usize, S: Surface = RasterSurface> {
    buffer: TimeWindowBuffer<N>,
    styles: AxisStyles,
    x_range: Range,
    y_range: Range,
    theme: Theme,
    renderer: ChartRenderer,
    legend_builder: LegendBuilder,
    legend: Option<Legend<S>>,
    canvas: S,
    state: FrameState,
}

impl<const N: usize, S: Surface> ChartEngine<N, S> {
    pub fn new() -> Result<Self> {
        Self::with_options(ChartOptions::default())
    }

    pub fn with_options(opts: ChartOptions) -> Result<Self> {
        if N == 0 {
            return Err(ChartError::NoChannels);
        }
        let x_range = Range::new(opts.x_range.min, opts.x_range.max)?;
        let y_range = Range::new(opts.y_range.min, opts.y_range.max)?;
        let canvas = S::allocate(opts.width, opts.height)?;
        let mut engine = Self {
            buffer: TimeWindowBuffer::with_capacity(x_range.width(), opts.capacity),
            styles: AxisStyles::with_defaults(N, &opts.theme.palette),
            x_range,
            y_range,
            theme: opts.theme,
            renderer: ChartRenderer::default(),
            legend_builder: LegendBuilder::new(opts.legend_options),
            legend: None,
            canvas,
            state: FrameState::Dirty,
        };
        if opts.legend {
            engine.set_enable_legend(true)?;
        }
        Ok(engine)
    }

    /// Reallocate the canvas. An invalid size leaves the previous canvas in
    /// place. A legend that no longer fits the new height is turned off.
    pub fn set_window_size(&mut self, width: i32, height: i32) -> Result<()> {
        self.canvas = S::allocate(width, height)?;
        log::debug!("canvas resized to {width}x{height}");
        self.mark_dirty();
        if self.legend.is_some() {
            match self.legend_builder.build(self.styles.as_slice(), &self.canvas, &self.theme) {
                Ok((layout, overlay)) => self.legend = Some(Legend { layout, overlay, stale: false }),
                Err(e @ ChartError::LegendTooSmall { .. }) => {
                    log::warn!("legend disabled after resize: {e}");
                    self.legend = None;
                }
                Err(e) => {
                    self.legend = None;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Set the visible time window to `max - min`.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<()> {
        let range = Range::new(min, max).inspect_err(|e| log::warn!("x range rejected: {e}"))?;
        self.x_range = range;
        self.buffer.set_window_width(range.width());
        self.mark_dirty();
        Ok(())
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.y_range = Range::new(min, max).inspect_err(|e| log::warn!("y range rejected: {e}"))?;
        self.mark_dirty();
        Ok(())
    }

    /// # Panics
    /// If `channel >= N`.
    pub fn set_line_color(&mut self, channel: usize, color: impl Into<Rgb>) {
        self.styles.set_color(channel, color.into());
        self.mark_legend_stale();
        self.mark_dirty();
    }

    /// # Panics
    /// If `channel >= N`.
    pub fn set_axis_title(&mut self, channel: usize, title: impl Into<String>) {
        self.styles.set_title(channel, title);
        self.mark_legend_stale();
        self.mark_dirty();
    }

    /// Enabling lays out the legend right away; disabling drops it.
    pub fn set_enable_legend(&mut self, enable: bool) -> Result<()> {
        if enable {
            let (layout, overlay) = self.legend_builder.build(self.styles.as_slice(), &self.canvas, &self.theme)?;
            self.legend = Some(Legend { layout, overlay, stale: false });
        } else {
            self.legend = None;
        }
        self.mark_dirty();
        Ok(())
    }

    pub fn push(&mut self, sample: Sample<N>) {
        self.buffer.append(sample);
        self.mark_dirty();
    }

    /// Current frame, repainted only if something changed since the last call.
    pub fn draw(&mut self) -> Result<&S> {
        if self.state == FrameState::Clean {
            return Ok(&self.canvas);
        }

        if let Some(legend) = self.legend.as_mut().filter(|l| l.stale) {
            let (layout, overlay) = self.legend_builder.build(self.styles.as_slice(), &self.canvas, &self.theme)?;
            *legend = Legend { layout, overlay, stale: false };
        }

        self.canvas.clear(self.theme.background);
        self.renderer.draw_reference_line(&mut self.canvas, self.theme.reference_line);
        self.renderer.draw_channels(&mut self.canvas, &self.buffer, self.styles.as_slice(), self.y_range);

        if let Some(legend) = &self.legend {
            let (left, top) = self.legend_builder.options.inset;
            self.canvas.blit(&legend.overlay, left, top);
        }

        log::trace!("repainted {} samples x {N} channels", self.buffer.len());
        self.state = FrameState::Clean;
        Ok(&self.canvas)
    }

    pub fn canvas(&self) -> &S { &self.canvas }
    pub fn buffer(&self) -> &TimeWindowBuffer<N> { &self.buffer }
    pub fn styles(&self) -> &AxisStyles { &self.styles }
    pub fn x_range(&self) -> Range { self.x_range }
    pub fn y_range(&self) -> Range { self.y_range }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn state(&self) -> FrameState { self.state }
    pub fn is_dirty(&self) -> bool { self.state == FrameState::Dirty }
    pub fn legend(&self) -> Option<&S> { self.legend.as_ref().map(|l| &l.overlay) }
    pub fn legend_layout(&self) -> Option<&LegendLayout> { self.legend.as_ref().map(|l| &l.layout) }

    fn mark_dirty(&mut self) {
        self.state = FrameState::Dirty;
    }

    fn mark_legend_stale(&mut self) {
        if let Some(legend) = &mut self.legend {
            legend.stale = true;
        }
    }
}
