// File: crates/stripchart-core/src/lib.rs
// Summary: Core library entry point; exports the scrolling chart engine, static graph and drawing backends.

pub mod axis;
pub mod buffer;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod legend;
pub mod recording;
pub mod render;
pub mod sample;
pub mod scale;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{AxisStyle, AxisStyles, Range};
pub use buffer::TimeWindowBuffer;
pub use chart::{ChartEngine, ChartOptions, FrameState};
pub use error::{ChartError, Result};
pub use graph::{LineGraph, SampleSource};
pub use legend::{LegendBuilder, LegendLayout, LegendOptions};
pub use recording::{DrawOp, RecordingSurface};
pub use render::ChartRenderer;
pub use sample::Sample;
pub use surface::{RasterSurface, Surface, TextExtent};
pub use theme::Theme;
pub use types::Rgb;
