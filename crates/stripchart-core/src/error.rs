// File: crates/stripchart-core/src/error.rs
// Summary: Error type shared by the chart engine, static graph and raster surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid range: min {min} must be finite and below max {max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("sample count must be greater than zero, got {0}")]
    InvalidDivisions(usize),
    #[error("at least one channel is required")]
    NoChannels,
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },
    #[error("canvas height {canvas_height} leaves no room for legend rows")]
    LegendTooSmall { canvas_height: i32 },
    #[error("failed to encode frame: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
