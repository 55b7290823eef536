// File: crates/stripchart-core/src/axis.rs
// Summary: Value ranges and the per-channel style registry (line color + legend title).

use crate::error::{ChartError, Result};
use crate::types::Rgb;

/// `{min, max}` pair with `min < max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ChartError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    pub color: Rgb,
    pub title: String,
}

impl AxisStyle {
    pub fn new(color: Rgb, title: impl Into<String>) -> Self {
        Self { color, title: title.into() }
    }
}

/// One style per channel, indexed `0..len`.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyles {
    styles: Vec<AxisStyle>,
}

impl AxisStyles {
    /// Colors cycle through `palette`; titles default to `"axis: i"`.
    pub fn with_defaults(channels: usize, palette: &[Rgb]) -> Self {
        let styles = (0..channels)
            .map(|i| {
                let color = if palette.is_empty() { Rgb::BLACK } else { palette[i % palette.len()] };
                AxisStyle::new(color, format!("axis: {i}"))
            })
            .collect();
        Self { styles }
    }

    pub fn len(&self) -> usize { self.styles.len() }
    pub fn is_empty(&self) -> bool { self.styles.is_empty() }
    pub fn get(&self, channel: usize) -> Option<&AxisStyle> { self.styles.get(channel) }
    pub fn as_slice(&self) -> &[AxisStyle] { &self.styles }

    /// # Panics
    /// If `channel` is outside `0..len`.
    pub fn set_color(&mut self, channel: usize, color: Rgb) {
        self.checked_mut(channel).color = color;
    }

    /// # Panics
    /// If `channel` is outside `0..len`.
    pub fn set_title(&mut self, channel: usize, title: impl Into<String>) {
        self.checked_mut(channel).title = title.into();
    }

    fn checked_mut(&mut self, channel: usize) -> &mut AxisStyle {
        let channels = self.styles.len();
        match self.styles.get_mut(channel) {
            Some(style) => style,
            None => panic!("channel index {channel} out of range for {channels} channels"),
        }
    }
}
