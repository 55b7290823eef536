// File: crates/stripchart-core/src/types.rs
// Summary: Shared types and constants (default sizes, ranges, capacity, colors).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 512;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 512;
/// Hard cap on buffered samples, independent of the time window.
pub const DEFAULT_CAPACITY: usize = 5000;
/// Default visible time window `[min, max)`.
pub const DEFAULT_X_RANGE: (f64, f64) = (0.0, 2.0);
/// Default value range.
pub const DEFAULT_Y_RANGE: (f64, f64) = (-1.0, 1.0);

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_skia(self) -> skia_safe::Color {
        skia_safe::Color::from_rgb(self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
