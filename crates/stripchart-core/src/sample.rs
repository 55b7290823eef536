// File: crates/stripchart-core/src/sample.rs
// Summary: Timestamped multi-channel observation pushed into the scrolling chart.

/// One observation: timestamp `x` plus one value per channel.
///
/// Samples are plain values; the producer fills them in before pushing and
/// the chart keeps its own copy, so a buffered sample is never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<const N: usize> {
    pub x: f64,
    pub y: [f64; N],
}

impl<const N: usize> Sample<N> {
    pub const fn new(x: f64, y: [f64; N]) -> Self {
        Self { x, y }
    }

    /// Sample at time `x` with every channel at zero.
    pub const fn at(x: f64) -> Self {
        Self { x, y: [0.0; N] }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Fill channel values from `values`, in order. Extra values are ignored;
    /// missing ones keep their current value.
    pub fn with_values<I: IntoIterator<Item = f64>>(mut self, values: I) -> Self {
        for (slot, v) in self.y.iter_mut().zip(values) {
            *slot = v;
        }
        self
    }

    pub fn value(&self, channel: usize) -> f64 {
        self.y[channel]
    }
}

impl<const N: usize> Default for Sample<N> {
    fn default() -> Self {
        Self::at(0.0)
    }
}
