// File: crates/stripchart-core/src/buffer.rs
// Summary: Capacity-bounded, time-ordered sample buffer with bulk-prefix eviction.

use std::collections::VecDeque;

use crate::sample::Sample;
use crate::types::DEFAULT_CAPACITY;

/// Ordered samples covering the visible time window plus one boundary sample.
///
/// Contract: appended samples carry non-decreasing `x`. This is assumed, not
/// checked. Entries leave the buffer only as a contiguous oldest prefix.
#[derive(Clone, Debug)]
pub struct TimeWindowBuffer<const N: usize> {
    samples: VecDeque<Sample<N>>,
    capacity: usize,
    window_width: f64,
}

impl<const N: usize> TimeWindowBuffer<N> {
    pub fn new(window_width: f64) -> Self {
        Self::with_capacity(window_width, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(window_width: f64, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            window_width,
        }
    }

    /// Append `sample` and drop everything that scrolled out of the window,
    /// keeping one sample past the left edge for interpolation.
    pub fn append(&mut self, sample: Sample<N>) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        self.evict_older_than(sample.x - self.window_width);
    }

    /// Remove the prefix `[0, i-1)` where `i` is the first entry with
    /// `x >= threshold`. The entry at `i-1` survives as the boundary sample.
    pub fn evict_older_than(&mut self, threshold: f64) {
        // Ordered by x, so the in-window entries form a suffix.
        let first_inside = self.samples.partition_point(|s| s.x < threshold);
        if first_inside > 1 {
            let evicted = first_inside - 1;
            self.samples.drain(..evicted);
            log::trace!("evicted {evicted} samples older than {threshold}");
        }
    }

    /// Change the window width and re-evict against the newest sample.
    pub fn set_window_width(&mut self, window_width: f64) {
        self.window_width = window_width;
        if let Some(newest) = self.samples.back().map(|s| s.x) {
            self.evict_older_than(newest - window_width);
        }
    }

    pub fn window_width(&self) -> f64 { self.window_width }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample<N>> { self.samples.get(index) }
    pub fn front(&self) -> Option<&Sample<N>> { self.samples.front() }
    pub fn back(&self) -> Option<&Sample<N>> { self.samples.back() }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample<N>> + ExactSizeIterator {
        self.samples.iter()
    }

    /// Left edge of the visible window, `newest.x - window_width`.
    pub fn start_time(&self) -> Option<f64> {
        self.back().map(|s| s.x - self.window_width)
    }
}
