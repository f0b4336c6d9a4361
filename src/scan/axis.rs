use std::iter::FusedIterator;

/// Evenly spaced AMU positions from `start` to `stop` inclusive.
///
/// Cloning yields a fresh pass over the same values.
#[derive(Debug, Clone, PartialEq)]
pub struct AmuAxis {
    start: f64,
    stop: f64,
    count: usize,
    front: usize,
    back: usize,
}

impl AmuAxis {
    /// Axis of `count` samples spanning `[start, stop]`.
    pub fn new(start: f64, stop: f64, count: usize) -> Self {
        Self {
            start,
            stop,
            count,
            front: 0,
            back: count,
        }
    }

    /// Total number of samples on the axis, independent of iteration progress.
    pub fn sample_count(&self) -> usize {
        self.count
    }

    /// Spacing between neighbouring samples (0 for a single-sample axis).
    pub fn step(&self) -> f64 {
        if self.count > 1 {
            (self.stop - self.start) / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Value of sample `index`, or `None` past the end.
    pub fn value(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        if index + 1 == self.count && self.count > 1 {
            return Some(self.stop);
        }
        Some(self.start + index as f64 * self.step())
    }

    /// Index of the sample closest to `amu`, clamped into the axis range.
    pub fn nearest_index(&self, amu: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let step = self.step();
        if step == 0.0 || amu.is_nan() {
            return Some(0);
        }
        let position = ((amu - self.start) / step).round();
        Some(position.clamp(0.0, (self.count - 1) as f64) as usize)
    }
}

impl Iterator for AmuAxis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.value(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for AmuAxis {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.value(self.back)
    }
}

impl ExactSizeIterator for AmuAxis {}

impl FusedIterator for AmuAxis {}
