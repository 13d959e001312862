//! Interval arithmetic for ray parameter ranges.
//!
//! A closed interval [min, max] bounds the acceptable t-values of an
//! intersection query; narrowing the interval is how the scene scan keeps
//! only the closest hit.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Calculate the size (width) of the interval
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
