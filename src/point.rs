//! 2D point used for positions, movement deltas and drag endpoints.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or vector) in surface-local coordinates.
///
/// Plain `Copy` value: every clone is an independent copy, so storing one in
/// a snapshot never aliases agent state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, also used as "no movement".
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Component-wise difference `self - origin`.
    #[inline]
    pub fn delta(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// True when both components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Larger of the two absolute components (Chebyshev length).
    #[inline]
    pub fn abs_max_axis(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    /// Overwrite both components in place.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.delta(rhs)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
