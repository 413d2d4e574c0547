//! Immutable 2-D point.

use std::fmt;

use crate::error::{Error, Result};

/// A point in the plane
///
/// Equality is exact coordinate equality. Two points that differ only by
/// floating-point rounding are distinct.
///
/// # Example
/// ```
/// use kdtree2d::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance_squared_to(b), 25.0);
/// assert_eq!(a.distance_to(b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point without validating its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point, rejecting NaN and infinite coordinates
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] when either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        let point = Self::new(x, y);
        if !point.is_finite() {
            return Err(Error::InvalidPoint { x, y, reason: "coordinates must be finite" });
        }
        Ok(point)
    }

    /// Horizontal coordinate
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Whether both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to `other`
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance_to(&self, other: Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
