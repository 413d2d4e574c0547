//! Immutable axis-aligned rectangle.

use std::fmt;

use crate::error::{Error, Result};
use crate::point::Point;

/// Axis-aligned rectangle: xmin, ymin, xmax, ymax
///
/// Bounds are inclusive, so a degenerate rectangle (`xmin == xmax`) is a
/// segment and still contains the points on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The unit square `[0, 1] x [0, 1]`, the region owned by a tree's root
    pub const UNIT: Self = Self { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 };

    /// Creates a rectangle from its bounds `(xmin, ymin, xmax, ymax)`
    ///
    /// # Errors
    /// [`Error::InvalidRect`] when `xmin > xmax`, `ymin > ymax` or any bound is NaN.
    ///
    /// # Example
    /// ```
    /// use kdtree2d::Rect;
    /// assert!(Rect::new(0.0, 0.0, 0.5, 0.5).is_ok());
    /// assert!(Rect::new(0.6, 0.0, 0.5, 0.5).is_err());
    /// ```
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        // written so that NaN fails too
        if !(xmin <= xmax && ymin <= ymax) {
            return Err(Error::InvalidRect { xmin, ymin, xmax, ymax });
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Bounds must already satisfy the invariant
    pub(crate) const fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Left bound
    #[inline]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom bound
    #[inline]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right bound
    #[inline]
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top bound
    #[inline]
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Extent along x; zero for a vertical segment
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether `p` lies inside or on the boundary
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x() >= self.xmin && p.x() <= self.xmax && p.y() >= self.ymin && p.y() <= self.ymax
    }

    /// Whether the two rectangles share at least one point (touching edges count)
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared Euclidean distance from `p` to the closest point of the rectangle
    ///
    /// Zero when `p` is inside or on the boundary. Lower-bounds the distance
    /// from `p` to anything the rectangle contains.
    #[inline]
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = axis_distance(p.x(), self.xmin, self.xmax);
        let dy = axis_distance(p.y(), self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Euclidean distance from `p` to the closest point of the rectangle
    pub fn distance_to(&self, p: Point) -> f64 {
        self.distance_squared_to(p).sqrt()
    }
}

/// Get distance along an axis
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Rect {
        Rect::new(xmin, ymin, xmax, ymax).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(matches!(Rect::new(0.5, 0.0, 0.4, 1.0), Err(Error::InvalidRect { .. })));
        assert!(matches!(Rect::new(0.0, 0.5, 1.0, 0.4), Err(Error::InvalidRect { .. })));
        assert!(matches!(Rect::new(f64::NAN, 0.0, 1.0, 1.0), Err(Error::InvalidRect { .. })));
    }

    #[test]
    fn test_new_accepts_degenerate() {
        let r = rect(0.5, 0.5, 0.5, 0.5);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
        assert!(r.contains(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let r = rect(0.0, 0.0, 0.6, 0.6);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(0.6, 0.3)));
        assert!(r.contains(Point::new(0.6, 0.6)));
        assert!(!r.contains(Point::new(0.61, 0.3)));
        assert!(!r.contains(Point::new(0.3, -0.01)));
    }

    #[test]
    fn test_intersects() {
        let a = rect(0.0, 0.0, 0.5, 0.5);
        assert!(a.intersects(&rect(0.25, 0.25, 0.75, 0.75)));
        // shared edge and shared corner
        assert!(a.intersects(&rect(0.5, 0.0, 1.0, 0.5)));
        assert!(a.intersects(&rect(0.5, 0.5, 1.0, 1.0)));
        // containment either way
        assert!(a.intersects(&rect(0.1, 0.1, 0.2, 0.2)));
        assert!(rect(0.1, 0.1, 0.2, 0.2).intersects(&a));
        assert!(!a.intersects(&rect(0.51, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&rect(0.0, 0.6, 0.5, 1.0)));
    }

    #[test]
    fn test_distance_squared_to() {
        let r = rect(0.25, 0.25, 0.75, 0.75);
        // inside and on the boundary
        assert_eq!(r.distance_squared_to(Point::new(0.5, 0.5)), 0.0);
        assert_eq!(r.distance_squared_to(Point::new(0.25, 0.6)), 0.0);
        // beside an edge
        assert_eq!(r.distance_squared_to(Point::new(1.0, 0.5)), 0.0625);
        assert_eq!(r.distance_squared_to(Point::new(0.5, 0.0)), 0.0625);
        // beyond a corner
        assert_eq!(r.distance_squared_to(Point::new(0.0, 0.0)), 0.125);
        assert!((r.distance_to(Point::new(1.05, 1.15)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distance_lower_bounds_contained_points() {
        let r = rect(0.2, 0.4, 0.3, 0.9);
        let q = Point::new(0.9, 0.1);
        for &(x, y) in &[(0.2, 0.4), (0.3, 0.4), (0.25, 0.5), (0.3, 0.9)] {
            assert!(r.distance_squared_to(q) <= q.distance_squared_to(Point::new(x, y)));
        }
    }

    #[test]
    fn test_unit_square() {
        assert_eq!(Rect::default(), Rect::UNIT);
        assert_eq!(Rect::UNIT, rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(Rect::UNIT.to_string(), "[0, 1] x [0, 1]");
    }
}
