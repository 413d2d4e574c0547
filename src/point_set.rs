//! Brute-force point set with the same API as [`KdTree`](crate::KdTree).
//!
//! Every operation is a linear scan. It exists as a reference to check the
//! tree against and as a baseline for benchmarks.

use crate::draw::Canvas;
use crate::error::Result;
use crate::kdtree::validate;
use crate::point::Point;
use crate::rect::Rect;

/// Set of points in the unit square, stored flat
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    /// Distinct points in insertion order
    pub(crate) points: Vec<Point>,
}

impl PointSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point is stored
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Adds `point` unless an equal point is already stored
    ///
    /// # Errors
    /// [`Error::InvalidPoint`](crate::Error::InvalidPoint) when `point` is not
    /// finite or lies outside the unit square, as for
    /// [`KdTree::insert`](crate::KdTree::insert).
    pub fn insert(&mut self, point: Point) -> Result<()> {
        validate(point)?;
        match self.points.iter_mut().find(|stored| **stored == point) {
            Some(stored) => *stored = point,
            None => self.points.push(point),
        }
        Ok(())
    }

    /// Whether a point equal to `point` is stored; always `false` for a
    /// non-finite `point`
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// All points inside `rect`, boundary included, in insertion order
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        self.points.iter().copied().filter(|&p| rect.contains(p)).collect()
    }

    /// Closest point to `query`, first one wins ties; `None` when empty
    ///
    /// A non-finite `query` also gives `None`, the same answer as an empty set.
    pub fn nearest(&self, query: Point) -> Option<Point> {
        if !query.is_finite() {
            return None;
        }
        let mut best: Option<(Point, f64)> = None;
        for &point in &self.points {
            let distance_squared = point.distance_squared_to(query);
            if best.is_none_or(|(_, best_distance)| distance_squared < best_distance) {
                best = Some((point, distance_squared));
            }
        }
        best.map(|(point, _)| point)
    }

    /// Sends every point to `canvas`; a flat set has no splitting segments
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for &point in &self.points {
            canvas.point(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Recorder;
    use crate::error::Error;

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut set = PointSet::new();
        assert!(set.is_empty());
        set.insert(Point::new(0.5, 0.5)).unwrap();
        set.insert(Point::new(0.5, 0.5)).unwrap();
        set.insert(Point::new(0.5, 0.6)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Point::new(0.5, 0.6)));
        assert!(!set.contains(Point::new(0.6, 0.5)));
    }

    #[test]
    fn test_insert_rejects_outside_unit_square() {
        let mut set = PointSet::new();
        assert!(matches!(set.insert(Point::new(1.5, 0.5)), Err(Error::InvalidPoint { .. })));
        assert!(set.is_empty());
    }

    #[test]
    fn test_range_and_nearest() {
        let mut set = PointSet::new();
        for &(x, y) in &[(0.5, 0.5), (0.25, 0.25), (0.75, 0.75), (0.1, 0.9)] {
            set.insert(Point::new(x, y)).unwrap();
        }
        let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
        assert_eq!(set.range(&rect), vec![Point::new(0.5, 0.5), Point::new(0.25, 0.25)]);
        assert_eq!(set.nearest(Point::new(0.9, 0.9)), Some(Point::new(0.75, 0.75)));
        assert_eq!(PointSet::new().nearest(Point::new(0.9, 0.9)), None);
    }

    #[test]
    fn test_non_finite_queries() {
        let mut set = PointSet::new();
        set.insert(Point::new(0.5, 0.5)).unwrap();
        set.insert(Point::new(0.75, 0.25)).unwrap();
        for query in [
            Point::new(f64::NAN, 0.5),
            Point::new(0.75, f64::NAN),
            Point::new(f64::INFINITY, 0.25),
        ] {
            assert_eq!(set.nearest(query), None, "nearest({query}) on a non-empty set");
            assert!(!set.contains(query), "set claims to contain {query}");
        }
    }

    #[test]
    fn test_draw_emits_points_only() {
        let mut set = PointSet::new();
        set.insert(Point::new(0.2, 0.3)).unwrap();
        set.insert(Point::new(0.7, 0.1)).unwrap();
        let mut recorder = Recorder::new();
        set.draw(&mut recorder);
        assert_eq!(recorder.points, vec![Point::new(0.2, 0.3), Point::new(0.7, 0.1)]);
        assert!(recorder.segments.is_empty());
    }
}
