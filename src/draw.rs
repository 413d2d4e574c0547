//! Drawing sink for visualising an index.
//!
//! The index only pushes primitives into a [`Canvas`]; it never reads anything
//! back, so drawing cannot influence query results. `()` is a canvas that
//! discards everything.

use crate::kdtree::Axis;
use crate::point::Point;

/// Receives the primitives of a drawing
pub trait Canvas {
    /// A stored point
    fn point(&mut self, p: Point);

    /// A splitting segment; `axis` is the axis the owning node compares on
    fn segment(&mut self, from: Point, to: Point, axis: Axis);
}

impl Canvas for () {
    fn point(&mut self, _p: Point) {}

    fn segment(&mut self, _from: Point, _to: Point, _axis: Axis) {}
}

/// Canvas that keeps every primitive it receives
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Points in the order they were drawn
    pub points: Vec<Point>,
    /// Segments as `(from, to, axis)`, in the order they were drawn
    pub segments: Vec<(Point, Point, Axis)>,
}

impl Recorder {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Recorder {
    fn point(&mut self, p: Point) {
        self.points.push(p);
    }

    fn segment(&mut self, from: Point, to: Point, axis: Axis) {
        self.segments.push((from, to, axis));
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn point(&mut self, p: Point) {
        (**self).point(p);
    }

    fn segment(&mut self, from: Point, to: Point, axis: Axis) {
        (**self).segment(from, to, axis);
    }
}
