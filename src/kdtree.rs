//! 2-d tree over points in the unit square.
//!
//! Nodes are kept in a single arena (`Vec<Node>`) owned by the tree; child links
//! are arena indices. There are no parent links: traversals carry the split axis
//! (and depth where needed) alongside each node index on an explicit stack, so a
//! degenerate tree built from sorted input never exhausts the call stack.
//!
//! The split axis alternates with depth: x at even depths, y at odd depths.
//! Every node owns the rectangle implied by the comparisons on the path from the
//! root, and queries use those rectangles to skip whole subtrees.
//!
//! The tree is never rebalanced. Its shape is a pure function of insertion
//! order, so inserting points sorted along an axis yields a linked list of
//! height `len()`.

use tracing::{debug, trace};

use crate::draw::Canvas;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::rect::Rect;

/// Splitting axis of a tree level
#[expect(clippy::exhaustive_enums, reason = "a plane has exactly two axes")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compares x; the splitting line is vertical
    X,
    /// Compares y; the splitting line is horizontal
    Y,
}

impl Axis {
    /// Axis of the root level
    pub const ROOT: Self = Self::X;

    /// Axis used at `depth` (root at depth 0)
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// Axis of the level below
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    #[inline]
    fn key(self, p: Point) -> f64 {
        match self {
            Self::X => p.x(),
            Self::Y => p.y(),
        }
    }
}

pub(crate) type NodeId = usize;

/// Which child slot of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Left or bottom
    Lesser,
    /// Right or top
    Greater,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    /// Region owned by this subtree, fixed when the node is created
    pub(crate) rect: Rect,
    pub(crate) lesser: Option<NodeId>,
    pub(crate) greater: Option<NodeId>,
}

impl Node {
    #[inline]
    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Lesser => self.lesser,
            Side::Greater => self.greater,
        }
    }

    fn set_child(&mut self, side: Side, id: NodeId) {
        let slot = match side {
            Side::Lesser => &mut self.lesser,
            Side::Greater => &mut self.greater,
        };
        debug_assert!(slot.is_none(), "child links are set once");
        *slot = Some(id);
    }

    /// Region of the child slot on `side`: this node's rectangle cut at its own
    /// coordinate on `axis`
    fn child_rect(&self, axis: Axis, side: Side) -> Rect {
        let r = self.rect;
        let p = self.point;
        match (axis, side) {
            (Axis::X, Side::Lesser) => Rect::from_bounds(r.xmin(), r.ymin(), p.x(), r.ymax()),
            (Axis::X, Side::Greater) => Rect::from_bounds(p.x(), r.ymin(), r.xmax(), r.ymax()),
            (Axis::Y, Side::Lesser) => Rect::from_bounds(r.xmin(), r.ymin(), r.xmax(), p.y()),
            (Axis::Y, Side::Greater) => Rect::from_bounds(r.xmin(), p.y(), r.xmax(), r.ymax()),
        }
    }

    /// Splitting line through this node, clipped to its rectangle
    fn split_segment(&self, axis: Axis) -> (Point, Point) {
        let r = self.rect;
        let p = self.point;
        match axis {
            Axis::X => (Point::new(p.x(), r.ymin()), Point::new(p.x(), r.ymax())),
            Axis::Y => (Point::new(r.xmin(), p.y()), Point::new(r.xmax(), p.y())),
        }
    }
}

/// Outcome of comparing a point against one node
enum Step {
    Descend(Side),
    Found,
}

/// One step of the descent shared by `insert` and `contains`
///
/// Strictly smaller on the node's axis goes lesser, strictly greater goes
/// greater. A tie on the axis is a duplicate only when the whole point is
/// equal; any other tie goes greater. NaN equals nothing, so it never matches.
#[inline]
fn step(axis: Axis, point: Point, at: Point) -> Step {
    let key = axis.key(point);
    let node_key = axis.key(at);
    if key < node_key {
        Step::Descend(Side::Lesser)
    } else if key > node_key {
        Step::Descend(Side::Greater)
    } else if point == at {
        Step::Found
    } else {
        Step::Descend(Side::Greater)
    }
}

/// Rejects points that cannot be stored: non-finite or outside the unit square
pub(crate) fn validate(point: Point) -> Result<()> {
    let reason = if !point.is_finite() {
        "coordinates must be finite"
    } else if !Rect::UNIT.contains(point) {
        "point lies outside the unit square"
    } else {
        return Ok(());
    };
    debug!(x = point.x(), y = point.y(), reason, "rejected point");
    Err(Error::InvalidPoint { x: point.x(), y: point.y(), reason })
}

/// Best candidate of a nearest-neighbor search
#[derive(Clone, Copy, Debug)]
struct Champion {
    point: Point,
    distance_squared: f64,
}

impl Champion {
    fn new(point: Point, query: Point) -> Self {
        Self { point, distance_squared: point.distance_squared_to(query) }
    }

    /// Replaces the champion when `point` is strictly closer to `query`
    #[inline]
    fn challenge(&mut self, point: Point, query: Point) {
        let distance_squared = point.distance_squared_to(query);
        if distance_squared < self.distance_squared {
            *self = Self { point, distance_squared };
        }
    }
}

/// 2-d tree: a set of points in the unit square
///
/// # Example
/// ```
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.5, 0.5)).unwrap();
/// tree.insert(Point::new(0.25, 0.25)).unwrap();
/// tree.insert(Point::new(0.75, 0.75)).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(Point::new(0.25, 0.25)));
/// assert_eq!(tree.nearest(Point::new(0.9, 0.9)), Some(Point::new(0.75, 0.75)));
///
/// let mut found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6).unwrap());
/// found.sort_by(|a, b| a.x().total_cmp(&b.x()));
/// assert_eq!(found, vec![Point::new(0.25, 0.25), Point::new(0.5, 0.5)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    /// Node arena; a node's index never changes
    pub(crate) nodes: Vec<Node>,
    /// Arena index of the root; `None` when empty
    pub(crate) root: Option<NodeId>,
}

impl KdTree {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity), root: None }
    }

    /// Builds a tree by inserting `points` in order
    ///
    /// # Errors
    /// Stops at the first point [`KdTree::insert`] rejects.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let mut tree = Self::with_capacity(points.size_hint().0);
        for point in points {
            tree.insert(point)?;
        }
        Ok(tree)
    }

    /// Number of distinct points
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no point is stored
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.lesser.map(|child| (child, depth + 1)));
            stack.extend(node.greater.map(|child| (child, depth + 1)));
        }
        height
    }

    /// Stored points in the order they were first inserted
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|node| node.point)
    }

    /// Adds `point` to the set
    ///
    /// Inserting a point equal to a stored one overwrites it in place and
    /// leaves `len()` unchanged.
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] when `point` is not finite or lies outside the
    /// unit square. The tree is left untouched.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        validate(point)?;

        let Some(root) = self.root else {
            self.root = Some(self.push_node(point, Rect::UNIT, 0));
            return Ok(());
        };

        let mut current = root;
        let mut axis = Axis::ROOT;
        let mut depth = 0;
        loop {
            let node = &self.nodes[current];
            let side = match step(axis, point, node.point) {
                Step::Descend(side) => side,
                Step::Found => {
                    debug!(x = point.x(), y = point.y(), depth, "duplicate point absorbed");
                    self.nodes[current].point = point;
                    return Ok(());
                }
            };

            match node.child(side) {
                Some(child) => {
                    current = child;
                    axis = axis.next();
                    depth += 1;
                }
                None => {
                    let rect = node.child_rect(axis, side);
                    let id = self.push_node(point, rect, depth + 1);
                    self.nodes[current].set_child(side, id);
                    return Ok(());
                }
            }
        }
    }

    fn push_node(&mut self, point: Point, rect: Rect, depth: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { point, rect, lesser: None, greater: None });
        trace!(id, depth, x = point.x(), y = point.y(), "created node");
        id
    }

    /// Whether a point equal to `point` is stored
    ///
    /// A non-finite `point` is never stored, so the answer is `false`.
    pub fn contains(&self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        let mut next = self.root;
        let mut axis = Axis::ROOT;
        while let Some(id) = next {
            let node = &self.nodes[id];
            match step(axis, point, node.point) {
                Step::Found => return true,
                Step::Descend(side) => {
                    next = node.child(side);
                    axis = axis.next();
                }
            }
        }
        false
    }

    /// All stored points inside `rect`, boundary included, in no particular order
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results);
        results
    }

    /// Appends the stored points inside `rect` to `results` (not cleared first)
    pub fn range_into(&self, rect: &Rect, results: &mut Vec<Point>) {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if !node.rect.intersects(rect) {
                continue;
            }
            if rect.contains(node.point) {
                results.push(node.point);
            }
            stack.extend(node.greater);
            stack.extend(node.lesser);
        }
    }

    /// Stored point closest to `query`; `None` when the tree is empty
    ///
    /// A non-finite `query` also gives `None`, the same answer as an empty tree.
    /// Ties are resolved in favour of the point found first.
    pub fn nearest(&self, query: Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Like [`KdTree::nearest`], also returning the Euclidean distance
    ///
    /// Returns `None` for a non-finite `query`, as for an empty tree.
    pub fn nearest_with_distance(&self, query: Point) -> Option<(Point, f64)> {
        if !query.is_finite() {
            return None;
        }
        let root = self.root?;

        let mut champion = Champion::new(self.nodes[root].point, query);
        let mut stack = vec![(root, Axis::ROOT)];
        while let Some((id, axis)) = stack.pop() {
            let node = &self.nodes[id];
            // nothing in this subtree can beat the champion
            if node.rect.distance_squared_to(query) >= champion.distance_squared {
                continue;
            }
            champion.challenge(node.point, query);

            let (near, far) = if axis.key(query) < axis.key(node.point) {
                (node.lesser, node.greater)
            } else {
                (node.greater, node.lesser)
            };
            // far sits below near, so the near subtree is exhausted first
            stack.extend(far.map(|child| (child, axis.next())));
            stack.extend(near.map(|child| (child, axis.next())));
        }

        Some((champion.point, champion.distance_squared.sqrt()))
    }

    /// Sends every stored point and every splitting segment to `canvas`
    ///
    /// A node splitting on x draws the vertical line through its point across
    /// its rectangle; a node splitting on y draws the horizontal one.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let mut stack: Vec<(NodeId, Axis)> = self.root.map(|root| (root, Axis::ROOT)).into_iter().collect();
        while let Some((id, axis)) = stack.pop() {
            let node = &self.nodes[id];
            canvas.point(node.point);
            let (from, to) = node.split_segment(axis);
            canvas.segment(from, to, axis);
            stack.extend(node.greater.map(|child| (child, axis.next())));
            stack.extend(node.lesser.map(|child| (child, axis.next())));
        }
    }
}
