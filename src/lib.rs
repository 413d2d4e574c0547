//! # kdtree2d - 2-d Tree Spatial Index
//!
//! A Rust library providing a 2-d tree over points in the unit square, with
//! membership, axis-aligned range and nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental Inserts**: Points are added one at a time, no build step
//! - **Range Queries**: All points inside a rectangle, boundary included
//! - **Nearest Neighbor**: Branch-and-bound search pruned by node rectangles
//! - **Brute-force Reference**: [`PointSet`] answers the same queries by linear scan
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5))?;
//! tree.insert(Point::new(0.25, 0.25))?;
//! tree.insert(Point::new(0.75, 0.75))?;
//! tree.insert(Point::new(0.1, 0.9))?;
//! assert_eq!(tree.len(), 4);
//!
//! // Points inside [0, 0.6] x [0, 0.6]
//! let found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6)?);
//! assert_eq!(found.len(), 2);
//!
//! assert_eq!(tree.nearest(Point::new(0.9, 0.9)), Some(Point::new(0.75, 0.75)));
//! assert!(!tree.contains(Point::new(0.5, 0.6)));
//! # Ok::<(), kdtree2d::Error>(())
//! ```
//!
//! ## How It Works
//!
//! Each level of the tree splits the plane along one axis, alternating x and y
//! with depth. A node owns the rectangle left over by the splits above it, so a
//! query can skip any subtree whose rectangle misses the query region, or
//! whose rectangle is already farther away than the best point found so far.
//!
//! The tree is never rebalanced: inserting points sorted along an axis
//! produces a chain as deep as the number of points. Shuffle large inputs
//! before inserting them.

pub mod draw;
pub mod error;
pub mod io;
pub mod kdtree;
pub mod point;
pub mod point_set;
pub mod prelude;
pub mod rect;


pub use draw::{Canvas, Recorder};
pub use error::{Error, Result};
pub use kdtree::{Axis, KdTree};
pub use point::Point;
pub use point_set::PointSet;
pub use rect::Rect;
