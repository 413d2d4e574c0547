//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdtree2d::prelude::*;
//! ```

pub use crate::{Axis, Canvas, Error, KdTree, Point, PointSet, Rect};
