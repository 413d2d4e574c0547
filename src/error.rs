//! Error type shared by the index, the brute-force set and the point loader.

use thiserror::Error;

/// Errors reported by this crate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Rectangle bounds are inverted or not numbers
    #[error("invalid rectangle: xmin={xmin}, ymin={ymin}, xmax={xmax}, ymax={ymax}")]
    InvalidRect {
        /// Left bound
        xmin: f64,
        /// Bottom bound
        ymin: f64,
        /// Right bound
        xmax: f64,
        /// Top bound
        ymax: f64,
    },

    /// Point cannot be stored: non-finite or outside the unit square
    #[error("invalid point ({x}, {y}): {reason}")]
    InvalidPoint {
        /// Rejected x coordinate
        x: f64,
        /// Rejected y coordinate
        y: f64,
        /// Which check failed
        reason: &'static str,
    },

    /// Point data did not start with a count
    #[error("point data is empty: expected a point count")]
    MissingCount,

    /// A token in point data could not be parsed
    #[error("malformed point data: token {index} ({token:?}) is not a valid {expected}")]
    Parse {
        /// Zero-based position of the token in the input
        index: usize,
        /// The offending token
        token: String,
        /// What the token should have been
        expected: &'static str,
    },

    /// Point data ended before the announced number of points
    #[error("point data ended early: expected {expected} points, found {found}")]
    Truncated {
        /// Announced point count
        expected: usize,
        /// Complete points read before the input ran out
        found: usize,
    },

    /// Point data continued after the announced number of points
    #[error("point data has {count} unexpected trailing tokens")]
    TrailingData {
        /// Number of extra tokens
        count: usize,
    },

    /// Reading the input failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
