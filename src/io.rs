//! Loading points from text.
//!
//! The format is a point count followed by that many `x y` pairs, all
//! separated by whitespace. Line breaks carry no meaning:
//!
//! ```text
//! 3
//! 0.5 0.5
//! 0.25 0.25
//! 0.75 0.75
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::iter::Enumerate;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::error::{Error, Result};
use crate::point::Point;

/// Caps the up-front allocation so a bogus count cannot reserve gigabytes
const MAX_PREALLOCATED_POINTS: usize = 1 << 20;

type Tokens<'a> = Enumerate<SplitWhitespace<'a>>;

/// Parses a point count followed by that many coordinate pairs
///
/// Coordinates only have to be finite; whether they fit an index is checked on insert.
///
/// # Errors
/// [`Error::MissingCount`] for blank input, [`Error::Parse`] for a token that
/// is not a number, [`Error::Truncated`] or [`Error::TrailingData`] when the
/// pairs disagree with the count, and [`Error::InvalidPoint`] for a non-finite
/// coordinate.
///
/// # Example
/// ```
/// use kdtree2d::{io::parse_points, Point};
/// let points = parse_points("2\n0.1 0.2\n0.3 0.4\n").unwrap();
/// assert_eq!(points, vec![Point::new(0.1, 0.2), Point::new(0.3, 0.4)]);
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut tokens = input.split_whitespace().enumerate();

    let (index, token) = tokens.next().ok_or(Error::MissingCount)?;
    let expected: usize = token.parse().map_err(|_| Error::Parse {
        index,
        token: token.to_owned(),
        expected: "point count",
    })?;

    let mut points = Vec::with_capacity(expected.min(MAX_PREALLOCATED_POINTS));
    while points.len() < expected {
        let x = next_coordinate(&mut tokens, expected, points.len())?;
        let y = next_coordinate(&mut tokens, expected, points.len())?;
        points.push(Point::try_new(x, y)?);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(Error::TrailingData { count: trailing });
    }

    debug!(count = points.len(), "parsed points");
    Ok(points)
}

fn next_coordinate(tokens: &mut Tokens<'_>, expected: usize, found: usize) -> Result<f64> {
    let (index, token) = tokens.next().ok_or(Error::Truncated { expected, found })?;
    token.parse().map_err(|_| Error::Parse {
        index,
        token: token.to_owned(),
        expected: "coordinate",
    })
}

/// Reads all of `reader` and parses it with [`parse_points`]
///
/// # Errors
/// [`Error::Io`] when reading fails or the input is not UTF-8, otherwise
/// whatever [`parse_points`] reports.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>> {
    let input = std::io::read_to_string(reader)?;
    parse_points(&input)
}

/// Opens the file at `path` and parses it with [`parse_points`]
///
/// # Errors
/// [`Error::Io`] when the file cannot be opened or read, otherwise whatever
/// [`parse_points`] reports.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading points");
    read_points(BufReader::new(File::open(path)?))
}
