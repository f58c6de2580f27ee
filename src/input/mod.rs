//! Reading segment endpoints from text
//!
//! The distance engine only ever sees valid points. This module turns user
//! text into points: one point per line, three whitespace-separated numbers.
//! The interactive reader re-prompts until it gets a valid line.

use std::io::{BufRead, Write};

use log::debug;

use crate::coordinates::Point3D;
use crate::{Result, SegdistError};

/// Message printed when a line cannot be parsed as a point
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numeric values.";

/// Parses `"x y z"` into a point
///
/// # Errors
///
/// [`SegdistError::InvalidInput`] unless the line holds exactly three finite
/// numbers.
///
/// # Examples
///
/// ```rust
/// use segdist::input::parse_point;
/// use segdist::Point3D;
///
/// assert_eq!(parse_point(" 1 -2.5  3e2 ").unwrap(), Point3D::new(1.0, -2.5, 300.0));
/// assert!(parse_point("1 two 3").is_err());
/// ```
pub fn parse_point(line: &str) -> Result<Point3D> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| SegdistError::InvalidInput(format!("'{}' is not a number", token)))
        })
        .collect::<Result<Vec<f64>>>()?;

    match values.as_slice() {
        [x, y, z] => Ok(Point3D::new(*x, *y, *z)),
        _ => Err(SegdistError::InvalidInput(format!(
            "expected 3 coordinates, got {}",
            values.len()
        ))),
    }
}

/// Builds a point from a flat coordinate slice `[x, y, z]`
pub fn point_from_slice(coords: &[f64]) -> Result<Point3D> {
    match coords {
        [x, y, z] if coords.iter().all(|v| v.is_finite()) => Ok(Point3D::new(*x, *y, *z)),
        [_, _, _] => Err(SegdistError::InvalidInput(
            "coordinates must be finite".to_string(),
        )),
        _ => Err(SegdistError::InvalidInput(format!(
            "expected 3 coordinates, got {}",
            coords.len()
        ))),
    }
}

/// Prompts for point number `index` until a valid line is read
///
/// The prompt goes to `out`, complaints about bad lines go to `err`.
///
/// # Errors
///
/// [`SegdistError::Io`] if a stream fails, or with kind `UnexpectedEof` if
/// input ends before a valid point is read.
pub fn read_point<R, W, E>(reader: &mut R, out: &mut W, err: &mut E, index: usize) -> Result<Point3D>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();

    loop {
        writeln!(out, "Enter coordinates for point {} (x y z): ", index)?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SegdistError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("input ended before point {} was entered", index),
            )));
        }

        match parse_point(&line) {
            Ok(point) => return Ok(point),
            Err(e) => {
                debug!("rejected input for point {}: {}", index, e);
                writeln!(err, "{}", INVALID_INPUT_MESSAGE)?;
            }
        }
    }
}

/// Reads the four endpoints `p1..p4` interactively
pub fn read_points<R, W, E>(reader: &mut R, out: &mut W, err: &mut E) -> Result<[Point3D; 4]>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    Ok([
        read_point(reader, out, err, 1)?,
        read_point(reader, out, err, 2)?,
        read_point(reader, out, err, 3)?,
        read_point(reader, out, err, 4)?,
    ])
}
