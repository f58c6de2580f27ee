//! Segdist: minimal distance between two line segments in 3D space
//!
//! This crate provides point, vector and plane primitives and a distance
//! engine that classifies how two segments relate (shared endpoint,
//! parallel, skew) and applies the matching distance formula.
//!
//! ```rust
//! use segdist::{DistanceCalculator, Point3D};
//!
//! let distance = DistanceCalculator::new(
//!     Point3D::new(0.0, 0.0, 0.0),
//!     Point3D::new(1.0, 0.0, 0.0),
//!     Point3D::new(0.0, 1.0, 0.0),
//!     Point3D::new(1.0, 1.0, 0.0),
//! )
//! .calculate()
//! .unwrap();
//!
//! assert!((distance - 1.0).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod distance;
pub mod geometry;
pub mod input;

// Re-export commonly used types
pub use coordinates::{Point3D, Vector3D};
pub use distance::{segment_distance, DistanceCalculator, DistanceReport, SegmentRelation};
pub use geometry::{Plane, Segment};

/// Which of the two input segments an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentLabel {
    /// The segment `[p1, p2]`
    First,
    /// The segment `[p3, p4]`
    Second,
}

impl std::fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentLabel::First => f.write_str("first"),
            SegmentLabel::Second => f.write_str("second"),
        }
    }
}

/// Main error type for the segdist library
#[derive(Debug, Error)]
pub enum SegdistError {
    #[error("The {segment} segment has zero length; distance is undefined")]
    DegenerateSegment { segment: SegmentLabel },

    #[error("Cannot normalize a null vector")]
    NullVector,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for segdist operations
pub type Result<T> = std::result::Result<T, SegdistError>;
