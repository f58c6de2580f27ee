//! Closed line segment between two points

use serde::{Deserialize, Serialize};

use crate::coordinates::{Point3D, Vector3D};

/// A closed line segment `[start, end]`
///
/// Segments are plain values; nothing is validated at construction. A
/// segment whose endpoints coincide within tolerance is *degenerate* and the
/// distance engine refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3D,
    pub end: Point3D,
}

impl Segment {
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Segment { start, end }
    }

    /// Direction vector from `start` to `end`
    pub fn direction(&self) -> Vector3D {
        Vector3D::between(&self.start, &self.end)
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// True when the endpoints coincide, i.e. the direction vector is null
    pub fn is_degenerate(&self) -> bool {
        self.direction().is_null()
    }

    /// The same segment traversed the other way
    pub fn reversed(&self) -> Self {
        Segment {
            start: self.end,
            end: self.start,
        }
    }

    /// True when any endpoint of `self` coincides with any endpoint of `other`
    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.start.is_coincident(&other.start)
            || self.start.is_coincident(&other.end)
            || self.end.is_coincident(&other.start)
            || self.end.is_coincident(&other.end)
    }

    /// Minimal distance from `point` to this segment
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        point.distance_to_segment(&self.start, &self.end)
    }
}

impl From<(Point3D, Point3D)> for Segment {
    fn from((start, end): (Point3D, Point3D)) -> Self {
        Segment::new(start, end)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}
