//! # Point Module
//!
//! `Point3D` is a position in 3D space. Points are translated by vectors,
//! subtracted to give vectors, and compared with the crate-wide [`TOLERANCE`]
//! when the distance engine needs to know whether two endpoints coincide.
//!
//! ## Tolerance Equality
//!
//! `PartialEq` on `Point3D` is exact. Tolerance equality is a separate method,
//! [`Point3D::is_coincident`], because it is not transitive: a chain of points
//! each within tolerance of the next can drift arbitrarily far. It is only
//! used for degenerate-case detection.
//!
//! ```rust
//! use segdist::coordinates::Point3D;
//!
//! let a = Point3D::new(1.0, 2.0, 3.0);
//! let b = Point3D::new(1.00004, 2.0, 2.99996);
//! assert!(a.is_coincident(&b));
//! assert_ne!(a, b);
//! ```

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::vector::Vector3D;
use crate::constants::TOLERANCE;

/// Position in 3D Euclidean space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new point from its coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }

    /// True when every coordinate differs from `other` by less than [`TOLERANCE`]
    pub fn is_coincident(&self, other: &Point3D) -> bool {
        (self.x - other.x).abs() < TOLERANCE
            && (self.y - other.y).abs() < TOLERANCE
            && (self.z - other.z).abs() < TOLERANCE
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        Vector3D::between(self, other).length()
    }

    /// Minimal distance from this point to the closed segment `[a, b]`
    ///
    /// The closest feature of the segment is either the foot of the
    /// perpendicular dropped from the point, or one of the endpoints. If the
    /// triangle `(a, b, self)` has an obtuse angle at `a` or at `b` the foot
    /// falls outside the segment and the nearer endpoint wins. Otherwise the
    /// perpendicular height is twice the triangle area over the base:
    ///
    /// ```text
    /// height = |ab × a→self| / |ab|
    /// ```
    ///
    /// The segment must not be degenerate; with `a == b` exactly the height
    /// formula divides by zero. The distance engine rejects zero-length
    /// segments before it gets here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdist::coordinates::Point3D;
    ///
    /// let a = Point3D::new(0.0, 0.0, 0.0);
    /// let b = Point3D::new(1.0, 0.0, 0.0);
    ///
    /// // Beyond the end of the segment: nearest endpoint
    /// assert_eq!(Point3D::new(5.0, 0.0, 0.0).distance_to_segment(&a, &b), 4.0);
    ///
    /// // Above the middle: perpendicular height
    /// assert_eq!(Point3D::new(0.5, 1.0, 0.0).distance_to_segment(&a, &b), 1.0);
    /// ```
    pub fn distance_to_segment(&self, a: &Point3D, b: &Point3D) -> f64 {
        let a_to_self = Vector3D::between(a, self);
        let b_to_self = Vector3D::between(b, self);
        let ab = Vector3D::between(a, b);
        let ba = -ab;

        if ab.dot(&a_to_self) < 0.0 || ba.dot(&b_to_self) < 0.0 {
            return a_to_self.length().min(b_to_self.length());
        }

        let double_area = ab.cross(&a_to_self).length();
        double_area / ab.length()
    }

    /// Converts to a nalgebra Point3
    pub fn to_point3(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

impl From<Point3<f64>> for Point3D {
    fn from(p: Point3<f64>) -> Self {
        Point3D::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for Point3<f64> {
    fn from(p: Point3D) -> Self {
        p.to_point3()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(arr: [f64; 3]) -> Self {
        Point3D::new(arr[0], arr[1], arr[2])
    }
}

impl std::fmt::Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Add<Vector3D> for Point3D {
    type Output = Point3D;

    fn add(self, v: Vector3D) -> Point3D {
        Point3D {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

impl std::ops::Sub<Vector3D> for Point3D {
    type Output = Point3D;

    fn sub(self, v: Vector3D) -> Point3D {
        Point3D {
            x: self.x - v.x,
            y: self.y - v.y,
            z: self.z - v.z,
        }
    }
}

impl std::ops::Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, start: Point3D) -> Vector3D {
        Vector3D::between(&start, &self)
    }
}
