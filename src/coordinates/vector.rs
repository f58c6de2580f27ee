//! # Displacement Vector Module
//!
//! `Vector3D` is the displacement between two positions in 3D space. Every
//! direction the distance engine works with (segment directions, the common
//! normal of two segments, endpoint-to-point offsets) is one of these.
//!
//! ## Null Vectors
//!
//! A vector is *null* when every component lies within [`TOLERANCE`] of zero.
//! Normalizing a null vector has no meaningful answer, so [`Vector3D::normal`]
//! returns [`SegdistError::NullVector`] instead of dividing by zero.
//!
//! ## Examples
//!
//! ```rust
//! use segdist::coordinates::{Point3D, Vector3D};
//!
//! let start = Point3D::new(1.0, 1.0, 1.0);
//! let end = Point3D::new(4.0, 5.0, 1.0);
//! let v = Vector3D::between(&start, &end);
//! assert_eq!(v.length(), 5.0);
//!
//! let x_axis = Vector3D::new(1.0, 0.0, 0.0);
//! let y_axis = Vector3D::new(0.0, 1.0, 0.0);
//! assert_eq!(x_axis.cross(&y_axis), Vector3D::new(0.0, 0.0, 1.0));
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::point::Point3D;
use crate::constants::TOLERANCE;
use crate::{Result, SegdistError};

/// Three-dimensional displacement vector
///
/// Pure value type. The only mutation it supports is in-place scaling through
/// `*=`, which the plane projection uses to stretch a unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// The zero displacement
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    /// Creates the displacement from `start` to `end` (`end - start`)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdist::coordinates::{Point3D, Vector3D};
    ///
    /// let v = Vector3D::between(&Point3D::new(1.0, 2.0, 3.0), &Point3D::new(2.0, 2.0, 5.0));
    /// assert_eq!(v, Vector3D::new(1.0, 0.0, 2.0));
    /// ```
    pub fn between(start: &Point3D, end: &Point3D) -> Self {
        Vector3D {
            x: end.x - start.x,
            y: end.y - start.y,
            z: end.z - start.z,
        }
    }

    /// Euclidean length of the vector
    ///
    /// Never negative; zero only for the exact zero vector.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector pointing the same way
    ///
    /// # Errors
    ///
    /// Returns [`SegdistError::NullVector`] when the vector is null, since
    /// there is no direction to preserve.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdist::coordinates::Vector3D;
    ///
    /// let unit = Vector3D::new(3.0, 4.0, 0.0).normal().unwrap();
    /// assert!((unit.length() - 1.0).abs() < 1e-15);
    ///
    /// assert!(Vector3D::new(0.0, 0.0, 0.0).normal().is_err());
    /// ```
    pub fn normal(&self) -> Result<Vector3D> {
        if self.is_null() {
            return Err(SegdistError::NullVector);
        }

        let len = self.length();
        Ok(Vector3D {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        })
    }

    /// True when every component lies within [`TOLERANCE`] of zero
    pub fn is_null(&self) -> bool {
        self.x.abs() < TOLERANCE && self.y.abs() < TOLERANCE && self.z.abs() < TOLERANCE
    }

    /// Dot product with another vector
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    ///
    /// The result is perpendicular to both inputs and its length equals the
    /// area of the parallelogram they span.
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(vec: Vector3<f64>) -> Self {
        Vector3D::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3D> for Vector3<f64> {
    fn from(vec: Vector3D) -> Self {
        vec.to_vector3()
    }
}

impl std::ops::Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Vector3D {
        Vector3D {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::MulAssign<f64> for Vector3D {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl std::ops::Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_between_points() {
        let a = Point3D::new(1.0, -2.0, 0.5);
        let b = Point3D::new(4.0, 2.0, 0.5);
        let v = Vector3D::between(&a, &b);
        assert_eq!(v, Vector3D::new(3.0, 4.0, 0.0));

        // Reversed endpoints flip the direction
        assert_eq!(Vector3D::between(&b, &a), -v);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector3D::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3D::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vector3D::ZERO.length(), 0.0);
    }

    #[test]
    fn test_normal() {
        let unit = Vector3D::new(0.0, 3.0, 4.0).normal().unwrap();
        assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(unit.y, 0.6, epsilon = 1e-15);
        assert_relative_eq!(unit.z, 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_normal_of_null_vector_is_an_error() {
        let tiny = Vector3D::new(TOLERANCE / 2.0, 0.0, -TOLERANCE / 2.0);
        assert!(matches!(tiny.normal(), Err(SegdistError::NullVector)));
    }

    #[test]
    fn test_is_null() {
        assert!(Vector3D::ZERO.is_null());
        assert!(Vector3D::new(5e-5, -5e-5, 0.0).is_null());
        assert!(!Vector3D::new(2e-4, 0.0, 0.0).is_null());
        assert!(!Vector3D::new(0.0, 0.0, -1.0).is_null());
    }

    #[test]
    fn test_dot_product() {
        let x_axis = Vector3D::new(1.0, 0.0, 0.0);
        let y_axis = Vector3D::new(0.0, 1.0, 0.0);

        assert_eq!(x_axis.dot(&y_axis), 0.0);
        assert_eq!(x_axis.dot(&Vector3D::new(2.0, 7.0, 0.0)), 2.0);
        assert_eq!(x_axis.dot(&Vector3D::new(-1.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn test_cross_product() {
        let x_axis = Vector3D::new(1.0, 0.0, 0.0);
        let y_axis = Vector3D::new(0.0, 1.0, 0.0);
        let z_axis = Vector3D::new(0.0, 0.0, 1.0);

        // Right-hand rule
        assert_eq!(x_axis.cross(&y_axis), z_axis);
        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);

        // Parallel vectors have a null cross product
        assert!(x_axis.cross(&(x_axis * 3.0)).is_null());
    }

    #[test]
    fn test_scale_in_place() {
        let mut v = Vector3D::new(1.0, -2.0, 0.5);
        v *= 4.0;
        assert_eq!(v, Vector3D::new(4.0, -8.0, 2.0));
        assert_eq!(v, Vector3D::new(1.0, -2.0, 0.5) * 4.0);
    }

    #[test]
    fn test_nalgebra_roundtrip() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let na: Vector3<f64> = v.into();
        assert_eq!(na.cross(&Vector3::x()), v.cross(&Vector3D::new(1.0, 0.0, 0.0)).to_vector3());
        assert_eq!(Vector3D::from(na), v);
    }
}
