//! Plane in implicit form `a·x + b·y + c·z + d = 0`

use crate::constants::TOLERANCE;
use crate::coordinates::{Point3D, Vector3D};
use crate::Result;

/// A plane stored as the coefficients of its implicit equation
///
/// The normal is normalized at construction, so `(a, b, c)` always has unit
/// length and the equation value at a point is its signed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Plane {
    /// Creates the plane through `point` perpendicular to `normal`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SegdistError::NullVector`] if `normal` is null.
    pub fn new(point: &Point3D, normal: &Vector3D) -> Result<Self> {
        let unit = normal.normal()?;

        Ok(Plane {
            a: unit.x,
            b: unit.y,
            c: unit.z,
            d: -unit.x * point.x - unit.y * point.y - unit.z * point.z,
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// Unit normal of the plane
    pub fn normal(&self) -> Vector3D {
        Vector3D::new(self.a, self.b, self.c)
    }

    /// Value of the plane equation at `point`
    ///
    /// Positive on the side the normal points to, negative on the other.
    pub fn signed_distance(&self, point: &Point3D) -> f64 {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Unsigned distance from the plane to `point`
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        // (a, b, c) is unit length after construction; divide anyway
        let norm = (self.a * self.a + self.b * self.b + self.c * self.c).sqrt();
        self.signed_distance(point).abs() / norm
    }

    /// True when `point` lies on the plane within [`TOLERANCE`]
    pub fn contains(&self, point: &Point3D) -> bool {
        self.signed_distance(point).abs() < TOLERANCE
    }

    /// Orthogonal projection of `point` onto the plane
    ///
    /// Moves the point by the normal scaled to its distance from the plane,
    /// trying the positive direction first and falling back to the negative
    /// one when the first candidate does not land on the plane.
    pub fn project(&self, point: &Point3D) -> Point3D {
        let mut offset = self.normal();
        offset *= self.distance_to_point(point);

        let projected = *point + offset;
        if self.contains(&projected) {
            projected
        } else {
            *point - offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegdistError;
    use approx::assert_relative_eq;

    fn xy_plane_at(z: f64) -> Plane {
        Plane::new(&Point3D::new(3.0, -7.0, z), &Vector3D::new(0.0, 0.0, 5.0)).unwrap()
    }

    #[test]
    fn test_coefficients_are_normalized() {
        let plane = Plane::new(&Point3D::new(1.0, 2.0, 3.0), &Vector3D::new(2.0, 3.0, 6.0)).unwrap();

        let n = plane.normal();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(plane.a(), 2.0 / 7.0, epsilon = 1e-15);
        assert_relative_eq!(plane.b(), 3.0 / 7.0, epsilon = 1e-15);
        assert_relative_eq!(plane.c(), 6.0 / 7.0, epsilon = 1e-15);
        assert_relative_eq!(plane.d(), -26.0 / 7.0, epsilon = 1e-14);
    }

    #[test]
    fn test_null_normal_is_rejected() {
        let result = Plane::new(&Point3D::ORIGIN, &Vector3D::new(0.0, 5e-5, 0.0));
        assert!(matches!(result, Err(SegdistError::NullVector)));
    }

    #[test]
    fn test_distance_to_point() {
        let plane = xy_plane_at(2.0);

        assert_relative_eq!(plane.distance_to_point(&Point3D::new(9.0, 9.0, 5.0)), 3.0);
        assert_relative_eq!(plane.distance_to_point(&Point3D::new(-1.0, 0.0, -1.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3D::new(-1.0, 0.0, -1.0)), -3.0);
        assert_eq!(plane.distance_to_point(&Point3D::new(4.0, 4.0, 2.0)), 0.0);
    }

    #[test]
    fn test_contains() {
        let plane = xy_plane_at(0.0);

        assert!(plane.contains(&Point3D::new(100.0, -50.0, 0.0)));
        assert!(plane.contains(&Point3D::new(1.0, 1.0, TOLERANCE / 2.0)));
        assert!(!plane.contains(&Point3D::new(1.0, 1.0, 2.0 * TOLERANCE)));
    }

    #[test]
    fn test_project_from_either_side() {
        let plane = xy_plane_at(1.0);

        assert_eq!(plane.project(&Point3D::new(2.0, 3.0, 4.0)), Point3D::new(2.0, 3.0, 1.0));
        assert_eq!(plane.project(&Point3D::new(2.0, 3.0, -4.0)), Point3D::new(2.0, 3.0, 1.0));
        assert_eq!(plane.project(&Point3D::new(2.0, 3.0, 1.0)), Point3D::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_project_onto_oblique_plane() {
        let plane = Plane::new(&Point3D::new(1.0, 1.0, 1.0), &Vector3D::new(1.0, 1.0, 1.0)).unwrap();

        for point in [
            Point3D::new(5.0, -2.0, 0.5),
            Point3D::new(-3.0, -3.0, -3.0),
            Point3D::new(0.0, 4.0, 8.0),
        ] {
            let projected = plane.project(&point);
            assert!(plane.contains(&projected));

            // The offset is along the normal
            let offset = Vector3D::between(&projected, &point);
            assert!(offset.cross(&plane.normal()).is_null());
        }
    }
}
