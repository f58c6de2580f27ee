//! # Segment Distance Engine
//!
//! Computes the minimal Euclidean distance between two closed segments
//! `S1 = [p1, p2]` and `S2 = [p3, p4]` in 3D space.
//!
//! ## Classification
//!
//! The engine first decides how the two segments relate, then applies the
//! formula for that case:
//!
//! 1. **Shared endpoint**: an endpoint of one coincides with an endpoint of the
//!    other. The distance is zero.
//! 2. **Degenerate segment**: either segment has coincident endpoints. This is
//!    reported as [`SegdistError::DegenerateSegment`]; no distance is produced.
//! 3. **Parallel**: the direction vectors have a null cross product. The
//!    distance is the smallest of the four endpoint-to-opposite-segment
//!    distances.
//! 4. **Skew**: the cross product `n` of the directions is non-null. The plane
//!    through `p1` with normal `n` contains `S1` and is parallel to `S2`, so the
//!    distance from `p3` to it is the distance between the two carrier lines.
//!    All four points are projected onto that plane. If the projected segments
//!    cross, the common perpendicular of the lines hits both segments and the
//!    line distance is the answer ([`SegmentRelation::SkewCrossing`]).
//!    Otherwise the closest approach involves an endpoint and the endpoint
//!    fallback of case 3 applies ([`SegmentRelation::SkewDisjoint`]).
//!
//! ## Examples
//!
//! ```rust
//! use segdist::coordinates::Point3D;
//! use segdist::distance::{DistanceCalculator, SegmentRelation};
//!
//! let calculator = DistanceCalculator::new(
//!     Point3D::new(0.0, 0.0, 0.0),
//!     Point3D::new(2.0, 0.0, 0.0),
//!     Point3D::new(1.0, -1.0, 3.0),
//!     Point3D::new(1.0, 1.0, 3.0),
//! );
//!
//! assert_eq!(calculator.classify().unwrap(), SegmentRelation::SkewCrossing);
//! assert!((calculator.calculate().unwrap() - 3.0).abs() < 1e-12);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::coordinates::{Point3D, Vector3D};
use crate::geometry::{Plane, Segment};
use crate::{Result, SegdistError, SegmentLabel};

/// Spatial relationship between two non-degenerate segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentRelation {
    /// An endpoint of one segment coincides with an endpoint of the other
    SharedEndpoint,
    /// The carrier lines are parallel or collinear
    Parallel,
    /// Non-parallel, and the segments cross when projected along their common normal
    SkewCrossing,
    /// Non-parallel, and the projected segments do not cross
    SkewDisjoint,
}

impl std::fmt::Display for SegmentRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SegmentRelation::SharedEndpoint => "shared endpoint",
            SegmentRelation::Parallel => "parallel",
            SegmentRelation::SkewCrossing => "skew, crossing",
            SegmentRelation::SkewDisjoint => "skew, disjoint",
        };
        f.write_str(name)
    }
}

/// Result of a distance calculation together with the case that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub first: Segment,
    pub second: Segment,
    pub relation: SegmentRelation,
    pub distance: f64,
}

/// Minimal distance between segments `[p1, p2]` and `[p3, p4]`
///
/// Holds the four endpoints; every call recomputes from them, so repeated
/// calls return identical results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculator {
    p1: Point3D,
    p2: Point3D,
    p3: Point3D,
    p4: Point3D,
}

impl DistanceCalculator {
    pub fn new(p1: Point3D, p2: Point3D, p3: Point3D, p4: Point3D) -> Self {
        DistanceCalculator { p1, p2, p3, p4 }
    }

    pub fn from_segments(first: &Segment, second: &Segment) -> Self {
        DistanceCalculator::new(first.start, first.end, second.start, second.end)
    }

    pub fn first(&self) -> Segment {
        Segment::new(self.p1, self.p2)
    }

    pub fn second(&self) -> Segment {
        Segment::new(self.p3, self.p4)
    }

    /// Minimal distance between the two segments
    ///
    /// # Errors
    ///
    /// [`SegdistError::DegenerateSegment`] when either segment has coincident
    /// endpoints and shares no endpoint with the other.
    pub fn calculate(&self) -> Result<f64> {
        Ok(self.report()?.distance)
    }

    /// The case the engine takes for these segments
    pub fn classify(&self) -> Result<SegmentRelation> {
        Ok(self.report()?.relation)
    }

    /// Distance and relation in one value
    pub fn report(&self) -> Result<DistanceReport> {
        let (relation, distance) = self.solve()?;
        Ok(DistanceReport {
            first: self.first(),
            second: self.second(),
            relation,
            distance,
        })
    }

    fn solve(&self) -> Result<(SegmentRelation, f64)> {
        let (p1, p2, p3, p4) = (&self.p1, &self.p2, &self.p3, &self.p4);

        if have_common_endpoint(p1, p2, p3, p4) {
            debug!("segments share an endpoint");
            return Ok((SegmentRelation::SharedEndpoint, 0.0));
        }

        let v12 = Vector3D::between(p1, p2);
        let v34 = Vector3D::between(p3, p4);

        if v12.is_null() {
            warn!("segment [{} - {}] has zero length", p1, p2);
            return Err(SegdistError::DegenerateSegment {
                segment: SegmentLabel::First,
            });
        }
        if v34.is_null() {
            warn!("segment [{} - {}] has zero length", p3, p4);
            return Err(SegdistError::DegenerateSegment {
                segment: SegmentLabel::Second,
            });
        }

        let cross = v12.cross(&v34);

        if cross.is_null() {
            let distance = min_endpoint_distance(p1, p2, p3, p4);
            debug!("parallel segments, distance {}", distance);
            return Ok((SegmentRelation::Parallel, distance));
        }

        // Plane containing S1 and parallel to S2
        let plane = Plane::new(p1, &cross)?;
        let line_distance = plane.distance_to_point(p3);

        let p2_proj = plane.project(p2);
        let p3_proj = plane.project(p3);
        let p4_proj = plane.project(p4);

        if segments_intersect_in_plane(p1, &p2_proj, &p3_proj, &p4_proj, &cross)? {
            debug!("skew segments cross, line distance {}", line_distance);
            Ok((SegmentRelation::SkewCrossing, line_distance))
        } else {
            let distance = min_endpoint_distance(p1, p2, p3, p4);
            debug!("skew segments do not cross, endpoint distance {}", distance);
            Ok((SegmentRelation::SkewDisjoint, distance))
        }
    }
}

/// Minimal distance between two segments
///
/// Shorthand for [`DistanceCalculator::from_segments`] followed by
/// [`DistanceCalculator::calculate`].
pub fn segment_distance(first: &Segment, second: &Segment) -> Result<f64> {
    DistanceCalculator::from_segments(first, second).calculate()
}

fn have_common_endpoint(p1: &Point3D, p2: &Point3D, p3: &Point3D, p4: &Point3D) -> bool {
    p1.is_coincident(p3) || p1.is_coincident(p4) || p2.is_coincident(p3) || p2.is_coincident(p4)
}

/// Smallest of the four endpoint-to-opposite-segment distances
fn min_endpoint_distance(p1: &Point3D, p2: &Point3D, p3: &Point3D, p4: &Point3D) -> f64 {
    let d1 = p1.distance_to_segment(p3, p4);
    let d2 = p2.distance_to_segment(p3, p4);
    let d3 = p3.distance_to_segment(p1, p2);
    let d4 = p4.distance_to_segment(p1, p2);

    d1.min(d2).min(d3.min(d4))
}

/// Whether segments `[p1, p2]` and `[p3, p4]`, lying in the plane through
/// `p1` with normal `dir`, cross each other
///
/// Points off that plane mean no intersection. A shared endpoint counts as an
/// intersection. Otherwise the endpoints of each segment must lie strictly on
/// opposite sides of the other; the side is the sign of the in-plane cross
/// product measured along `dir`. Touching or collinear overlap yields a zero
/// product and is not an intersection.
fn segments_intersect_in_plane(
    p1: &Point3D,
    p2: &Point3D,
    p3: &Point3D,
    p4: &Point3D,
    dir: &Vector3D,
) -> Result<bool> {
    let plane = Plane::new(p1, dir)?;

    if ![p1, p2, p3, p4].iter().all(|p| plane.contains(p)) {
        return Ok(false);
    }

    if have_common_endpoint(p1, p2, p3, p4) {
        return Ok(true);
    }

    let v34 = Vector3D::between(p3, p4);
    let v12 = Vector3D::between(p1, p2);

    let side1 = v34.cross(&Vector3D::between(p3, p1)).dot(dir);
    let side2 = v34.cross(&Vector3D::between(p3, p2)).dot(dir);
    let side3 = v12.cross(&Vector3D::between(p1, p3)).dot(dir);
    let side4 = v12.cross(&Vector3D::between(p1, p4)).dot(dir);

    Ok(side1 * side2 < 0.0 && side3 * side4 < 0.0)
}
