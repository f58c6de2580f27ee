//! Constants module for segment distance calculations

/// Tolerance used by every geometric predicate in the crate.
///
/// Two points closer than this on every axis are the same point, a vector whose
/// components are all smaller than this is null, and a point whose plane equation
/// evaluates to less than this lies on the plane.
pub const TOLERANCE: f64 = 1e-4;
