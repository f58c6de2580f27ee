//! Planes and segments built on the point/vector primitives

pub mod plane;
pub mod segment;

pub use plane::Plane;
pub use segment::Segment;
