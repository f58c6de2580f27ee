//! Point and vector primitives for 3D space

pub mod point;
pub mod vector;

pub use point::Point3D;
pub use vector::Vector3D;
