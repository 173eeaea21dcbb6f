//! Math utilities module
//!
//! Provides convenient re-exports from glam and the Euler-angle node transform.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Mat3, Mat4, Vec3, Vec4};
