//! Rendering collaborators
//!
//! Renderer-agnostic pieces a frontend needs to show the IK scene: the camera
//! and line geometry for joints, bones and targets.

pub mod camera;
pub mod debug;

pub use camera::{Camera, CameraMode};
pub use debug::{DebugLines, LineVertex};
