//! # ik-scene
//!
//! Iterative inverse kinematics over a hierarchical scene graph.
//!
//! ## Features
//! - Arena scene graph with eagerly propagated world transforms
//! - Bones bound to scene nodes with per-axis rotation limits and a step cap
//! - Damped Jacobian-transpose solver, one bounded step per frame
//! - Renderer-agnostic camera and debug line geometry
//!
//! ## Example
//! ```rust
//! use ik_scene::ik::{Bone, BoneChain, RotationLimit};
//! use ik_scene::math::Transform;
//! use ik_scene::scene::SceneGraph;
//! use glam::Vec3;
//!
//! let mut graph = SceneGraph::new();
//! let base = graph.add_root("base", Transform::IDENTITY);
//! let elbow = graph.add_child(base, "elbow", Transform::from_position(Vec3::new(5.0, 0.0, 0.0)));
//!
//! let z_only = |node| {
//!     Bone::new(node, Vec3::new(5.0, 0.0, 0.0))
//!         .with_limits(RotationLimit::LOCKED, RotationLimit::LOCKED, RotationLimit::FREE)
//!         .with_max_step(0.05)
//! };
//! let mut chain = BoneChain::new(vec![z_only(base), z_only(elbow)], &graph)?;
//!
//! // Called once per frame with an elapsed-time scaled velocity.
//! let target = Vec3::new(5.0, 5.0, 0.0);
//! let result = chain.solve(&mut graph, target, 1e-4);
//! println!("converged: {}, distance: {}", result.converged, result.distance);
//! # Ok::<(), ik_scene::IkError>(())
//! ```

pub mod error;
pub mod ik;
pub mod math;
pub mod render;
pub mod rig;
pub mod scene;

pub use error::{IkError, IkResult};
pub use ik::{Axis, Bone, BoneChain, BoneChainBuilder, JacobianTransposeSolver, RotationLimit, SolveResult};
pub use math::Transform;
pub use render::{Camera, CameraMode, DebugLines, LineVertex};
pub use rig::{RoboticArm, SolverSettings, TargetPath};
pub use scene::{NodeId, SceneGraph, SceneNode};
