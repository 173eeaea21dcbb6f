//! Inverse Kinematics module
//!
//! Bones bound to scene nodes, bone chains, and the damped Jacobian-transpose
//! solver that drives them one step per frame.

pub mod bone;
pub mod chain;
pub mod limit;
pub mod solver;

pub use bone::{Bone, DEFAULT_MAX_STEP};
pub use chain::{BoneChain, BoneChainBuilder};
pub use limit::{Axis, RotationLimit};
pub use solver::{JacobianTransposeSolver, SolveResult, DEADBAND_SCALE};
