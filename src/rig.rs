//! Robotic arm rig
//!
//! The five-joint arm driven by the demo: a Z-up model hung under a root that
//! turns it into the Y-up world, bones bound to its nodes by name, and the
//! animated target it chases.

use crate::error::{IkError, IkResult};
use crate::ik::{Bone, BoneChain, RotationLimit};
use crate::math::Transform;
use crate::scene::{NodeId, SceneGraph};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub const ROOT: &str = "RoboticArm";
pub const SHOULDER: &str = "Shoulder";
pub const UPPER_ARM: &str = "UpperArm";
pub const FORE_ARM: &str = "ForeArm";
pub const HAND: &str = "Hand";
pub const FINGER: &str = "Finger";

/// Builds the arm hierarchy and returns its root.
pub fn build_robotic_arm(graph: &mut SceneGraph) -> NodeId {
    let root = graph.add_root(
        ROOT,
        Transform::from_position_rotation(Vec3::ZERO, Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
    );
    let shoulder = graph.add_child(root, SHOULDER, Transform::IDENTITY);
    let upper = graph.add_child(shoulder, UPPER_ARM, Transform::from_position(Vec3::new(0.0, 0.0, 5.0)));
    let fore = graph.add_child(upper, FORE_ARM, Transform::from_position(Vec3::new(0.0, 0.0, 48.5)));
    let hand = graph.add_child(fore, HAND, Transform::from_position(Vec3::new(40.0, 0.0, 8.0)));
    graph.add_child(hand, FINGER, Transform::from_position(Vec3::new(12.5, 0.0, 0.0)));
    root
}

fn lookup(graph: &SceneGraph, root: NodeId, name: &str) -> IkResult<NodeId> {
    graph
        .find_by_name(root, name)
        .ok_or_else(|| IkError::NodeNotFound(name.to_string()))
}

/// Binds the arm's five bones to the named nodes under `root`.
pub fn bind_robotic_arm(graph: &SceneGraph, root: NodeId) -> IkResult<BoneChain> {
    let locked = RotationLimit::LOCKED;
    let free = RotationLimit::FREE;

    let shoulder = Bone::new(lookup(graph, root, SHOULDER)?, Vec3::new(0.0, 0.0, 5.0))
        .with_limits(locked, locked, free);
    let upper = Bone::new(lookup(graph, root, UPPER_ARM)?, Vec3::new(0.0, 0.0, 48.5))
        .with_limits(locked, RotationLimit::degrees(-45.0, 90.0)?, locked);
    let fore = Bone::new(lookup(graph, root, FORE_ARM)?, Vec3::new(40.0, 0.0, 8.0))
        .with_limits(locked, RotationLimit::degrees(-180.0, 0.0)?, locked);
    let hand = Bone::new(lookup(graph, root, HAND)?, Vec3::new(12.5, 0.0, 0.0))
        .with_limits(free, locked, locked);
    let finger = Bone::new(lookup(graph, root, FINGER)?, Vec3::new(0.0, 0.0, -20.0))
        .with_origin(Vec3::new(0.0, -3.5, 0.0))
        .with_limits(locked, RotationLimit::degrees(-180.0, 0.0)?, locked);

    log::debug!("binding robotic arm under '{}'", graph.name(root));
    BoneChain::new(vec![shoulder, upper, fore, hand, finger], graph)
}

#[derive(Debug, Clone)]
pub struct RoboticArm {
    pub root: NodeId,
    pub chain: BoneChain,
}

impl RoboticArm {
    pub fn new(graph: &mut SceneGraph) -> IkResult<Self> {
        let root = build_robotic_arm(graph);
        let chain = bind_robotic_arm(graph, root)?;
        Ok(Self { root, chain })
    }
}

/// Looping target path swept in the YZ plane at a fixed X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPath {
    pub amplitude: f32,
    pub height: f32,
}

impl Default for TargetPath {
    fn default() -> Self {
        Self {
            amplitude: 25.0,
            height: 100.0,
        }
    }
}

impl TargetPath {
    pub fn position(&self, clock: f32, x: f32) -> Vec3 {
        let t = clock.rem_euclid(TAU) - PI;
        let sinc = if t.abs() < 1e-6 { 1.0 } else { t.sin() / t };

        let y = -t.abs() * (PI * sinc).cos() * self.amplitude + self.height;
        let z = t * (PI * 0.872 * sinc).sin() * self.amplitude;
        Vec3::new(x, y, z)
    }
}

/// Per-frame solver knobs exposed to the frontend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    pub velocity: f32,
    pub enabled: bool,
    pub animate_target: bool,
    pub target: Vec3,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            velocity: 0.001,
            enabled: true,
            animate_target: false,
            target: Vec3::new(100.0, 50.0, 50.0),
        }
    }
}

impl SolverSettings {
    /// Velocity handed to `BoneChain::solve` for a frame lasting `dt` seconds.
    pub fn step_velocity(&self, dt: f32) -> f32 {
        self.velocity * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn arm_binds_all_named_nodes() {
        let mut graph = SceneGraph::new();
        let arm = RoboticArm::new(&mut graph).unwrap();

        assert_eq!(graph.subtree_size(arm.root), 6);
        assert_eq!(arm.chain.len(), 5);
        let names: Vec<&str> = arm.chain.bones().iter().map(|b| graph.name(b.node())).collect();
        assert_eq!(names, vec![SHOULDER, UPPER_ARM, FORE_ARM, HAND, FINGER]);
    }

    #[test]
    fn rest_pose_end_effector() {
        let mut graph = SceneGraph::new();
        let arm = RoboticArm::new(&mut graph).unwrap();

        // Local (52.5, -3.5, 41.5) under a -90 degree X turn.
        assert_abs_diff_eq!(arm.chain.end_effector(&graph), Vec3::new(52.5, 41.5, 3.5), epsilon = 1e-3);
    }

    #[test]
    fn missing_node_is_reported_by_name() {
        let mut graph = SceneGraph::new();
        let root = graph.add_root(ROOT, Transform::IDENTITY);
        graph.add_child(root, SHOULDER, Transform::IDENTITY);

        let err = bind_robotic_arm(&graph, root).unwrap_err();
        assert_eq!(err, IkError::NodeNotFound(UPPER_ARM.to_string()));
    }

    #[test]
    fn arm_reaches_default_target_within_limits() {
        let mut graph = SceneGraph::new();
        let mut arm = RoboticArm::new(&mut graph).unwrap();
        let settings = SolverSettings::default();
        let velocity = settings.step_velocity(1.0 / 60.0);

        let start = arm.chain.distance_to(&graph, settings.target);
        for _ in 0..600 {
            arm.chain.solve(&mut graph, settings.target, velocity);
        }
        let end = arm.chain.distance_to(&graph, settings.target);

        assert!(start > 60.0);
        assert!(end < 5.0, "arm stalled at distance {end}");

        let rotations = arm.chain.rotations(&graph);
        assert_eq!(rotations[0].x, 0.0);
        assert_eq!(rotations[0].y, 0.0);
        assert!(rotations[1].y >= (-45.0f32).to_radians() && rotations[1].y <= 90.0f32.to_radians());
        assert!(rotations[2].y <= 0.0);
        assert_eq!(rotations[3].y, 0.0);
        assert_eq!(rotations[4].x, 0.0);
    }

    #[test]
    fn target_path_key_points() {
        let path = TargetPath::default();

        let top = path.position(PI, 100.0);
        assert_abs_diff_eq!(top, Vec3::new(100.0, 100.0, 0.0), epsilon = 1e-3);

        let start = path.position(0.0, 100.0);
        assert_abs_diff_eq!(start.y, 100.0 - PI * 25.0, epsilon = 1e-2);
        assert_abs_diff_eq!(start.z, 0.0, epsilon = 1e-2);

        for i in 0..200 {
            let p = path.position(i as f32 * 0.05, 0.0);
            assert!(p.is_finite());
        }
    }

    #[test]
    fn step_velocity_scales_with_frame_time() {
        let settings = SolverSettings {
            velocity: 0.002,
            ..SolverSettings::default()
        };
        assert_abs_diff_eq!(settings.step_velocity(0.5), 0.001, epsilon = 1e-9);
    }
}
