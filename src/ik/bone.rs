use super::limit::{Axis, RotationLimit};
use crate::scene::{NodeId, SceneGraph};
use glam::{Mat3, Mat4, Vec3};

/// Default per-update angular step: half a degree.
pub const DEFAULT_MAX_STEP: f32 = 0.5 * (std::f32::consts::PI / 180.0);

/// A revolute joint bound to one scene node.
///
/// The bone never owns its node; it only drives the node's local Euler
/// rotation through [`Bone::actuate`].
#[derive(Debug, Clone)]
pub struct Bone {
    node: NodeId,
    origin: Vec3,
    length: Vec3,
    limits: [RotationLimit; 3],
    max_step: f32,
}

impl Bone {
    pub fn new(node: NodeId, length: Vec3) -> Self {
        Self {
            node,
            origin: Vec3::ZERO,
            length,
            limits: [RotationLimit::FREE; 3],
            max_step: DEFAULT_MAX_STEP,
        }
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_limit(mut self, axis: Axis, limit: RotationLimit) -> Self {
        self.limits[axis.index()] = limit;
        self
    }

    pub fn with_limits(mut self, x: RotationLimit, y: RotationLimit, z: RotationLimit) -> Self {
        self.limits = [x, y, z];
        self
    }

    pub fn with_max_step(mut self, radians: f32) -> Self {
        self.max_step = radians;
        self
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn length(&self) -> Vec3 {
        self.length
    }

    pub fn limit(&self, axis: Axis) -> RotationLimit {
        self.limits[axis.index()]
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    /// Applies an angular delta to the bound node, clamped first to the
    /// per-call step and then to the per-axis limits. Returns the rotation
    /// written to the node.
    ///
    /// The step cap bounds the delta only. A node whose rotation was set
    /// outside the limits by other means is snapped back to the nearest
    /// bound in one call, however far that is.
    ///
    /// The cap is read by magnitude, so a negative `max_step` still bounds
    /// the delta instead of inverting the clamp.
    pub fn actuate(&self, graph: &mut SceneGraph, delta: Vec3) -> Vec3 {
        let step = Vec3::splat(self.max_step.abs());
        let delta = delta.max(-step).min(step);

        let mut rotation = graph.rotation(self.node) + delta;
        for axis in Axis::ALL {
            let i = axis.index();
            rotation[i] = self.limits[i].clamp(rotation[i]);
        }

        graph.set_rotation(self.node, rotation);
        rotation
    }

    pub fn end_effector_position(&self, graph: &SceneGraph) -> Vec3 {
        graph
            .world_transform(self.node)
            .transform_point3(self.origin + self.length)
    }

    pub fn pivot_position(&self, graph: &SceneGraph) -> Vec3 {
        graph.world_transform(self.node).transform_point3(self.origin)
    }

    pub fn world_transform(&self, graph: &SceneGraph) -> Mat4 {
        graph.world_transform(self.node)
    }

    /// Linear velocity at `target` produced by a unit angular velocity about
    /// `local_axis` at this node: `(R_world * axis) x (target - node_position)`.
    pub fn jacobian_column(&self, graph: &SceneGraph, target: Vec3, local_axis: Vec3) -> Vec3 {
        let world = graph.world_transform(self.node);
        let world_axis = Mat3::from_mat4(world) * local_axis;
        world_axis.cross(target - world.w_axis.truncate())
    }
}
