use crate::ik::BoneChain;
use crate::scene::SceneGraph;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

pub const BONE_COLOR: [f32; 3] = [0.9, 0.9, 0.9];
pub const JOINT_COLOR: [f32; 3] = [0.2, 0.6, 1.0];
pub const EFFECTOR_COLOR: [f32; 3] = [1.0, 0.6, 0.1];
pub const TARGET_COLOR: [f32; 3] = [1.0, 0.2, 0.2];

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Line-list geometry for visualising chains and targets.
///
/// Every pair of consecutive vertices is one segment; upload `as_bytes()`
/// straight into a vertex buffer drawn with a line-list topology.
#[derive(Debug, Clone, Default)]
pub struct DebugLines {
    vertices: Vec<LineVertex>,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn push_line(&mut self, from: Vec3, to: Vec3, color: [f32; 3]) {
        self.vertices.push(LineVertex::new(from, color));
        self.vertices.push(LineVertex::new(to, color));
    }

    /// Three axis-aligned segments of length `2 * size` crossing at `center`.
    pub fn push_cross(&mut self, center: Vec3, size: f32, color: [f32; 3]) {
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            self.push_line(center - axis * size, center + axis * size, color);
        }
    }

    /// One segment per bone from its world pivot to its end-effector, a cross
    /// on every pivot and a larger one on the chain's end-effector.
    pub fn push_chain(&mut self, chain: &BoneChain, graph: &SceneGraph, marker_size: f32) {
        for bone in chain.bones() {
            let pivot = bone.pivot_position(graph);
            self.push_line(pivot, bone.end_effector_position(graph), BONE_COLOR);
            self.push_cross(pivot, marker_size * 0.5, JOINT_COLOR);
        }
        self.push_cross(chain.end_effector(graph), marker_size, EFFECTOR_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ik::Bone;
    use crate::math::Transform;

    #[test]
    fn cross_is_three_segments() {
        let mut lines = DebugLines::new();
        lines.push_cross(Vec3::new(1.0, 2.0, 3.0), 0.5, TARGET_COLOR);

        assert_eq!(lines.segment_count(), 3);
        assert_eq!(lines.vertices()[0].position, [0.5, 2.0, 3.0]);
        assert_eq!(lines.vertices()[1].position, [1.5, 2.0, 3.0]);
    }

    #[test]
    fn chain_geometry_spans_pivot_to_tip() {
        let mut graph = SceneGraph::new();
        let a = graph.add_root("a", Transform::IDENTITY);
        let b = graph.add_child(a, "b", Transform::from_position(Vec3::new(0.0, 0.0, 2.0)));
        let chain = BoneChain::new(
            vec![Bone::new(a, Vec3::new(0.0, 0.0, 2.0)), Bone::new(b, Vec3::new(3.0, 0.0, 0.0))],
            &graph,
        )
        .unwrap();

        let mut lines = DebugLines::new();
        lines.push_chain(&chain, &graph, 1.0);

        // 2 bones * (1 segment + 3 cross) + 3 end-effector cross
        assert_eq!(lines.segment_count(), 11);
        assert_eq!(lines.vertices()[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(lines.vertices()[1].position, [0.0, 0.0, 2.0]);

        let second_bone = &lines.vertices()[8..10];
        assert_eq!(second_bone[0].position, [0.0, 0.0, 2.0]);
        assert_eq!(second_bone[1].position, [3.0, 0.0, 2.0]);

        assert_eq!(lines.as_bytes().len(), lines.vertices().len() * std::mem::size_of::<LineVertex>());
        lines.clear();
        assert!(lines.vertices().is_empty());
    }
}
