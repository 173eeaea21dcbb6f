use super::bone::Bone;
use super::solver::{JacobianTransposeSolver, SolveResult, DEADBAND_SCALE};
use crate::error::{IkError, IkResult};
use crate::scene::SceneGraph;
use glam::Vec3;
use std::collections::HashSet;

/// Ordered bones from the root joint (index 0) to the end-effector bone.
#[derive(Debug, Clone)]
pub struct BoneChain {
    pub(crate) bones: Vec<Bone>,
    pub(crate) deadband_scale: f32,
    pub(crate) deltas: Vec<Vec3>,
}

impl BoneChain {
    pub fn new(bones: Vec<Bone>, graph: &SceneGraph) -> IkResult<Self> {
        Self::validated(bones, DEADBAND_SCALE, graph)
    }

    pub fn builder() -> BoneChainBuilder {
        BoneChainBuilder::new()
    }

    fn validated(bones: Vec<Bone>, deadband_scale: f32, graph: &SceneGraph) -> IkResult<Self> {
        if bones.is_empty() {
            return Err(IkError::EmptyChain);
        }

        let mut seen = HashSet::with_capacity(bones.len());
        for bone in &bones {
            let node = bone.node();
            if !graph.contains(node) {
                return Err(IkError::UnknownNode(node));
            }
            if !seen.insert(node) {
                return Err(IkError::SharedNode { node });
            }

            let step = bone.max_step();
            if !step.is_finite() || step < 0.0 {
                return Err(IkError::InvalidStep(step));
            }
            if step == 0.0 {
                log::warn!("bone on node '{}' has a zero max step and will never move", graph.name(node));
            }
        }

        log::debug!(
            "built bone chain: {} bones, root '{}', tip '{}'",
            bones.len(),
            graph.name(bones[0].node()),
            graph.name(bones[bones.len() - 1].node()),
        );

        let deltas = vec![Vec3::ZERO; bones.len()];
        Ok(Self {
            bones,
            deadband_scale,
            deltas,
        })
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Never true for a chain built through `new` or the builder.
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn deadband_scale(&self) -> f32 {
        self.deadband_scale
    }

    pub fn tip(&self) -> &Bone {
        &self.bones[self.bones.len() - 1]
    }

    pub fn end_effector(&self, graph: &SceneGraph) -> Vec3 {
        self.tip().end_effector_position(graph)
    }

    pub fn distance_to(&self, graph: &SceneGraph, target: Vec3) -> f32 {
        (target - self.end_effector(graph)).length()
    }

    pub fn is_within_deadband(&self, graph: &SceneGraph, target: Vec3, velocity: f32) -> bool {
        self.distance_to(graph, target) <= velocity * self.deadband_scale
    }

    pub fn rotations(&self, graph: &SceneGraph) -> Vec<Vec3> {
        self.bones.iter().map(|b| graph.rotation(b.node())).collect()
    }

    /// One damped Jacobian-transpose step toward `target`. See
    /// [`JacobianTransposeSolver::solve`].
    pub fn solve(&mut self, graph: &mut SceneGraph, target: Vec3, velocity: f32) -> SolveResult {
        JacobianTransposeSolver::solve(self, graph, target, velocity)
    }
}

pub struct BoneChainBuilder {
    bones: Vec<Bone>,
    deadband_scale: f32,
}

impl BoneChainBuilder {
    pub fn new() -> Self {
        Self {
            bones: Vec::new(),
            deadband_scale: DEADBAND_SCALE,
        }
    }

    pub fn add_bone(mut self, bone: Bone) -> Self {
        self.bones.push(bone);
        self
    }

    pub fn deadband_scale(mut self, scale: f32) -> Self {
        self.deadband_scale = scale;
        self
    }

    pub fn build(self, graph: &SceneGraph) -> IkResult<BoneChain> {
        BoneChain::validated(self.bones, self.deadband_scale, graph)
    }
}

impl Default for BoneChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
