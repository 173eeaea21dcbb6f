use super::chain::BoneChain;
use super::limit::Axis;
use crate::scene::SceneGraph;
use glam::Vec3;

/// Deadband radius per unit of velocity: a chain whose end-effector is within
/// `velocity * DEADBAND_SCALE` of the target is left untouched.
pub const DEADBAND_SCALE: f32 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// The end-effector was inside the deadband and nothing moved.
    pub converged: bool,
    /// End-effector to target distance observed before the step.
    pub distance: f32,
}

pub struct JacobianTransposeSolver;

impl JacobianTransposeSolver {
    /// Applies one damped Jacobian-transpose step.
    ///
    /// Every bone's delta is computed against the same pre-step pose:
    /// `delta[axis] = velocity * dot(J(target, axis), target - end_effector)`,
    /// and only then are the bones actuated root to tip. Each bone clamps its
    /// own delta to its step and limits.
    pub fn solve(chain: &mut BoneChain, graph: &mut SceneGraph, target: Vec3, velocity: f32) -> SolveResult {
        debug_assert!(
            chain.bones.iter().all(|b| graph.contains(b.node())),
            "bone chain references a node outside this scene graph"
        );

        let end_diff = target - chain.end_effector(graph);
        let distance = end_diff.length();

        if distance <= velocity * chain.deadband_scale {
            return SolveResult {
                converged: true,
                distance,
            };
        }

        for (bone, delta) in chain.bones.iter().zip(chain.deltas.iter_mut()) {
            let mut d = Vec3::ZERO;
            for axis in Axis::ALL {
                let column = bone.jacobian_column(graph, target, axis.unit());
                d[axis.index()] = velocity * column.dot(end_diff);
            }
            *delta = d;
        }

        for (bone, delta) in chain.bones.iter().zip(chain.deltas.iter()) {
            bone.actuate(graph, *delta);
        }

        log::trace!(
            "ik step: distance {:.4}, root delta {:?}",
            distance,
            chain.deltas.first().copied().unwrap_or(Vec3::ZERO)
        );

        SolveResult {
            converged: false,
            distance,
        }
    }
}
