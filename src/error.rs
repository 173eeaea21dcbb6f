use thiserror::Error;

use crate::scene::NodeId;

pub type IkResult<T> = Result<T, IkError>;

/// Configuration errors raised while building bones and chains.
///
/// Solving itself never fails; everything here is caught at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IkError {
    #[error("bone chain must contain at least one bone")]
    EmptyChain,

    #[error("node {0} does not exist in the scene graph")]
    UnknownNode(NodeId),

    #[error("node {node} is bound to more than one bone")]
    SharedNode { node: NodeId },

    #[error("invalid rotation limit: min {min} > max {max}")]
    InvalidLimit { min: f32, max: f32 },

    #[error("invalid max angular step {0} (must be finite and >= 0)")]
    InvalidStep(f32),

    #[error("no scene node named '{0}'")]
    NodeNotFound(String),
}
