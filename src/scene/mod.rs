//! Scene graph module
//!
//! An arena of transform nodes with eagerly propagated world transforms.

mod graph;

pub use graph::{NodeId, SceneGraph, SceneNode};
