use crate::math::Transform;
use glam::{Mat4, Vec3};
use std::fmt;

/// Stable index of a node inside a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    transform: Transform,
    local_matrix: Mat4,
    world_matrix: Mat4,
}

impl SceneNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn local_matrix(&self) -> Mat4 {
        self.local_matrix
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }
}

/// Arena-backed forest of transform nodes.
///
/// Every mutation recomputes the node's local matrix and then the world
/// matrix of the node and its whole subtree before returning, so
/// `world_transform` is always `parent.world * local`.
///
/// Methods taking a [`NodeId`] panic if the id was not produced by this graph.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|id| self.nodes[id.index()].parent.is_none())
    }

    pub fn add_root(&mut self, name: impl Into<String>, transform: Transform) -> NodeId {
        self.insert(None, name.into(), transform)
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        transform: Transform,
    ) -> NodeId {
        assert!(self.contains(parent), "parent {parent} is not in this graph");
        let id = self.insert(Some(parent), name.into(), transform);
        self.nodes[parent.index()].children.push(id);
        id
    }

    fn insert(&mut self, parent: Option<NodeId>, name: String, transform: Transform) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let local_matrix = transform.to_matrix();
        let world_matrix = match parent {
            Some(p) => self.nodes[p.index()].world_matrix * local_matrix,
            None => local_matrix,
        };

        self.nodes.push(SceneNode {
            name,
            parent,
            children: Vec::new(),
            transform,
            local_matrix,
            world_matrix,
        });
        id
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn transform(&self, id: NodeId) -> &Transform {
        &self.nodes[id.index()].transform
    }

    pub fn position(&self, id: NodeId) -> Vec3 {
        self.nodes[id.index()].transform.position
    }

    /// Local Euler rotation in radians. This is the value IK reads and writes.
    pub fn rotation(&self, id: NodeId) -> Vec3 {
        self.nodes[id.index()].transform.rotation
    }

    pub fn local_transform(&self, id: NodeId) -> Mat4 {
        self.nodes[id.index()].local_matrix
    }

    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        self.nodes[id.index()].world_matrix
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.nodes[id.index()].world_matrix.w_axis.truncate()
    }

    pub fn set_transform(&mut self, id: NodeId, transform: Transform) {
        self.update(id, |t| *t = transform);
    }

    pub fn set_position(&mut self, id: NodeId, position: Vec3) {
        self.update(id, |t| t.position = position);
    }

    pub fn translate(&mut self, id: NodeId, delta: Vec3) {
        self.update(id, |t| t.position += delta);
    }

    pub fn set_rotation(&mut self, id: NodeId, rotation: Vec3) {
        self.update(id, |t| t.rotation = rotation);
    }

    pub fn rotate(&mut self, id: NodeId, delta: Vec3) {
        self.update(id, |t| t.rotation += delta);
    }

    pub fn scale(&mut self, id: NodeId, factor: f32) {
        self.update(id, |t| t.scale *= factor);
    }

    fn update(&mut self, id: NodeId, edit: impl FnOnce(&mut Transform)) {
        let node = &mut self.nodes[id.index()];
        edit(&mut node.transform);
        node.local_matrix = node.transform.to_matrix();
        self.propagate(id);
    }

    fn propagate(&mut self, id: NodeId) {
        let parent_world = self.nodes[id.index()]
            .parent
            .map_or(Mat4::IDENTITY, |p| self.nodes[p.index()].world_matrix);
        self.propagate_from(id, parent_world);
    }

    // Runs on every actuation; keep it allocation-free.
    fn propagate_from(&mut self, id: NodeId, parent_world: Mat4) {
        let node = &mut self.nodes[id.index()];
        node.world_matrix = parent_world * node.local_matrix;
        let world = node.world_matrix;

        for i in 0..self.nodes[id.index()].children.len() {
            let child = self.nodes[id.index()].children[i];
            self.propagate_from(child, world);
        }
    }

    /// Pre-order depth-first search of the subtree rooted at `root`.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.index()];
            if node.name == name {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }

        None
    }

    /// Searches every root, in insertion order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.roots().find_map(|root| self.find_by_name(root, name))
    }

    pub fn subtree_size(&self, root: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            count += 1;
            stack.extend(self.nodes[current.index()].children.iter().copied());
        }

        count
    }
}
