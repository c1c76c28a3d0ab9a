//! Parse result and path lookup.

use crate::domain::node::{Composite, TreeNode};
use crate::domain::path::YamlPath;

/// Ordered top-level nodes of a parsed YAML document.
///
/// Built by [`Parser`](super::Parser); read-only for everyone else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<TreeNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node at `path`, matching one segment per level.
    ///
    /// At each level the first child with a matching name wins.
    pub fn find_node(&self, path: &YamlPath) -> Option<&TreeNode> {
        let (first, rest) = path.segments().split_first()?;
        rest.iter()
            .try_fold(self.child(first)?, |node, needle| node.child(needle))
    }

    /// Scalar value at `path`.
    ///
    /// Returns `None` when any segment does not match, or when the path ends
    /// on a composite node (composites carry no retrievable value).
    pub fn find_value(&self, path: &YamlPath) -> Option<&str> {
        self.find_node(path).and_then(TreeNode::value)
    }

    /// Whether `path` resolves to a node, scalar or composite.
    ///
    /// The empty path addresses the document itself and always exists.
    pub fn exists(&self, path: &YamlPath) -> bool {
        path.is_empty() || self.find_node(path).is_some()
    }

    /// Number of children below `path`: mapping keys or list elements.
    ///
    /// Scalars and unknown paths count as zero.
    pub fn count_elements(&self, path: &YamlPath) -> usize {
        if path.is_empty() {
            return self.child_count();
        }
        self.find_node(path).map_or(0, |node| node.child_count())
    }
}

impl Composite for Document {
    fn children(&self) -> &[TreeNode] {
        &self.nodes
    }

    fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.nodes
    }

    fn add_child(&mut self, node: TreeNode) {
        self.nodes.push(node);
    }
}
