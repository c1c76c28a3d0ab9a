//! Tree nodes and the composite capability shared with [`Document`](super::Document).

use crate::domain::error::{DomainError, DomainResult};

/// Container of ordered child nodes.
///
/// Implemented by both the document root and every tree node, so the parser
/// attaches lines the same way regardless of nesting depth.
pub trait Composite {
    /// Children in insertion (document) order.
    fn children(&self) -> &[TreeNode];

    fn children_mut(&mut self) -> &mut [TreeNode];

    /// Appends `node` after the existing children.
    fn add_child(&mut self, node: TreeNode);

    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Most recently appended child.
    fn last_child(&self) -> DomainResult<&TreeNode> {
        self.children().last().ok_or(DomainError::EmptyTree)
    }

    fn last_child_mut(&mut self) -> DomainResult<&mut TreeNode> {
        self.children_mut().last_mut().ok_or(DomainError::EmptyTree)
    }

    /// First child named `name`; later siblings with the same name are shadowed.
    fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    fn is_scalar(&self) -> bool {
        self.children().is_empty()
    }

    fn is_composite(&self) -> bool {
        !self.is_scalar()
    }
}

/// A named node: scalar while it has no children, composite otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Leading whitespace of the line that introduced this node
    indentation: String,
    /// Key, or decimal index for list elements
    name: String,
    /// Scalar text; never read once the node has children
    value: Option<String>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(
        indentation: impl Into<String>,
        name: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            indentation: indentation.into(),
            name: name.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar value; `None` for composites and for keys without a value.
    pub fn value(&self) -> Option<&str> {
        if self.is_composite() {
            return None;
        }
        self.value.as_deref()
    }
}

impl Composite for TreeNode {
    fn children(&self) -> &[TreeNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.children
    }

    fn add_child(&mut self, node: TreeNode) {
        self.children.push(node);
    }
}
