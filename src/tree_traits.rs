/*
Renders parsed documents with termtree.

Scalars show as `name: value` (or just `name` when values are hidden or absent),
composites as their name with the children as leaves.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Composite, Document, TreeNode};

/// Label of the synthetic root when rendering a whole document.
pub const DOCUMENT_LABEL: &str = ".";

pub trait TreeNodeConvert {
    fn to_tree_string(&self, show_values: bool) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self, show_values: bool) -> Tree<String> {
        let label = match self.value() {
            Some(value) if show_values => format!("{}: {}", self.name(), value),
            _ => self.name().to_string(),
        };

        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string(show_values))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}

impl TreeNodeConvert for Document {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, show_values: bool) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string(show_values))
            .collect();
        Tree::new(DOCUMENT_LABEL.to_string()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Parser;

    #[test]
    fn test_document_tree_rendering() {
        let doc = Parser::parse_str("author: Tom\nroles:\n  - admin\n").unwrap();

        let tree = doc.to_tree_string(true);
        assert_eq!(tree.root, ".");
        assert_eq!(tree.leaves.len(), 2);
        assert_eq!(tree.leaves[0].root, "author: Tom");
        assert_eq!(tree.leaves[1].root, "roles");
        assert_eq!(tree.leaves[1].leaves[0].root, "0: admin");

        let bare = doc.to_tree_string(false);
        assert_eq!(bare.leaves[0].root, "author");
    }
}
