/*
Box-drawing view of a dossier tree, used by the CLI `tree` display style.
The indented `render` output stays the canonical text format.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::container::Container;
use crate::domain::node::{Leaf, Node};

pub trait TreeView {
    fn to_tree(&self) -> Tree<String>;
}

impl TreeView for Leaf {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.caption())
    }
}

impl TreeView for Container {
    #[instrument(level = "trace", skip(self), fields(section = %self.label()))]
    fn to_tree(&self) -> Tree<String> {
        // Section headers keep the upper-cased label of the indented format
        let leaves: Vec<_> = self.iter().map(|c| c.to_tree()).collect();
        Tree::new(self.label().to_uppercase()).with_leaves(leaves)
    }
}

impl TreeView for Node {
    fn to_tree(&self) -> Tree<String> {
        match self {
            Node::Leaf(leaf) => leaf.to_tree(),
            Node::Container(container) => container.to_tree(),
        }
    }
}
