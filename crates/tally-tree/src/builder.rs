//! Tree construction. The only phase in which a tree can change.

use tally_core::errors::TreeError;
use tally_core::TallyConfig;

use crate::node::{Node, NodeId, NodeSpec};
use crate::tree::CostTree;

/// Assembles a tree top-down. Every node is attached to an existing parent
/// exactly once, so re-parenting and cycles are impossible.
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new(root: NodeSpec) -> Self {
        Self {
            nodes: vec![Node::from_spec(root, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child after `parent`'s existing children.
    pub fn add_child(&mut self, parent: NodeId, spec: NodeSpec) -> Result<NodeId, TreeError> {
        if parent.0 >= self.nodes.len() {
            return Err(TreeError::UnknownNode { index: parent.0 });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_spec(spec, Some(parent)));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Freeze the tree with default numeric and cache settings.
    pub fn build(self) -> CostTree {
        self.build_with(&TallyConfig::default())
    }

    /// Freeze the tree using `config`'s numeric and cache settings.
    pub fn build_with(self, config: &TallyConfig) -> CostTree {
        let tree = CostTree::new(self.nodes, config);
        tree.check_valid(tree.root());
        tracing::debug!(nodes = tree.len(), "cost tree built");
        tree
    }
}
