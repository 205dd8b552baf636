//! The frozen cost tree and its aggregation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use tally_core::config::NumericConfig;
use tally_core::tracing_setup::names;
use tally_core::{CostConfig, DistributionError, TallyConfig};
use tally_distributions::{scale, AnyDistribution};

use crate::node::{Node, NodeId};
use crate::subtotal::Subtotal;

/// A memo entry is valid for one node under one pricing table.
type MemoKey = (NodeId, Option<CostConfig>);

/// An immutable tree of costed work items.
///
/// `final_cost` results are memoized per `(node, config)` for the life of
/// the tree, so repeated reporting over overlapping subtrees is cheap. The
/// tree is `Send + Sync`; concurrent callers may race to fill the same
/// entry but always store equal values.
pub struct CostTree {
    nodes: Vec<Node>,
    numeric: NumericConfig,
    memo: Cache<MemoKey, Subtotal>,
    evaluations: AtomicU64,
}

impl CostTree {
    pub(crate) fn new(nodes: Vec<Node>, config: &TallyConfig) -> Self {
        Self {
            nodes,
            numeric: config.numeric.clone(),
            memo: Cache::new(config.cache.effective_memo_capacity()),
            evaluations: AtomicU64::new(0),
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

    /// Panics if `id` did not come from this tree's builder.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub fn root_ref(&self) -> NodeRef<'_> {
        self.node_ref(self.root())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).is_root()
    }

    pub fn numeric(&self) -> &NumericConfig {
        &self.numeric
    }

    /// Number of node subtotals computed so far (memo hits excluded).
    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Assert that every child in the subtree names its parent correctly.
    ///
    /// # Panics
    /// On the first broken parent/child link. A broken link is a
    /// programming error, not a recoverable condition.
    pub fn check_valid(&self, id: NodeId) {
        for &child in &self.node(id).children {
            let parent = self.node(child).parent;
            assert_eq!(
                parent,
                Some(id),
                "node {} lists child {} whose parent is {:?}",
                id.0,
                child.0,
                parent
            );
            self.check_valid(child);
        }
    }

    /// Whether any node in the subtree carries a distribution.
    pub fn has_cost(&self, id: NodeId) -> bool {
        self.check_valid(id);
        self.subtree_has_cost(id)
    }

    fn subtree_has_cost(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.distribution.is_some() || node.children.iter().any(|&c| self.subtree_has_cost(c))
    }

    /// Aggregate the subtree without touching the memo, keeping absence
    /// distinct from a zero cost.
    pub fn subtotal(
        &self,
        id: NodeId,
        config: Option<&CostConfig>,
    ) -> Result<Subtotal, DistributionError> {
        self.check_valid(id);
        self.aggregate(id, config, false)
    }

    /// Subtree total, recomputed on every call.
    pub fn cost(
        &self,
        id: NodeId,
        config: Option<&CostConfig>,
    ) -> Result<Arc<AnyDistribution>, DistributionError> {
        let _span =
            tracing::debug_span!(names::AGGREGATE, node = id.0, memoized = false).entered();
        Ok(self.subtotal(id, config)?.into_distribution())
    }

    /// Subtree total, memoized per `(node, config)`.
    ///
    /// Repeated calls with an equal config return the same `Arc`.
    pub fn final_cost(
        &self,
        id: NodeId,
        config: Option<&CostConfig>,
    ) -> Result<Arc<AnyDistribution>, DistributionError> {
        let _span =
            tracing::debug_span!(names::AGGREGATE, node = id.0, memoized = true).entered();
        self.check_valid(id);
        Ok(self.aggregate(id, config, true)?.into_distribution())
    }

    fn aggregate(
        &self,
        id: NodeId,
        config: Option<&CostConfig>,
        memoize: bool,
    ) -> Result<Subtotal, DistributionError> {
        let key = memoize.then(|| (id, config.cloned()));
        if let Some(hit) = key.as_ref().and_then(|k| self.memo.get(k)) {
            tracing::trace!(node = id.0, "memo hit");
            return Ok(hit);
        }
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let node = self.node(id);
        let mut total = self.own_cost(node, config)?;
        for &child in &node.children {
            let child_total = self.aggregate(child, config, memoize)?;
            total = total.combine(child_total, &self.numeric);
        }

        if let Some(key) = key {
            self.memo.insert(key, total.clone());
        }
        Ok(total)
    }

    /// The node's direct cost under `config`, before children.
    fn own_cost(
        &self,
        node: &Node,
        config: Option<&CostConfig>,
    ) -> Result<Subtotal, DistributionError> {
        let Some(distribution) = &node.distribution else {
            return Ok(Subtotal::Absent);
        };
        let Some(config) = config else {
            return Ok(Subtotal::Present(Arc::clone(distribution)));
        };
        // An unlabeled node is priced as the empty resource name.
        let multiplier = config.multiplier(node.resource.as_deref().unwrap_or(""));
        if multiplier > 0.0 {
            Ok(Subtotal::Present(Arc::new(scale(distribution, multiplier)?)))
        } else {
            Ok(Subtotal::Absent)
        }
    }
}

impl fmt::Debug for CostTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostTree")
            .field("nodes", &self.nodes.len())
            .field("memo_entries", &self.memo.entry_count())
            .field("evaluations", &self.evaluations())
            .finish()
    }
}

/// Borrowed view of one node with tree-aware navigation.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a CostTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    pub fn tag(&self) -> &'a str {
        self.node().tag()
    }

    pub fn data(&self) -> &'a str {
        self.node().data()
    }

    pub fn resource(&self) -> Option<&'a str> {
        self.node().resource()
    }

    pub fn distribution(&self) -> Option<&'a Arc<AnyDistribution>> {
        self.node().distribution()
    }

    pub fn diagnostic(&self) -> Option<&'a str> {
        self.node().diagnostic()
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| self.tree.node_ref(id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        self.node().children.iter().map(move |&id| tree.node_ref(id))
    }

    pub fn has_cost(&self) -> bool {
        self.tree.has_cost(self.id)
    }

    pub fn cost(
        &self,
        config: Option<&CostConfig>,
    ) -> Result<Arc<AnyDistribution>, DistributionError> {
        self.tree.cost(self.id, config)
    }

    pub fn final_cost(
        &self,
        config: Option<&CostConfig>,
    ) -> Result<Arc<AnyDistribution>, DistributionError> {
        self.tree.final_cost(self.id, config)
    }

    pub fn format_distribution(&self) -> String {
        self.tree.format_distribution(self.id)
    }

    pub fn outline(&self) -> String {
        self.tree.outline(self.id)
    }

    pub fn check_valid(&self) {
        self.tree.check_valid(self.id)
    }
}

#[cfg(test)]
mod tests {
    use tally_distributions::PointDistribution;

    use super::*;
    use crate::{NodeSpec, TreeBuilder};

    fn small_tree() -> CostTree {
        let mut builder = TreeBuilder::new(NodeSpec::new("root"));
        let root = builder.root();
        let one = PointDistribution::certain(1.0).unwrap();
        let a = builder
            .add_child(root, NodeSpec::new("a").with_distribution(one))
            .unwrap();
        builder.add_child(a, NodeSpec::new("a1")).unwrap();
        builder.build()
    }

    #[test]
    fn intact_tree_passes_check() {
        let tree = small_tree();
        tree.check_valid(tree.root());
    }

    #[test]
    #[should_panic(expected = "whose parent is")]
    fn broken_parent_link_panics() {
        let mut tree = small_tree();
        tree.nodes[2].parent = Some(NodeId(0));
        tree.check_valid(tree.root());
    }

    #[test]
    #[should_panic(expected = "whose parent is")]
    fn cost_checks_links_before_aggregating() {
        let mut tree = small_tree();
        tree.nodes[1].parent = None;
        let _ = tree.cost(tree.root(), None);
    }

    #[test]
    fn own_cost_without_distribution_is_absent() {
        let tree = small_tree();
        let leaf = tree.node(NodeId(2));
        assert!(tree.own_cost(leaf, None).unwrap().is_absent());
    }
}
