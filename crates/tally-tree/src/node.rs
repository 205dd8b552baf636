//! Node handles, stored nodes, and the `NodeSpec` a front-end fills in.

use std::sync::Arc;

use tally_core::config::EstimateConfig;
use tally_core::errors::EstimateError;
use tally_distributions::{AnyDistribution, Estimate};

/// Handle to a node inside one [`CostTree`](crate::CostTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index; the root is always 0.
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a front-end knows about a node before it is attached.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub tag: String,
    /// Free-text payload, e.g. the task description.
    pub data: String,
    pub resource: Option<String>,
    /// The node's direct cost, independent of its children.
    pub distribution: Option<AnyDistribution>,
    /// Front-end annotation shown in outlines, e.g. a parser warning.
    pub diagnostic: Option<String>,
}

impl NodeSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_distribution(mut self, distribution: impl Into<AnyDistribution>) -> Self {
        self.distribution = Some(distribution.into());
        self
    }

    /// Parse an estimate expression like `(10-75)` into this node's cost.
    pub fn with_estimate(self, estimate: &str) -> Result<Self, EstimateError> {
        self.with_estimate_config(estimate, &EstimateConfig::default())
    }

    /// [`with_estimate`](Self::with_estimate), fitting ranges at `config`'s
    /// quantiles instead of 10%/75%.
    pub fn with_estimate_config(
        self,
        estimate: &str,
        config: &EstimateConfig,
    ) -> Result<Self, EstimateError> {
        let distribution = estimate.parse::<Estimate>()?.to_distribution(config)?;
        Ok(self.with_distribution(distribution))
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }
}

/// A node as stored in the tree arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) data: String,
    pub(crate) resource: Option<String>,
    pub(crate) distribution: Option<Arc<AnyDistribution>>,
    pub(crate) diagnostic: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn from_spec(spec: NodeSpec, parent: Option<NodeId>) -> Self {
        Self {
            tag: spec.tag,
            data: spec.data,
            resource: spec.resource,
            distribution: spec.distribution.map(Arc::new),
            diagnostic: spec.diagnostic,
            parent,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn distribution(&self) -> Option<&Arc<AnyDistribution>> {
        self.distribution.as_ref()
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
