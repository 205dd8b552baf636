//! # tally-tree
//!
//! A tree of work items, each optionally carrying a `(resource,
//! distribution)` cost, aggregated bottom-up into subtree totals.
//!
//! Trees are assembled with [`TreeBuilder`] and are immutable afterwards.
//! Nodes live in an arena and refer to each other by [`NodeId`], so a node
//! can be attached exactly once and cycles cannot be expressed.
//!
//! ## Resource filtering
//!
//! Under a [`CostConfig`](tally_core::CostConfig), a node's own cost is
//! scaled by its resource's multiplier, or dropped entirely when the
//! resource is unlisted or priced `<= 0`. Dropped subtrees are *absent*,
//! not zero: they vanish from a parent's sum instead of adding a zero
//! term. Only the final reported value turns absence into
//! [`ZERO`](tally_distributions::ZERO).

pub mod builder;
pub mod node;
pub mod outline;
pub mod subtotal;
pub mod tree;

pub use builder::TreeBuilder;
pub use node::{Node, NodeId, NodeSpec};
pub use subtotal::Subtotal;
pub use tree::{CostTree, NodeRef};
