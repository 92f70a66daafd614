//! Data model for the trees built from distance matrices.
//!
//! # Tree representation
//! Both tree types use the arena pattern: nodes are stored in a vector and
//! referenced by [NodeIndex]. Nodes `0..n` are the leaves, corresponding
//! 1:1 to the rows of the input matrix; nodes `n..` are internal nodes
//! created during construction, in creation order.
//!
//! | Type | Shape | Built by |
//! |------|-------|----------|
//! | [UltrametricTree] | Rooted, binary; parent list with ages | [UltrametricBuilder](crate::builder::UltrametricBuilder) |
//! | [UnrootedTree] | Unrooted; adjacency lists of [HalfEdge]s | [NeighborJoinBuilder](crate::builder::NeighborJoinBuilder), [AdditiveTreeBuilder](crate::builder::AdditiveTreeBuilder) |
//!
//! # Edge weights of unrooted trees
//! Each undirected edge is stored as two [HalfEdge]s, one at each endpoint,
//! which share an [EdgeIndex] into a single list of weights. A weight is
//! therefore stored once and never duplicated.

pub mod node;
pub mod ultrametric_tree;
pub mod unrooted_tree;

pub use node::{EdgeIndex, HalfEdge, NodeIndex, UltrametricNode};
pub use ultrametric_tree::UltrametricTree;
pub use unrooted_tree::UnrootedTree;
