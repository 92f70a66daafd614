//! Tree construction from distance matrices.
//!
//! Three builders are provided, each producing a tree whose leaves `0..n`
//! are the rows of the input matrix:
//!
//! | Builder | Output | Method |
//! |---------|--------|--------|
//! | [UltrametricBuilder] | [UltrametricTree](crate::model::UltrametricTree) | UPGMA or single linkage, see [Linkage] |
//! | [NeighborJoinBuilder] | [UnrootedTree](crate::model::UnrootedTree) | Neighbor joining (Q-criterion) |
//! | [AdditiveTreeBuilder] | [UnrootedTree](crate::model::UnrootedTree) | Additive phylogeny (leaf insertion) |
//!
//! The two reduction builders take ownership of their matrix and shrink it
//! while merging; clone first if you still need it, or use the
//! non-consuming methods on [DistanceMatrix](crate::DistanceMatrix).
//!
//! Builders trust their input. They do not validate the matrix and produce
//! meaningless (possibly NaN-laden) trees on invalid input. Use
//! [DistanceMatrix::validate](crate::DistanceMatrix::validate) and
//! [DistanceMatrix::additive](crate::DistanceMatrix::additive) beforehand.
//!
//! # Ties
//! When several pairs are equally close, the first pair found in scan order
//! is joined; the smaller matrix index always comes first. This makes
//! results deterministic.

pub mod additive;
mod live_set;
pub mod neighbor_join;
pub mod ultrametric;

pub use additive::AdditiveTreeBuilder;
pub use neighbor_join::NeighborJoinBuilder;
pub use ultrametric::{Linkage, UltrametricBuilder};
