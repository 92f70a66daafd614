//! Distree is a library to build cluster trees and phylogenetic trees from
//! distance matrices.
//!
//! This crate turns an n×n [DistanceMatrix] into a dendrogram or an
//! unrooted phylogenetic tree.
//! Core functionality provided:
//! - Validation: check a matrix for squareness, non-negativity, symmetry,
//!   zero diagonal and the triangle inequality, and test whether it is
//!   additive (four-point condition).
//! - Ultrametric trees: agglomerative clustering with average linkage
//!   (UPGMA) or single linkage into a rooted tree with node ages; the tree
//!   can be cut into `k` flat clusters.
//! - Neighbor joining: unrooted binary tree via the Q-criterion.
//! - Additive phylogeny: reconstruction of the unique tree whose leaf-to-leaf
//!   path lengths equal an additive matrix.
//! - Random additive matrices from random weighted trees, for testing.
//! - Tree models:
//!   - [UltrametricTree]: parent list with per-node age and edge weight.
//!   - [UnrootedTree]: adjacency lists whose edges share one weight list.
//!   - Both models use the arena pattern; leaves are nodes `0..n` in matrix
//!     row order. See [crate::model] for more details.
//!
//! Limitations:
//! - Builders trust their input and do not validate the matrix
//! - All algorithms are sequential and in-memory
//!
//! # Usage patterns
//! 1. The functions at the crate root give quick access with default
//!    settings, e.g. [build_ultrametric] or [build_neighbor_join].
//! 2. Configure a builder from [crate::builder], e.g. an
//!    [UltrametricBuilder] with a [Linkage], for full control.
//!
//! # Example
//! ```
//! use distree::{DistanceMatrix, Linkage};
//!
//! let d = DistanceMatrix::new(vec![
//!     vec![0.0, 13.0, 21.0, 22.0],
//!     vec![13.0, 0.0, 12.0, 13.0],
//!     vec![21.0, 12.0, 0.0, 13.0],
//!     vec![22.0, 13.0, 13.0, 0.0],
//! ]);
//! distree::validate(&d)?;
//! distree::is_additive(&d)?;
//!
//! let tree = distree::build_additive_tree(&d);
//! assert_eq!(tree.num_nodes(), 6);
//! assert_eq!(tree.path_length(0, 3), Some(22.0));
//!
//! let dendrogram = distree::build_ultrametric(d.clone(), Linkage::Average);
//! assert_eq!(dendrogram.num_nodes(), 7);
//! # Ok::<(), distree::MatrixError>(())
//! ```
//!
//! # Logging
//! Builders report through the [log] facade (`debug` per build, `trace` per
//! merge or insertion); install any logger to see the output.

pub mod builder;
pub mod matrix;
pub mod model;

pub use builder::{AdditiveTreeBuilder, Linkage, NeighborJoinBuilder, UltrametricBuilder};
pub use matrix::{DistanceMatrix, MatrixError, MatrixErrorKind, RandomTree, random_additive_matrix};
pub use model::{HalfEdge, UltrametricNode, UltrametricTree, UnrootedTree};

// ============================================================================
// QUICK API (pub)
// ============================================================================
/// Validates `matrix` as metric distance matrix.
///
/// # Returns
/// * `Ok(())` - If the matrix is square, non-negative, symmetric, has a zero
///   diagonal and satisfies the triangle inequality
/// * [MatrixError] - The first violated condition with offending indices
pub fn validate(matrix: &DistanceMatrix) -> Result<(), MatrixError> {
    matrix.validate()
}

/// Tests whether `matrix` is additive (four-point condition).
///
/// # Returns
/// * `Ok(())` - If the matrix is additive
/// * [MatrixError::NotAdditive] - The first failing quadruple `(i, j, k, l)`
pub fn is_additive(matrix: &DistanceMatrix) -> Result<(), MatrixError> {
    matrix.additive()
}

/// Builds a rooted ultrametric tree, consuming `matrix`.
///
/// See [UltrametricBuilder]; use [DistanceMatrix::ultrametric] to keep the
/// matrix.
pub fn build_ultrametric(matrix: DistanceMatrix, linkage: Linkage) -> UltrametricTree {
    UltrametricBuilder::new(linkage).build(matrix)
}

/// Builds an unrooted tree by neighbor joining, consuming `matrix`.
///
/// See [NeighborJoinBuilder]; use [DistanceMatrix::neighbor_join] to keep
/// the matrix.
pub fn build_neighbor_join(matrix: DistanceMatrix) -> UnrootedTree {
    NeighborJoinBuilder::new().build(matrix)
}

/// Reconstructs the unrooted tree of an additive `matrix`.
///
/// See [AdditiveTreeBuilder]. The result is undefined if the matrix is not
/// additive; check with [is_additive] first.
pub fn build_additive_tree(matrix: &DistanceMatrix) -> UnrootedTree {
    AdditiveTreeBuilder::new(matrix).build()
}
