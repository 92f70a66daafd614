//! Additive phylogeny: reconstruction of the tree of an additive matrix.
//!
//! # Algorithm
//! Leaves are inserted one by one into a growing unrooted tree. Starting
//! with the single edge between leaves 0 and 1, leaf `j` is added using
//! only the `(j+1)×(j+1)` upper-left submatrix:
//!
//! 1. With `k = j-1`, find `i < k` minimizing
//!    `d[i][j] + d[j][k] - d[i][k]`; half of this minimum is the *limb
//!    weight* of `j`, the length of its pendant edge.
//! 2. The limb attaches on the path between `i` and `k`, at distance
//!    `x = d[i][j] - limb` from `i`.
//! 3. Walk the path from `i` towards `k`, consuming edge weights from `x`.
//!    If `x` reaches 0 at a node, attach `j` there; if it runs out inside
//!    an edge, subdivide the edge by a new internal node and attach `j` to
//!    that.
//!
//! For an additive matrix, the path length between any two leaves of the
//! result equals their matrix distance. Runs in O(n²) for `n` leaves.

use crate::matrix::DistanceMatrix;
use crate::model::{NodeIndex, UnrootedTree};
use fixedbitset::FixedBitSet;
use log::{debug, trace};

// =#========================================================================#=
// ADDITIVE TREE BUILDER
// =#========================================================================#=
/// Builds the unrooted [UnrootedTree] realizing an additive matrix.
///
/// The matrix must be additive (see
/// [DistanceMatrix::additive](crate::DistanceMatrix::additive)); otherwise
/// the result is undefined. The matrix is only read.
///
/// # Example
/// ```
/// use distree::{AdditiveTreeBuilder, DistanceMatrix};
///
/// let d = DistanceMatrix::new(vec![
///     vec![0.0, 13.0, 21.0, 22.0],
///     vec![13.0, 0.0, 12.0, 13.0],
///     vec![21.0, 12.0, 0.0, 13.0],
///     vec![22.0, 13.0, 13.0, 0.0],
/// ]);
/// let tree = AdditiveTreeBuilder::new(&d).build();
/// assert_eq!(tree.leaf_distances(), d);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdditiveTreeBuilder<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> AdditiveTreeBuilder<'a> {
    /// Creates a builder for the given (additive) matrix.
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        AdditiveTreeBuilder { matrix }
    }

    /// Builds the tree.
    ///
    /// Fewer than two rows give isolated leaves without edges.
    pub fn build(&self) -> UnrootedTree {
        let d = self.matrix;
        let size = d.size();
        let mut tree = UnrootedTree::with_nodes(size, size);
        if size < 2 {
            return tree;
        }

        tree.add_edge(0, 1, d[(0, 1)]);
        for leaf in 2..size {
            let (limb, i, k) = self.limb_weight(leaf);
            let x = d[(i, leaf)] - limb;
            let attachment = attachment_point(&mut tree, k, i, x);
            tree.add_edge(leaf, attachment, limb);
            trace!("attached leaf {leaf} to node {attachment} with limb weight {limb}");
        }

        debug!(
            "built additive tree over {} leaves: {} nodes, {} edges",
            size,
            tree.num_nodes(),
            tree.num_edges()
        );
        tree
    }

    /// Computes the limb weight of leaf `j` within the submatrix `d[..=j][..=j]`.
    ///
    /// Returns the limb weight and the two leaves `i < k = j-1` such that the
    /// limb of `j` attaches to the path between them.
    ///
    /// Requires `j >= 2`.
    fn limb_weight(&self, j: usize) -> (f64, usize, usize) {
        let d = self.matrix;
        let k = j - 1;
        let djk = d[(j, k)];
        let mut i_min = k - 1;
        let mut twice_min = d[(j, i_min)] + djk - d[(k, i_min)];
        for i in 0..k - 1 {
            let twice = d[(j, i)] + djk - d[(k, i)];
            if twice < twice_min {
                twice_min = twice;
                i_min = i;
            }
        }
        (twice_min / 2.0, i_min, k)
    }
}

/// Finds (or creates) the node on the path from `start` to `target` that
/// lies at distance `x` from `target`.
///
/// Walks the path back from `target` towards `start`, subtracting edge
/// weights from `x`. Stops at the node where `x` reaches exactly 0, or
/// subdivides the edge in which `x` runs out. Reaching `start` also stops
/// the walk.
fn attachment_point(tree: &mut UnrootedTree, start: NodeIndex, target: NodeIndex, mut x: f64) -> NodeIndex {
    for (u, half) in path(tree, start, target).into_iter().rev() {
        let edge = tree.neighbors(u)[half];
        if x == 0.0 {
            return edge.to;
        }
        let weight = tree.weight(edge.edge);
        if x < weight {
            return tree.split_edge(u, half, x);
        }
        x -= weight;
    }
    start
}

/// Returns the path from `start` to `target` as a list of steps `(u, half)`,
/// where `half` is the position in the list of `u` of the half-edge taken.
///
/// Empty if `start == target` or if `target` is not reachable.
fn path(tree: &UnrootedTree, start: NodeIndex, target: NodeIndex) -> Vec<(NodeIndex, usize)> {
    // Step by which each node was reached during the depth-first search
    let mut reached_by: Vec<Option<(NodeIndex, usize)>> = vec![None; tree.num_nodes()];
    let mut visited = FixedBitSet::with_capacity(tree.num_nodes());
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(node) = stack.pop() {
        if node == target {
            break;
        }
        for (half, edge) in tree.neighbors(node).iter().enumerate() {
            if !visited.put(edge.to) {
                reached_by[edge.to] = Some((node, half));
                stack.push(edge.to);
            }
        }
    }

    let mut steps = Vec::new();
    let mut node = target;
    while let Some((previous, half)) = reached_by[node] {
        steps.push((previous, half));
        node = previous;
    }
    steps.reverse();
    steps
}
