//! Neighbor joining into an unrooted binary tree.

use crate::builder::live_set::LiveSet;
use crate::matrix::DistanceMatrix;
use crate::model::{NodeIndex, UnrootedTree};
use log::{debug, trace};

/// A join of two nodes below a new internal node, recorded on the way down
/// and turned into edges on the way back up.
#[derive(Debug, Clone, Copy)]
struct Join {
    node: NodeIndex,
    children: (NodeIndex, NodeIndex),
    limbs: (f64, f64),
}

// =#========================================================================#=
// NEIGHBOR JOIN BUILDER
// =#========================================================================#=
/// Builds an unrooted [UnrootedTree] by neighbor joining.
///
/// In each round, with `m` clusters left and total distances
/// `td[i] = Σ_j d[i][j]`, the pair minimizing the Q-criterion
/// `(m-2)·d[i][j] - td[i] - td[j]` is joined below a new internal node.
/// The joined pair is replaced by the new node with distances
/// `(d[i][k] + d[j][k] - d[i][j]) / 2`. The last two clusters are connected
/// by a single edge.
///
/// For `n >= 3` leaves the result is binary: `2n-2` nodes, `2n-3` edges,
/// and every internal node has degree 3. Internal nodes are numbered in
/// join order, edges are numbered from the last join back to the first.
///
/// # Example
/// ```
/// use distree::{DistanceMatrix, NeighborJoinBuilder};
///
/// let d = DistanceMatrix::new(vec![
///     vec![0.0, 23.0, 27.0, 20.0],
///     vec![23.0, 0.0, 30.0, 28.0],
///     vec![27.0, 30.0, 0.0, 30.0],
///     vec![20.0, 28.0, 30.0, 0.0],
/// ]);
/// let tree = NeighborJoinBuilder::new().build(d);
/// assert_eq!(tree.num_nodes(), 6);
/// assert_eq!(tree.path_length(1, 2), Some(30.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborJoinBuilder;

impl NeighborJoinBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        NeighborJoinBuilder
    }

    /// Builds the tree, consuming the matrix as working space.
    ///
    /// Fewer than two rows give isolated leaves without edges.
    pub fn build(&self, mut matrix: DistanceMatrix) -> UnrootedTree {
        let size = matrix.size();
        let num_nodes = if size < 2 { size } else { 2 * size - 2 };
        let mut tree = UnrootedTree::with_nodes(size, num_nodes);
        if size < 2 {
            return tree;
        }

        let mut live = LiveSet::new(size);
        let mut totals = vec![0.0; size];
        let mut joins = Vec::with_capacity(size - 2);

        // Reduce down to two clusters
        while live.len() > 2 {
            let m = live.len();
            for &i in live.indices() {
                totals[i] = live.indices().iter().map(|&j| matrix[(i, j)]).sum();
            }

            let Some((d1, d2, position)) = closest(&matrix, live.indices(), &totals) else {
                break;
            };
            let delta = (totals[d2] - totals[d1]) / (m - 2) as f64;
            let d21 = matrix[(d2, d1)];
            let join = Join {
                node: size + joins.len(),
                children: (live.node(d1), live.node(d2)),
                limbs: ((d21 - delta) / 2.0, (d21 + delta) / 2.0),
            };
            trace!(
                "joining nodes {} and {} below {}",
                join.children.0, join.children.1, join.node
            );

            // d1 now stands for the new node, d2 is dropped
            for &j in live.indices() {
                if j != d1 {
                    let dist = (matrix[(d1, j)] + matrix[(d2, j)] - d21) / 2.0;
                    matrix.set_symmetric(d1, j, dist);
                }
            }
            live.replace(d1, join.node);
            live.remove(position);
            joins.push(join);
        }

        // Connect the last two clusters
        let (a, b) = (live.indices()[0], live.indices()[1]);
        tree.add_edge(live.node(a), live.node(b), matrix[(a, b)]);

        // Attach limbs, last join first
        for join in joins.iter().rev() {
            tree.add_edge(join.node, join.children.0, join.limbs.0);
            tree.add_edge(join.node, join.children.1, join.limbs.1);
        }

        debug!(
            "built neighbor-joining tree over {} leaves: {} nodes, {} edges",
            size,
            tree.num_nodes(),
            tree.num_edges()
        );
        tree
    }
}

/// Finds the live pair minimizing the Q-criterion.
///
/// Scans positions `a` over the live list and `b < a`; the first minimum
/// found wins. Returns `(d1, d2, position of d2)` with `d1` before `d2` in
/// the live list.
fn closest(matrix: &DistanceMatrix, live: &[usize], totals: &[f64]) -> Option<(usize, usize, usize)> {
    let factor = live.len().saturating_sub(2) as f64;
    let mut best: Option<(f64, usize, usize)> = None;
    for a in 1..live.len() {
        let i = live[a];
        for &j in &live[..a] {
            let q = factor * matrix[(i, j)] - totals[i] - totals[j];
            if best.is_none_or(|(min, ..)| q < min) {
                best = Some((q, j, a));
            }
        }
    }
    best.map(|(_, d1, position)| (d1, live[position], position))
}
