//! Agglomerative clustering into a rooted ultrametric tree (UPGMA and
//! single linkage).

use crate::builder::live_set::LiveSet;
use crate::matrix::DistanceMatrix;
use crate::model::UltrametricTree;
use log::{debug, trace};

// =#========================================================================#=
// LINKAGE
// =#========================================================================#=
/// Rule for the distance between a merged cluster and any other cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linkage {
    /// UPGMA: mean of the two distances, weighted by cluster sizes
    #[default]
    Average,
    /// Single linkage: minimum of the two distances
    Minimum,
}

impl Linkage {
    /// Distance of the merge of clusters 1 and 2 (with `size1` and `size2`
    /// leaves) to a third cluster at distances `dist1` and `dist2`.
    pub fn combine(self, dist1: f64, dist2: f64, size1: usize, size2: usize) -> f64 {
        match self {
            Linkage::Average => {
                let (size1, size2) = (size1 as f64, size2 as f64);
                (dist1 * size1 + dist2 * size2) / (size1 + size2)
            }
            Linkage::Minimum => {
                if dist2 < dist1 {
                    dist2
                } else {
                    dist1
                }
            }
        }
    }
}

// =#========================================================================#=
// ULTRAMETRIC BUILDER
// =#========================================================================#=
/// Builds a rooted binary [UltrametricTree] by repeatedly merging the two
/// closest clusters.
///
/// Each merge creates a parent of age `d/2`, where `d` is the distance of
/// the merged clusters, and replaces the two clusters by the merge, with
/// distances to the remaining clusters given by the [Linkage].
///
/// # Example
/// ```
/// use distree::{DistanceMatrix, Linkage, UltrametricBuilder};
///
/// let d = DistanceMatrix::new(vec![
///     vec![0.0, 20.0, 17.0, 11.0],
///     vec![20.0, 0.0, 20.0, 13.0],
///     vec![17.0, 20.0, 0.0, 10.0],
///     vec![11.0, 13.0, 10.0, 0.0],
/// ]);
/// let tree = UltrametricBuilder::new(Linkage::Average).build(d);
/// assert_eq!(tree.num_nodes(), 7);
/// assert_eq!(tree[4].age(), 5.0); // leaves 2 and 3 merge first
/// assert_eq!(tree.root_index(), Some(6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UltrametricBuilder {
    linkage: Linkage,
}

impl UltrametricBuilder {
    /// Creates a builder using the given linkage.
    pub fn new(linkage: Linkage) -> Self {
        UltrametricBuilder { linkage }
    }

    /// Returns the configured linkage.
    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// Builds the tree, consuming the matrix as working space.
    ///
    /// Performs exactly `n-1` merges for `n` leaves; the root is the last
    /// node. An empty matrix gives an empty tree, a single row a lone leaf.
    pub fn build(&self, mut matrix: DistanceMatrix) -> UltrametricTree {
        let size = matrix.size();
        let mut tree = UltrametricTree::with_leaves(size);
        let mut live = LiveSet::new(size);

        while let Some((d1, d2, position)) = closest(&matrix, live.indices()) {
            let (c1, c2) = (live.node(d1), live.node(d2));
            let (size1, size2) = (tree[c1].num_leaves(), tree[c2].num_leaves());

            let age = matrix[(d2, d1)] / 2.0;
            let parent = tree.merge((c1, c2), age);
            trace!("merged nodes {c1} and {c2} into {parent} at age {age}");

            if live.len() == 2 {
                break;
            }

            // d1 now stands for the merge, d2 is dropped
            live.replace(d1, parent);
            for &j in live.indices() {
                if j != d1 {
                    let dist = self.linkage.combine(matrix[(d1, j)], matrix[(d2, j)], size1, size2);
                    matrix.set_symmetric(d1, j, dist);
                }
            }
            live.swap_remove(position);
        }

        debug!(
            "built ultrametric tree ({:?} linkage) over {} leaves, height {}",
            self.linkage,
            size,
            tree.height()
        );
        tree
    }
}

/// Finds the closest pair `(i, j)` of live indices with `i < j`, together
/// with the position of `j` in `live`.
///
/// Scans `i` and `j` in the order of `live`; the first minimum found wins.
/// Returns `None` if fewer than two indices are live.
fn closest(matrix: &DistanceMatrix, live: &[usize]) -> Option<(usize, usize, usize)> {
    let mut best: Option<(f64, usize, usize, usize)> = None;
    for &i in live {
        for (position, &j) in live.iter().enumerate() {
            if i < j {
                let dist = matrix[(i, j)];
                if best.is_none_or(|(min, ..)| dist < min) {
                    best = Some((dist, i, j, position));
                }
            }
        }
    }
    best.map(|(_, i, j, position)| (i, j, position))
}
