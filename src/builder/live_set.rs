//! Bookkeeping of the clusters still available for merging.

use crate::model::NodeIndex;

/// Live matrix indices of a shrinking distance matrix, and the tree node
/// each of them currently stands for.
///
/// Merging two clusters `d1` and `d2` reuses row/column `d1` of the matrix
/// for the new cluster and drops `d2`, so the matrix never has to be
/// reallocated; indices of dropped rows are simply no longer listed.
#[derive(Debug, Clone)]
pub(crate) struct LiveSet {
    /// Live matrix indices in scan order
    indices: Vec<usize>,
    /// Node currently represented by each matrix index
    nodes: Vec<NodeIndex>,
}

impl LiveSet {
    /// All `size` indices live, index `i` representing leaf `i`.
    pub(crate) fn new(size: usize) -> Self {
        LiveSet {
            indices: (0..size).collect(),
            nodes: (0..size).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Node represented by matrix index `index`.
    pub(crate) fn node(&self, index: usize) -> NodeIndex {
        self.nodes[index]
    }

    /// Lets matrix index `index` represent `node` from now on.
    pub(crate) fn replace(&mut self, index: usize, node: NodeIndex) {
        self.nodes[index] = node;
    }

    /// Drops the index at `position` in scan order; the last live index
    /// takes its place.
    pub(crate) fn swap_remove(&mut self, position: usize) {
        self.indices.swap_remove(position);
    }

    /// Drops the index at `position` in scan order, keeping the order of
    /// the remaining ones.
    pub(crate) fn remove(&mut self, position: usize) {
        self.indices.remove(position);
    }
}
