//! Provides the rooted tree built by agglomerative clustering.

use crate::model::node::{NodeIndex, UltrametricNode};
use std::mem;

/// Float comparison tolerance
const EPSILON: f64 = 1e-7;

// =$========================================================================$=
// ULTRAMETRIC TREE
// =$========================================================================$=
/// A rooted binary tree represented as parent list of [UltrametricNode]s.
///
/// # Structure
/// - Nodes `0..n` are the leaves, in matrix row order.
/// - Internal nodes follow in merge order; ages never decrease along the
///   list, so iterating the nodes by index visits children before parents.
/// - The root is the last node: it has no parent and NaN weight, and spans
///   all `n` leaves.
/// - A complete tree over `n > 0` leaves has `2n-1` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct UltrametricTree {
    num_leaves: usize,
    nodes: Vec<UltrametricNode>,
}

// ============================================================================
// Construction (crate)
// ============================================================================
impl UltrametricTree {
    /// Creates a forest of `num_leaves` isolated leaves.
    pub(crate) fn with_leaves(num_leaves: usize) -> Self {
        let mut nodes = Vec::with_capacity((2 * num_leaves).saturating_sub(1));
        nodes.resize(num_leaves, UltrametricNode::new_leaf());
        UltrametricTree { num_leaves, nodes }
    }

    /// Adds a parent of age `age` above the two given roots and returns its index.
    pub(crate) fn merge(&mut self, children: (NodeIndex, NodeIndex), age: f64) -> NodeIndex {
        let parent = self.nodes.len();
        let num_leaves = self.nodes[children.0].num_leaves() + self.nodes[children.1].num_leaves();
        self.nodes.push(UltrametricNode::new(num_leaves, age));
        self.nodes[children.0].set_parent(parent, age);
        self.nodes[children.1].set_parent(parent, age);
        parent
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl UltrametricTree {
    /// Returns the number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the number of nodes (leaves and internal).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the index of the root, the last node, or `None` if empty.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.nodes.len().checked_sub(1)
    }

    /// Returns the root node, or `None` if empty.
    pub fn root(&self) -> Option<&UltrametricNode> {
        self.nodes.last()
    }

    /// Returns the node at `index`, or `None` if out of bounds.
    pub fn node(&self, index: NodeIndex) -> Option<&UltrametricNode> {
        self.nodes.get(index)
    }

    /// Returns all nodes in index order.
    pub fn nodes(&self) -> &[UltrametricNode] {
        &self.nodes
    }

    /// Returns an iterator over all nodes in index order
    /// (children before parents).
    pub fn iter(&self) -> impl Iterator<Item = &UltrametricNode> {
        self.nodes.iter()
    }

    /// Returns the indices of the children of `index` in increasing order.
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent() == Some(index))
            .map(|(child, _)| child)
            .collect()
    }

    /// Returns the height of the tree, the age of the root (0 if empty).
    pub fn height(&self) -> f64 {
        self.root().map_or(0.0, |root| root.age())
    }

    /// Checks that every leaf has path length [height](Self::height) to the
    /// root (within floating point tolerance).
    pub fn is_ultrametric(&self) -> bool {
        let height = self.height();
        (0..self.num_leaves).all(|leaf| {
            let mut length = 0.0;
            let mut node = &self.nodes[leaf];
            while let Some(parent) = node.parent() {
                length += node.weight();
                node = &self.nodes[parent];
            }
            (length - height).abs() <= EPSILON * height.max(1.0)
        })
    }

    /// Partitions the leaves into `k` clusters by cutting the tree below its
    /// `k-1` topmost merges.
    ///
    /// Each cluster is the leaf set of a subtree whose parent is one of the
    /// last `k-1` nodes. Clusters are ordered by the index of their subtree
    /// root. `k` is clamped to `1..=num_leaves`.
    ///
    /// # Example
    /// ```
    /// use distree::{DistanceMatrix, Linkage};
    ///
    /// let d = DistanceMatrix::new(vec![
    ///     vec![0.0, 20.0, 17.0, 11.0],
    ///     vec![20.0, 0.0, 20.0, 13.0],
    ///     vec![17.0, 20.0, 0.0, 10.0],
    ///     vec![11.0, 13.0, 10.0, 0.0],
    /// ]);
    /// let tree = d.ultrametric(Linkage::Average);
    /// assert_eq!(tree.cut(2), vec![vec![1], vec![0, 2, 3]]);
    /// ```
    pub fn cut(&self, k: usize) -> Vec<Vec<usize>> {
        if self.num_leaves == 0 {
            return Vec::new();
        }
        let k = k.clamp(1, self.num_leaves);
        let cut = self.nodes.len() - (k - 1);

        let mut clusters = Vec::with_capacity(k);
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); cut];
        for (leaf, leaf_members) in members.iter_mut().enumerate().take(self.num_leaves) {
            leaf_members.push(leaf);
        }
        for index in 0..cut {
            let subtree = mem::take(&mut members[index]);
            match self.nodes[index].parent() {
                Some(parent) if parent < cut => members[parent].extend(subtree),
                _ => clusters.push(subtree),
            }
        }

        clusters
    }
}

impl std::ops::Index<NodeIndex> for UltrametricTree {
    type Output = UltrametricNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}
