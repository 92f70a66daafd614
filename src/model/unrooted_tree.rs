//! Provides the unrooted tree built by neighbor joining and additive phylogeny.

use crate::matrix::DistanceMatrix;
use crate::model::node::{EdgeIndex, HalfEdge, NodeIndex};
use fixedbitset::FixedBitSet;
use std::fmt;

// =$========================================================================$=
// UNROOTED TREE
// =$========================================================================$=
/// An unrooted tree with weighted edges, stored as adjacency lists.
///
/// # Structure
/// - Nodes `0..n` are the leaves, in matrix row order; internal nodes follow.
/// - Node `u` lists a [HalfEdge] `(v, e)` for each incident edge, and `v`
///   lists the reciprocal `(u, e)`.
/// - The weight of edge `e` is stored once, at `edge_weights()[e]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrootedTree {
    num_leaves: usize,
    adjacency: Vec<Vec<HalfEdge>>,
    weights: Vec<f64>,
}

// ============================================================================
// Construction (crate)
// ============================================================================
impl UnrootedTree {
    /// Creates `num_nodes` isolated nodes of which the first `num_leaves` are leaves.
    pub(crate) fn with_nodes(num_leaves: usize, num_nodes: usize) -> Self {
        UnrootedTree {
            num_leaves,
            adjacency: vec![Vec::new(); num_nodes.max(num_leaves)],
            weights: Vec::with_capacity(num_nodes.saturating_sub(1)),
        }
    }

    /// Adds an edge between `a` and `b` and returns its index.
    pub(crate) fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: f64) -> EdgeIndex {
        let edge = self.weights.len();
        self.weights.push(weight);
        self.adjacency[a].push(HalfEdge::new(b, edge));
        self.adjacency[b].push(HalfEdge::new(a, edge));
        edge
    }

    /// Subdivides an edge by a new node and returns the new node.
    ///
    /// The edge is given as the half-edge at position `half` in the list of
    /// `u`, leading to `w`. The new node `v` lies at distance `x` from `w`:
    /// - edge `(u, v)` keeps the edge index, with weight reduced by `x`
    /// - edge `(v, w)` gets a new edge index with weight `x`
    ///
    /// Both halves of the old edge are redirected to `v` before returning.
    pub(crate) fn split_edge(&mut self, u: NodeIndex, half: usize, x: f64) -> NodeIndex {
        let HalfEdge { to: w, edge } = self.adjacency[u][half];
        let v = self.adjacency.len();

        self.adjacency[u][half].to = v;
        self.weights[edge] -= x;

        let new_edge = self.weights.len();
        self.weights.push(x);
        if let Some(back) = self.adjacency[w].iter_mut().find(|h| h.to == u) {
            *back = HalfEdge::new(v, new_edge);
        }

        self.adjacency
            .push(vec![HalfEdge::new(u, edge), HalfEdge::new(w, new_edge)]);
        v
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl UnrootedTree {
    /// Returns the number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the number of nodes (leaves and internal).
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.weights.len()
    }

    /// Returns the half-edges at `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    pub fn neighbors(&self, node: NodeIndex) -> &[HalfEdge] {
        &self.adjacency[node]
    }

    /// Returns the number of edges incident to `node`.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency[node].len()
    }

    /// Returns the weight of edge `edge`.
    pub fn weight(&self, edge: EdgeIndex) -> f64 {
        self.weights[edge]
    }

    /// Returns all edge weights, indexed by [EdgeIndex].
    pub fn edge_weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns each edge once as `(u, v, weight)`, where `u` is the endpoint
    /// with the smaller index.
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex, f64)> {
        let mut edges = Vec::with_capacity(self.weights.len());
        for (u, halves) in self.adjacency.iter().enumerate() {
            for half in halves.iter().filter(|h| u < h.to) {
                edges.push((u, half.to, self.weights[half.edge]));
            }
        }
        edges
    }

    /// Returns the length of the path between nodes `a` and `b`, or `None`
    /// if they are not connected.
    pub fn path_length(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        let mut visited = FixedBitSet::with_capacity(self.adjacency.len());
        let mut stack = vec![(a, 0.0)];
        visited.insert(a);
        while let Some((node, length)) = stack.pop() {
            if node == b {
                return Some(length);
            }
            for half in &self.adjacency[node] {
                if !visited.put(half.to) {
                    stack.push((half.to, length + self.weights[half.edge]));
                }
            }
        }
        None
    }

    /// Returns the matrix of path lengths between all pairs of leaves.
    ///
    /// For a tree built from an additive matrix, this reproduces the matrix.
    /// Unconnected pairs get an infinite distance.
    pub fn leaf_distances(&self) -> DistanceMatrix {
        let mut d = DistanceMatrix::zeros(self.num_leaves);
        for i in 0..self.num_leaves {
            for j in 0..i {
                let length = self.path_length(i, j).unwrap_or(f64::INFINITY);
                d.set_symmetric(i, j, length);
            }
        }
        d
    }

    /// Validates the structure of the tree.
    ///
    /// Checks:
    /// - All half-edges point to existing nodes and edge indices
    /// - Each half-edge has a reciprocal half with the same edge index
    /// - Each edge index is used by exactly two half-edges
    /// - The tree is connected and acyclic (if it has any edges)
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let num_nodes = self.adjacency.len();
        let mut uses = vec![0_usize; self.weights.len()];

        for (u, halves) in self.adjacency.iter().enumerate() {
            for half in halves {
                if half.to >= num_nodes || half.edge >= self.weights.len() {
                    return false;
                }
                if !self.adjacency[half.to].contains(&HalfEdge::new(u, half.edge)) {
                    return false;
                }
                uses[half.edge] += 1;
            }
        }
        if uses.iter().any(|&count| count != 2) {
            return false;
        }

        if self.weights.is_empty() {
            return true;
        }
        self.weights.len() + 1 == num_nodes && (1..num_nodes).all(|v| self.path_length(0, v).is_some())
    }

    /// Consumes the tree and returns its adjacency lists and edge weights.
    pub fn into_parts(self) -> (Vec<Vec<HalfEdge>>, Vec<f64>) {
        (self.adjacency, self.weights)
    }
}

/// One line per half-edge, e.g. `4: to 5 label 3 weight 4`.
impl fmt::Display for UnrootedTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (node, halves) in self.adjacency.iter().enumerate() {
            for half in halves {
                writeln!(
                    f,
                    "{}: to {} label {} weight {}",
                    node, half.to, half.edge, self.weights[half.edge]
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_edge() -> UnrootedTree {
        let mut tree = UnrootedTree::with_nodes(2, 2);
        tree.add_edge(0, 1, 10.0);
        tree
    }

    #[test]
    fn test_add_edge() {
        let tree = single_edge();
        assert_eq!(tree.num_edges(), 1);
        assert_eq!(tree.neighbors(0), &[HalfEdge::new(1, 0)]);
        assert_eq!(tree.neighbors(1), &[HalfEdge::new(0, 0)]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_split_edge() {
        let mut tree = single_edge();
        let v = tree.split_edge(0, 0, 3.0);

        assert_eq!(v, 2);
        assert_eq!(tree.neighbors(0), &[HalfEdge::new(2, 0)]);
        assert_eq!(tree.neighbors(1), &[HalfEdge::new(2, 1)]);
        assert_eq!(tree.neighbors(2), &[HalfEdge::new(0, 0), HalfEdge::new(1, 1)]);
        assert_eq!(tree.edge_weights(), &[7.0, 3.0]);
        assert_eq!(tree.path_length(0, 1), Some(10.0));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_invalid_tree() {
        let mut tree = UnrootedTree::with_nodes(3, 3);
        tree.add_edge(0, 1, 10.0);
        assert_eq!(tree.path_length(0, 2), None);
        // Two edges, three nodes, but node 2 is unconnected and 0-1 is doubled
        tree.add_edge(0, 1, 1.0);
        assert!(!tree.is_valid());
    }

    #[test]
    fn test_display() {
        let tree = single_edge();
        assert_eq!(
            tree.to_string(),
            "0: to 1 label 0 weight 10\n1: to 0 label 0 weight 10\n"
        );
    }
}
