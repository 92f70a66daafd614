//! Random trees and the additive distance matrices they induce.
//!
//! Mostly useful for testing the tree builders: a matrix of leaf-to-leaf
//! path lengths in a weighted tree is additive by construction, so
//! [AdditiveTreeBuilder](crate::builder::AdditiveTreeBuilder) must recover
//! its distances exactly.
//!
//! The random source is always passed in, so results are reproducible
//! with a seeded generator:
//! ```
//! use distree::random_additive_matrix;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let d = random_additive_matrix(10, &mut rng);
//! assert!(d.additive().is_ok());
//! ```

use crate::matrix::DistanceMatrix;
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use std::ops::Range;

/// Default range of integral edge weights.
pub const DEFAULT_WEIGHTS: Range<u32> = 10..100;

/// Generates a random additive matrix of size `num_leaves` from a
/// [RandomTree] with [DEFAULT_WEIGHTS].
pub fn random_additive_matrix<R: Rng + ?Sized>(num_leaves: usize, rng: &mut R) -> DistanceMatrix {
    RandomTree::generate(num_leaves, DEFAULT_WEIGHTS, rng).distance_matrix()
}

// =#========================================================================#=
// RANDOM TREE
// =#========================================================================#=
/// A random rooted binary tree as parent list.
///
/// Leaves are nodes `0..n`, internal nodes `n..2n-1`, the root is last.
/// Every parent has a larger index than its children.
#[derive(Debug, Clone)]
pub struct RandomTree {
    num_leaves: usize,
    parents: Vec<Option<usize>>,
    /// Weight of the edge to the parent; NaN for the root
    weights: Vec<f64>,
    /// Number of edges between node and root
    depths: Vec<usize>,
}

impl RandomTree {
    /// Generates a tree by repeatedly joining two random clusters under a
    /// new parent, each new edge getting a random weight from `weights`.
    ///
    /// Integral ranges such as [DEFAULT_WEIGHTS] give matrices with exact
    /// path sums; float ranges give fractional weights.
    ///
    /// # Panics
    /// Panics if `weights` is empty (and `num_leaves > 1`).
    pub fn generate<T, R>(num_leaves: usize, weights: Range<T>, rng: &mut R) -> Self
    where
        T: SampleUniform + PartialOrd + Clone + Into<f64>,
        R: Rng + ?Sized,
    {
        let num_nodes = (2 * num_leaves).saturating_sub(1);
        let mut parents = vec![None; num_nodes];
        let mut edge_weights = vec![f64::NAN; num_nodes];

        let mut live: Vec<usize> = (0..num_leaves).collect();
        for parent in num_leaves..num_nodes {
            for _ in 0..2 {
                let child = live.swap_remove(rng.random_range(0..live.len()));
                parents[child] = Some(parent);
                edge_weights[child] = rng.random_range(weights.clone()).into();
            }
            live.push(parent);
        }

        let mut depths = vec![0; num_nodes];
        for node in (0..num_nodes).rev() {
            if let Some(parent) = parents[node] {
                depths[node] = depths[parent] + 1;
            }
        }

        RandomTree {
            num_leaves,
            parents,
            weights: edge_weights,
            depths,
        }
    }

    /// Returns the number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the number of nodes, `2n-1` for `n > 0` leaves.
    pub fn num_nodes(&self) -> usize {
        self.parents.len()
    }

    /// Returns the parent of `node`, `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents[node]
    }

    /// Returns the weight of the edge from `node` to its parent (NaN for the root).
    pub fn weight(&self, node: usize) -> f64 {
        self.weights[node]
    }

    /// Returns the length of the path between two nodes.
    pub fn distance(&self, mut a: usize, mut b: usize) -> f64 {
        let mut distance = 0.0;
        while self.depths[a] > self.depths[b] {
            distance += self.weights[a];
            a = self.up(a);
        }
        while self.depths[b] > self.depths[a] {
            distance += self.weights[b];
            b = self.up(b);
        }
        while a != b {
            distance += self.weights[a] + self.weights[b];
            a = self.up(a);
            b = self.up(b);
        }
        distance
    }

    /// Returns the matrix of path lengths between all pairs of leaves.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        let mut d = DistanceMatrix::zeros(self.num_leaves);
        for i in 0..self.num_leaves {
            for j in 0..i {
                d.set_symmetric(i, j, self.distance(i, j));
            }
        }
        d
    }

    // Only called below the root, which is the single node without parent.
    fn up(&self, node: usize) -> usize {
        self.parents[node].unwrap_or(node)
    }
}
