//! Distance matrices as input for tree construction.
//!
//! A [DistanceMatrix] is a list of rows, where `d[i][j]` is the distance
//! between elements `i` and `j`. Typical restrictions (square, symmetric,
//! non-negative, zero diagonal, triangle inequality) are *not* enforced on
//! construction but can be checked with [DistanceMatrix::validate], see
//! [validation]. The additive-tree builder additionally needs an additive
//! matrix, see [DistanceMatrix::additive].
//!
//! Random additive matrices for testing can be generated with the
//! [random] module.

pub mod matrix_error;
pub mod random;
pub mod validation;

pub use matrix_error::{MatrixError, MatrixErrorKind};
pub use random::{RandomTree, random_additive_matrix};

use crate::builder::{AdditiveTreeBuilder, Linkage, NeighborJoinBuilder, UltrametricBuilder};
use crate::model::{UltrametricTree, UnrootedTree};
use std::fmt;
use std::ops::{Index, IndexMut};

// =#========================================================================#=
// DISTANCE MATRIX
// =#========================================================================#=
/// A (usually square and symmetric) matrix of pairwise distances.
///
/// Row `i` corresponds to element (and later leaf) `i`.
/// Elements are accessed with `d[(i, j)]` or [DistanceMatrix::get].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Creates a distance matrix from the given rows without any checks.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        DistanceMatrix { rows }
    }

    /// Creates an `n`×`n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        DistanceMatrix {
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// Returns the number of rows.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns row `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Returns `d[i][j]`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Sets both `d[i][j]` and `d[j][i]` to `value`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.rows[i][j] = value;
        self.rows[j][i] = value;
    }

    /// Consumes the matrix and returns its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    // ------------------------------------------------------------------------
    // Tree construction (non-destructive)
    // ------------------------------------------------------------------------
    /// Builds a rooted ultrametric tree on a copy of this matrix.
    ///
    /// See [UltrametricBuilder]; use [crate::build_ultrametric] to hand over
    /// the matrix instead of copying it.
    pub fn ultrametric(&self, linkage: Linkage) -> UltrametricTree {
        UltrametricBuilder::new(linkage).build(self.clone())
    }

    /// Builds an unrooted tree by neighbor joining on a copy of this matrix.
    ///
    /// See [NeighborJoinBuilder]; use [crate::build_neighbor_join] to hand
    /// over the matrix instead of copying it.
    pub fn neighbor_join(&self) -> UnrootedTree {
        NeighborJoinBuilder::new().build(self.clone())
    }

    /// Reconstructs the unrooted tree of this additive matrix.
    ///
    /// See [AdditiveTreeBuilder]. The result is undefined if the matrix is
    /// not additive.
    pub fn additive_tree(&self) -> UnrootedTree {
        AdditiveTreeBuilder::new(self).build()
    }
}

impl From<Vec<Vec<f64>>> for DistanceMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        DistanceMatrix::new(rows)
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}

/// Simplistic row-by-row output, mostly useful for debugging.
///
/// ```
/// use distree::DistanceMatrix;
///
/// let d = DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.5]]);
/// assert_eq!(d.to_string(), "[0 3]\n[3 0.5]");
/// ```
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
