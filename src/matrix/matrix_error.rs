//! Error type for distance matrix validation.
//!
//! This module provides [MatrixError] and [MatrixErrorKind] for reporting
//! which condition a [DistanceMatrix](crate::DistanceMatrix) violates and
//! where.

use thiserror::Error;

// =#========================================================================#=
// MATRIX ERROR KIND
// =#========================================================================#=
/// Condition violated by a distance matrix, without position information.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MatrixErrorKind {
    NotSquare,
    NegativeElement,
    NotSymmetric,
    NonZeroDiagonal,
    TriangleInequality,
    NotAdditive,
}

// =#========================================================================#=
// MATRIX ERROR
// =#========================================================================#=
/// Violated matrix condition together with the offending indices.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum MatrixError {
    #[error("not square: row {row} has {len} elements, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("negative element d[{i}][{j}]")]
    NegativeElement { i: usize, j: usize },

    #[error("not symmetric: d[{i}][{j}] != d[{j}][{i}]")]
    NotSymmetric { i: usize, j: usize },

    #[error("non-zero diagonal d[{i}][{i}]")]
    NonZeroDiagonal { i: usize },

    #[error("triangle inequality not satisfied: d[{i}][{j}] + d[{j}][{k}] < d[{i}][{k}]")]
    TriangleInequality { i: usize, j: usize, k: usize },

    #[error("four-point condition not satisfied for ({i}, {j}, {k}, {l})")]
    NotAdditive { i: usize, j: usize, k: usize, l: usize },
}

impl MatrixError {
    /// Get the violated condition
    pub fn kind(&self) -> MatrixErrorKind {
        match self {
            MatrixError::NotSquare { .. } => MatrixErrorKind::NotSquare,
            MatrixError::NegativeElement { .. } => MatrixErrorKind::NegativeElement,
            MatrixError::NotSymmetric { .. } => MatrixErrorKind::NotSymmetric,
            MatrixError::NonZeroDiagonal { .. } => MatrixErrorKind::NonZeroDiagonal,
            MatrixError::TriangleInequality { .. } => MatrixErrorKind::TriangleInequality,
            MatrixError::NotAdditive { .. } => MatrixErrorKind::NotAdditive,
        }
    }

    /// Get the offending indices, in the order they appear in the message
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            MatrixError::NotSquare { row, .. } => vec![row],
            MatrixError::NegativeElement { i, j } => vec![i, j],
            MatrixError::NotSymmetric { i, j } => vec![i, j],
            MatrixError::NonZeroDiagonal { i } => vec![i],
            MatrixError::TriangleInequality { i, j, k } => vec![i, j, k],
            MatrixError::NotAdditive { i, j, k, l } => vec![i, j, k, l],
        }
    }
}
