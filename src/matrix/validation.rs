//! Validation of distance matrices.
//!
//! All checks are pure and run in O(n²), except the triangle inequality
//! (O(n³)) and the four-point condition (O(n⁴)).
//!
//! Conditions checked by [DistanceMatrix::validate], in this order:
//! * square: `len(d[i]) == len(d)`
//! * non-negative: `d[i][j] >= 0`
//! * symmetric: `d[i][j] == d[j][i]`
//! * zero diagonal: `d[i][i] == 0`
//! * triangle inequality: `d[i][j] + d[j][k] >= d[i][k]`
//!
//! Tree builders do not validate their input themselves.

use crate::matrix::DistanceMatrix;
use crate::matrix::matrix_error::MatrixError;

/// Relative tolerance when comparing sums of the four-point condition
const EPSILON: f64 = 1e-9;

impl DistanceMatrix {
    /// Tests if every row has as many elements as there are rows.
    pub fn is_square(&self) -> bool {
        self.find_not_square().is_none()
    }

    /// Tests that no element is negative.
    ///
    /// The test is NaN weak: a NaN element does not count as negative.
    pub fn is_non_negative(&self) -> bool {
        self.find_negative().is_none()
    }

    /// Tests if off-diagonal elements are symmetric.
    ///
    /// NaNs never compare equal, so a NaN off the diagonal makes the matrix
    /// asymmetric. The diagonal itself is not checked.
    pub fn is_symmetric(&self) -> bool {
        self.find_asymmetry().is_none()
    }

    /// Tests that all diagonal elements are zero (a NaN is not zero).
    pub fn has_zero_diagonal(&self) -> bool {
        self.find_non_zero_diagonal().is_none()
    }

    /// Tests for violations of the triangle inequality.
    ///
    /// Iterates `i` over rows, `k < i` and `j` over all columns and reports
    /// the first triple with `d[i][j] + d[k][j] < d[i][k]`.
    /// The test is NaN weak: comparisons involving NaN never count as
    /// violation.
    ///
    /// # Returns
    /// * `Ok(())` if there is no violation
    /// * [MatrixError::TriangleInequality] with the first violating `(i, j, k)`
    pub fn triangle_inequality(&self) -> Result<(), MatrixError> {
        for (i, di) in self.rows().iter().enumerate() {
            for (k, dk) in self.rows()[..i].iter().enumerate() {
                let Some(&dik) = di.get(k) else {
                    continue;
                };
                for (j, (&dij, &dkj)) in di.iter().zip(dk.iter()).enumerate() {
                    if dij + dkj < dik {
                        return Err(MatrixError::TriangleInequality { i, j, k });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validates the matrix as a metric distance matrix.
    ///
    /// # Returns
    /// * `Ok(())` if all conditions are met
    /// * The [MatrixError] of the first condition (see [module docs](self))
    ///   that is not met, citing the offending indices
    ///
    /// # Example
    /// ```
    /// use distree::{DistanceMatrix, MatrixError};
    ///
    /// let d = DistanceMatrix::new(vec![
    ///     vec![0.0, 4.0, 6.0, 1.0],
    ///     vec![4.0, 0.0, 3.0, 2.0],
    ///     vec![6.0, 3.0, 0.0, 5.0],
    ///     vec![1.0, 2.0, 5.0, 0.0],
    /// ]);
    /// assert_eq!(d.validate(), Err(MatrixError::TriangleInequality { i: 1, j: 3, k: 0 }));
    /// ```
    pub fn validate(&self) -> Result<(), MatrixError> {
        if let Some(error) = self.find_not_square() {
            return Err(error);
        }
        if let Some(error) = self.find_negative() {
            return Err(error);
        }
        if let Some(error) = self.find_asymmetry() {
            return Err(error);
        }
        if let Some(error) = self.find_non_zero_diagonal() {
            return Err(error);
        }
        self.triangle_inequality()
    }

    /// Tests if the matrix is additive, that is, realizable as leaf-to-leaf
    /// path lengths of a weighted tree.
    ///
    /// Checks the four-point condition for all quadruples: of the three sums
    /// `d[i][j] + d[k][l]`, `d[i][k] + d[j][l]` and `d[i][l] + d[j][k]`,
    /// the two largest must be equal. Iterates `i` over rows, `j < i`,
    /// `k < j` and `l` over all indices. Quadruples involving NaN are skipped.
    ///
    /// Sums count as equal if they differ by at most a relative `1e-9`, so
    /// path sums of trees with fractional edge weights pass despite rounding.
    ///
    /// # Returns
    /// * `Ok(())` if the matrix is additive
    /// * [MatrixError::NotAdditive] with the first failing `(i, j, k, l)`
    /// * [MatrixError::NotSquare] if the matrix is not square
    pub fn additive(&self) -> Result<(), MatrixError> {
        if let Some(error) = self.find_not_square() {
            return Err(error);
        }

        let d = self.rows();
        for (i, di) in d.iter().enumerate() {
            for (j, dj) in d[..i].iter().enumerate() {
                let dij = di[j];
                for (k, dk) in d[..j].iter().enumerate() {
                    let dik = di[k];
                    let djk = dj[k];
                    for (l, &dil) in di.iter().enumerate() {
                        let s1 = dij + dk[l];
                        let s2 = dik + dj[l];
                        let s3 = dil + djk;
                        if !four_point_holds(s1, s2, s3) {
                            return Err(MatrixError::NotAdditive { i, j, k, l });
                        }
                    }
                }
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Helpers (private)
    // ------------------------------------------------------------------------
    fn find_not_square(&self) -> Option<MatrixError> {
        let size = self.size();
        self.rows()
            .iter()
            .position(|row| row.len() != size)
            .map(|row| MatrixError::NotSquare {
                row,
                len: self.rows()[row].len(),
                size,
            })
    }

    fn find_negative(&self) -> Option<MatrixError> {
        for (i, di) in self.rows().iter().enumerate() {
            if let Some(j) = di.iter().position(|&dij| dij < 0.0) {
                return Some(MatrixError::NegativeElement { i, j });
            }
        }
        None
    }

    fn find_asymmetry(&self) -> Option<MatrixError> {
        for (i, di) in self.rows().iter().enumerate() {
            for (j, &dij) in di.iter().take(i).enumerate() {
                // Written as negated equality so NaNs count as mismatch
                if !(self.get(j, i) == Some(dij)) {
                    return Some(MatrixError::NotSymmetric { i, j });
                }
            }
        }
        None
    }

    fn find_non_zero_diagonal(&self) -> Option<MatrixError> {
        (0..self.size())
            .find(|&i| !(self.get(i, i) == Some(0.0)))
            .map(|i| MatrixError::NonZeroDiagonal { i })
    }
}

/// Whether the two largest of three sums are equal (within [EPSILON]);
/// NaN sums pass.
fn four_point_holds(s1: f64, s2: f64, s3: f64) -> bool {
    if s1.is_nan() || s2.is_nan() || s3.is_nan() {
        return true;
    }
    let mut sums = [s1, s2, s3];
    sums.sort_unstable_by(|a, b| b.total_cmp(a));
    let [largest, second, _] = sums;
    largest - second <= EPSILON * largest.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_point_holds() {
        assert!(four_point_holds(5.0, 7.0, 7.0));
        assert!(four_point_holds(7.0, 7.0, 7.0));
        assert!(four_point_holds(8.0, 3.0, 8.0));
        assert!(!four_point_holds(5.0, 7.0, 9.0));
        assert!(!four_point_holds(9.0, 9.0, 10.0));
        assert!(four_point_holds(f64::NAN, 1.0, 2.0));
        // Rounding noise in the last bit
        assert!(four_point_holds(1.2000000000000002, 1.2, 0.6000000000000001));
        assert!(!four_point_holds(1.2 + 1e-6, 1.2, 0.6));
    }
}
