//! Moore-Penrose pseudo-inverse via SVD
//!
//! For A = U . diag(s) . Vt, the pseudo-inverse is
//! A+ = V . diag(1/s_i where s_i > cutoff, else 0) . Ut with the standard
//! cutoff `max(m, n) * eps * s_max`. The operation has no failure path:
//! rank-deficient input zeroes the reciprocals below the cutoff, and if the
//! SVD itself cannot factor the input the zero matrix is returned. Downstream
//! mode optimization on a zero pseudo-inverse is well-defined and simply
//! fails to improve that mode.

use scirs2_core::ndarray_ext::{Array2, ArrayView2, ScalarOperand};
use scirs2_core::numeric::{Float, NumAssign, NumCast};
use scirs2_linalg::svd;
use std::iter::Sum;

/// Compute the Moore-Penrose pseudo-inverse of a matrix.
///
/// For input of shape (m, n) the result has shape (n, m). Orthonormal-column
/// input gives back the transpose; degenerate input gives the zero matrix.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{array, Array2};
/// use tuckr_kernels::pseudo_inverse;
///
/// let identity: Array2<f64> = array![[1.0, 0.0], [0.0, 1.0]];
/// let pinv = pseudo_inverse(&identity.view());
///
/// assert!((pinv[[0, 0]] - 1.0).abs() < 1e-12);
/// assert!(pinv[[0, 1]].abs() < 1e-12);
/// ```
pub fn pseudo_inverse<T>(matrix: &ArrayView2<T>) -> Array2<T>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let (m, n) = (matrix.shape()[0], matrix.shape()[1]);

    // Thin SVD: u is (m, k), s has k entries, vt is (k, n) with k = min(m, n)
    let (u, s, vt) = match svd(matrix, false, None) {
        Ok(factors) => factors,
        Err(_) => return Array2::zeros((n, m)),
    };

    let k = s.len();
    let s_max = s.iter().cloned().fold(T::zero(), T::max);
    let cutoff = T::from(m.max(n)).unwrap() * T::epsilon() * s_max;

    // A+ = V . diag(1/s) . Ut, skipping singular values at or below the cutoff
    let mut result = Array2::<T>::zeros((n, m));
    for i in 0..n {
        for j in 0..m {
            let mut sum = T::zero();
            for r in 0..k {
                if s[r] > cutoff {
                    sum = sum + vt[[r, i]] * u[[j, r]] / s[r];
                }
            }
            result[[i, j]] = sum;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matmul::matmul;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_pinv_identity() {
        let eye = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let pinv = pseudo_inverse(&eye.view());

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((pinv[[i, j]] - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_pinv_orthonormal_columns_is_transpose() {
        // Columns of the identity embedded in a taller matrix
        let mut tall = Array2::<f64>::zeros((5, 3));
        for i in 0..3 {
            tall[[i, i]] = 1.0;
        }

        let pinv = pseudo_inverse(&tall.view());
        assert_eq!(pinv.shape(), &[3, 5]);

        for i in 0..3 {
            for j in 0..5 {
                assert!((pinv[[i, j]] - tall[[j, i]]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_pinv_penrose_condition() {
        // A . A+ . A == A
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let pinv = pseudo_inverse(&a.view());

        let apa = matmul(
            &matmul(&a.view(), &pinv.view()).unwrap().view(),
            &a.view(),
        )
        .unwrap();

        for i in 0..3 {
            for j in 0..2 {
                assert!(
                    (apa[[i, j]] - a[[i, j]]).abs() < 1e-8,
                    "A.A+.A mismatch at ({}, {}): {} vs {}",
                    i,
                    j,
                    apa[[i, j]],
                    a[[i, j]]
                );
            }
        }
    }

    #[test]
    fn test_pinv_zero_matrix() {
        let zero = Array2::<f64>::zeros((4, 2));
        let pinv = pseudo_inverse(&zero.view());

        assert_eq!(pinv.shape(), &[2, 4]);
        for &x in pinv.iter() {
            assert_eq!(x, 0.0);
        }
    }
}
