//! Small dense matrix helpers shared by the kernels
//!
//! Plain loops keep the element-type bound at `Num`, which the generic
//! decomposition paths need.

use anyhow::Result;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::Num;

/// Dense matrix product `A . B`.
///
/// # Errors
///
/// Returns an error if `A`'s column count does not match `B`'s row count.
pub fn matmul<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Result<Array2<T>>
where
    T: Clone + Num,
{
    let (a_rows, a_cols) = (a.shape()[0], a.shape()[1]);
    let (b_rows, b_cols) = (b.shape()[0], b.shape()[1]);

    if a_cols != b_rows {
        anyhow::bail!(
            "Matrix product dimension mismatch: ({}, {}) . ({}, {})",
            a_rows,
            a_cols,
            b_rows,
            b_cols
        );
    }

    let mut result = Array2::<T>::zeros((a_rows, b_cols));
    for i in 0..a_rows {
        for j in 0..b_cols {
            let mut sum = T::zero();
            for k in 0..a_cols {
                sum = sum + a[[i, k]].clone() * b[[k, j]].clone();
            }
            result[[i, j]] = sum;
        }
    }

    Ok(result)
}

/// Transpose a matrix
pub fn transpose<T>(matrix: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (rows, cols) = (matrix.shape()[0], matrix.shape()[1]);
    let mut result = Array2::<T>::zeros((cols, rows));

    for i in 0..rows {
        for j in 0..cols {
            result[[j, i]] = matrix[[i, j]].clone();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_matmul_known() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];

        let c = matmul(&a.view(), &b.view()).unwrap();
        assert_eq!(c[[0, 0]], 19.0);
        assert_eq!(c[[0, 1]], 22.0);
        assert_eq!(c[[1, 0]], 43.0);
        assert_eq!(c[[1, 1]], 50.0);
    }

    #[test]
    fn test_matmul_mismatch() {
        let a = array![[1.0, 2.0]];
        let b = array![[1.0, 2.0]];
        assert!(matmul(&a.view(), &b.view()).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = transpose(&a.view());

        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t[[0, 1]], 4.0);
        assert_eq!(t[[2, 0]], 3.0);
    }
}
