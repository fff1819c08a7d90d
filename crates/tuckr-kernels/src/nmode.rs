//! N-mode product (TTM - Tensor Times Matrix) for order-3 tensors
//!
//! For tensor X with extents (I1, I2, I3) and matrix M with shape (J, Ik),
//! the result Y = X x_k M replaces the mode-k extent by J. The operation is
//! implemented as unfold along mode k, matrix product `M . X_(k)`, fold back.
//!
//! Chained over all three modes this gives the "full multiplication" used for
//! Tucker reconstruction and core projection.

use crate::matmul::matmul;
use anyhow::Result;
use scirs2_core::ndarray_ext::ArrayView2;
use scirs2_core::numeric::Num;
use tuckr_core::Tensor3;

/// Compute the N-mode product of an order-3 tensor and a matrix.
///
/// # Arguments
///
/// * `tensor` - Input tensor with extents (I1, I2, I3)
/// * `matrix` - Matrix with shape (J, Ik) where Ik matches the mode-k extent
/// * `mode` - The mode along which to multiply (0, 1, or 2)
///
/// # Returns
///
/// A tensor whose mode-k extent is replaced by J.
///
/// # Errors
///
/// Returns an error if the mode is out of bounds or the matrix column count
/// does not match the tensor's mode-k extent.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tuckr_core::Tensor3;
/// use tuckr_kernels::nmode_product;
///
/// let tensor = Tensor3::from_vec((0..24).map(|x| x as f64).collect(), (2, 3, 4)).unwrap();
///
/// // 5x3 matrix replaces the mode-1 extent
/// let matrix = array![
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 1.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 1.0]
/// ];
///
/// let result = nmode_product(&tensor, &matrix.view(), 1).unwrap();
/// assert_eq!(result.dims(), (2, 5, 4));
/// ```
pub fn nmode_product<T>(
    tensor: &Tensor3<T>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> Result<Tensor3<T>>
where
    T: Clone + Num,
{
    if mode >= 3 {
        anyhow::bail!("Mode {} out of bounds for an order-3 tensor", mode);
    }

    let dims = [tensor.dims().0, tensor.dims().1, tensor.dims().2];
    let mode_size = dims[mode];
    let (matrix_rows, matrix_cols) = (matrix.shape()[0], matrix.shape()[1]);

    if matrix_cols != mode_size {
        anyhow::bail!(
            "Matrix columns ({}) must match tensor mode-{} extent ({})",
            matrix_cols,
            mode,
            mode_size
        );
    }

    let unfolded = tensor.unfold(mode)?;
    let result_unfolded = matmul(matrix, &unfolded.view())?;

    let mut new_dims = dims;
    new_dims[mode] = matrix_rows;

    Tensor3::fold(
        &result_unfolded,
        (new_dims[0], new_dims[1], new_dims[2]),
        mode,
    )
}

/// Apply one matrix per mode in sequence: `X x_0 U1 x_1 U2 x_2 U3`.
///
/// This is the full multiplication behind Tucker reconstruction (factors
/// applied to a core) and, with transposed or pseudo-inverted factors, core
/// derivation.
///
/// # Errors
///
/// Returns an error if any factor's column count does not match the
/// corresponding mode extent of the running result.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tuckr_core::Tensor3;
/// use tuckr_kernels::tucker_product;
///
/// let core = Tensor3::from_vec(vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0], (2, 2, 2)).unwrap();
/// let u1 = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]; // 3x2
/// let u2 = array![[1.0, 0.0], [0.0, 1.0]]; // 2x2
/// let u3 = array![[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]; // 3x2
///
/// let tensor = tucker_product(&core, &u1.view(), &u2.view(), &u3.view()).unwrap();
/// assert_eq!(tensor.dims(), (3, 2, 3));
/// ```
pub fn tucker_product<T>(
    core: &Tensor3<T>,
    u1: &ArrayView2<T>,
    u2: &ArrayView2<T>,
    u3: &ArrayView2<T>,
) -> Result<Tensor3<T>>
where
    T: Clone + Num,
{
    let core_dims = [core.dims().0, core.dims().1, core.dims().2];
    for (mode, factor) in [u1, u2, u3].iter().enumerate() {
        if factor.shape()[1] != core_dims[mode] {
            anyhow::bail!(
                "Factor for mode {} has {} columns, expected {}",
                mode,
                factor.shape()[1],
                core_dims[mode]
            );
        }
    }

    let step1 = nmode_product(core, u1, 0)?;
    let step2 = nmode_product(&step1, u2, 1)?;
    nmode_product(&step2, u3, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    fn range_tensor(dims: (usize, usize, usize)) -> Tensor3<f64> {
        let total = dims.0 * dims.1 * dims.2;
        Tensor3::from_vec((0..total).map(|x| x as f64).collect(), dims).unwrap()
    }

    #[test]
    fn test_nmode_product_identity() {
        let tensor = range_tensor((2, 3, 4));
        let identity = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let result = nmode_product(&tensor, &identity.view(), 1).unwrap();
        assert_eq!(result.dims(), tensor.dims());

        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(result[[i, j, k]], tensor[[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn test_nmode_product_mode0() {
        // 2x3x1 tensor, multiply along mode 0 with a 3x2 matrix
        let tensor = Tensor3::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], (2, 3, 1)).unwrap();
        let matrix = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

        let result = nmode_product(&tensor, &matrix.view(), 0).unwrap();
        assert_eq!(result.dims(), (3, 3, 1));

        // Third slab is the sum of the first two mode-0 slabs
        assert_eq!(result[[0, 0, 0]], 1.0);
        assert_eq!(result[[1, 0, 0]], 4.0);
        assert_eq!(result[[2, 0, 0]], 5.0);
        assert_eq!(result[[2, 2, 0]], 9.0);
    }

    #[test]
    fn test_nmode_product_shrinks_mode() {
        let tensor = range_tensor((2, 3, 4));
        let matrix = array![[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]]; // 2x4

        let result = nmode_product(&tensor, &matrix.view(), 2).unwrap();
        assert_eq!(result.dims(), (2, 3, 2));
        assert_eq!(result[[1, 2, 1]], tensor[[1, 2, 1]]);
    }

    #[test]
    fn test_nmode_product_invalid_mode() {
        let tensor = range_tensor((2, 2, 2));
        let matrix = array![[1.0, 0.0]];
        assert!(nmode_product(&tensor, &matrix.view(), 5).is_err());
    }

    #[test]
    fn test_nmode_product_size_mismatch() {
        let tensor = range_tensor((2, 3, 4));
        let matrix = array![[1.0, 0.0]]; // 1x2, but mode-1 extent is 3
        assert!(nmode_product(&tensor, &matrix.view(), 1).is_err());
    }

    #[test]
    fn test_tucker_product_identity() {
        let core = range_tensor((2, 2, 2));
        let eye = array![[1.0, 0.0], [0.0, 1.0]];

        let result = tucker_product(&core, &eye.view(), &eye.view(), &eye.view()).unwrap();
        assert_eq!(result.dims(), (2, 2, 2));
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    assert_eq!(result[[i, j, k]], core[[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn test_tucker_product_mismatched_factor() {
        let core = range_tensor((2, 2, 2));
        let eye = array![[1.0, 0.0], [0.0, 1.0]];
        let bad = array![[1.0], [0.0]]; // 2x1, should be (_, 2)

        assert!(tucker_product(&core, &eye.view(), &bad.view(), &eye.view()).is_err());
    }
}
