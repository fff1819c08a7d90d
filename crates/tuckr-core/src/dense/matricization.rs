//! Matricization (unfold/fold) for order-3 tensors
//!
//! A third-order tensor with extents (I1, I2, I3) has three canonical 2D
//! unfoldings, one per mode:
//!
//! - mode 0: (I1, I2 * I3)
//! - mode 1: (I2, I1 * I3)
//! - mode 2: (I3, I1 * I2)
//!
//! The combined column index uses a single fixed linearization: the unfolding
//! mode is permuted to the front and the remaining axes keep ascending order,
//! then the tensor is reshaped row-major. `fold` is the exact inverse, so
//! `fold(unfold(t, mode), dims, mode) == t` for every mode. The whole
//! decomposition pipeline relies on this one ordering.

use super::types::Tensor3;
use scirs2_core::ndarray_ext::Array2;
use scirs2_core::numeric::Num;

impl<T> Tensor3<T>
where
    T: Clone + Num,
{
    /// Unfold (matricize) the tensor along a mode.
    ///
    /// Mode-n unfolding arranges the mode-n fibers as columns of a matrix.
    ///
    /// # Arguments
    ///
    /// * `mode` - The mode along which to unfold (0, 1, or 2)
    ///
    /// # Errors
    ///
    /// Returns an error if `mode >= 3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::<f64>::ones((2, 3, 4));
    /// let unfolded = tensor.unfold(1).unwrap();
    /// assert_eq!(unfolded.shape(), &[3, 8]); // 8 = 2 * 4
    /// ```
    pub fn unfold(&self, mode: usize) -> anyhow::Result<Array2<T>> {
        if mode >= 3 {
            anyhow::bail!("Mode {} out of bounds for an order-3 tensor", mode);
        }

        let dims = [self.dims().0, self.dims().1, self.dims().2];
        let rows = dims[mode];
        let cols: usize = dims
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s)
            .product();

        // Permute so that the unfolding mode becomes the first axis
        let perm = match mode {
            0 => [0, 1, 2],
            1 => [1, 0, 2],
            _ => [2, 0, 1],
        };

        let permuted = self.data.view().permuted_axes(perm);
        let contiguous = permuted.as_standard_layout().into_owned();
        let unfolded = contiguous.into_shape_with_order((rows, cols))?;

        Ok(unfolded)
    }

    /// Fold (tensorize) a matrix back into an order-3 tensor.
    ///
    /// This is the inverse of [`unfold`](Self::unfold): given a matrix and
    /// the target extents, it reconstructs the tensor such that
    /// `unfold(fold(matrix)) == matrix`.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The 2D matrix to fold
    /// * `dims` - The target tensor extents
    /// * `mode` - The mode that was used for unfolding
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix shape is incompatible with `dims` and
    /// `mode`, or if `mode >= 3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    /// use scirs2_core::ndarray_ext::Array2;
    ///
    /// let matrix: Array2<f64> = Array2::zeros((3, 8));
    /// let tensor = Tensor3::fold(&matrix, (2, 3, 4), 1).unwrap();
    /// assert_eq!(tensor.dims(), (2, 3, 4));
    /// ```
    pub fn fold(matrix: &Array2<T>, dims: (usize, usize, usize), mode: usize) -> anyhow::Result<Self> {
        if mode >= 3 {
            anyhow::bail!("Mode {} out of bounds for an order-3 tensor", mode);
        }

        let shape = [dims.0, dims.1, dims.2];
        let expected_rows = shape[mode];
        let expected_cols: usize = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s)
            .product();

        if matrix.shape() != [expected_rows, expected_cols] {
            anyhow::bail!(
                "Matrix shape {:?} incompatible with dims {:?} at mode {}",
                matrix.shape(),
                dims,
                mode
            );
        }

        // Intermediate shape: [mode extent, remaining extents in order]
        let mut inter_shape = [0usize; 3];
        inter_shape[0] = shape[mode];
        let mut pos = 1;
        for (i, &s) in shape.iter().enumerate() {
            if i != mode {
                inter_shape[pos] = s;
                pos += 1;
            }
        }

        let contiguous = matrix.as_standard_layout().into_owned();
        let inter =
            contiguous.into_shape_with_order((inter_shape[0], inter_shape[1], inter_shape[2]))?;

        // Inverse permutation back to the original axis order
        let mut inv_perm = [0usize; 3];
        inv_perm[mode] = 0;
        let mut idx = 1;
        for (i, item) in inv_perm.iter_mut().enumerate() {
            if i != mode {
                *item = idx;
                idx += 1;
            }
        }

        let tensor = inter.permuted_axes(inv_perm);

        Ok(Self {
            data: tensor.as_standard_layout().into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_tensor(dims: (usize, usize, usize)) -> Tensor3<f64> {
        let total = dims.0 * dims.1 * dims.2;
        Tensor3::from_vec((0..total).map(|x| x as f64).collect(), dims).unwrap()
    }

    #[test]
    fn test_unfold_shapes() {
        let tensor = Tensor3::<f64>::zeros((2, 3, 4));
        assert_eq!(tensor.unfold(0).unwrap().shape(), &[2, 12]);
        assert_eq!(tensor.unfold(1).unwrap().shape(), &[3, 8]);
        assert_eq!(tensor.unfold(2).unwrap().shape(), &[4, 6]);
    }

    #[test]
    fn test_unfold_mode0_values() {
        // t[i1, i2, i3] = i1*12 + i2*4 + i3, so mode-0 rows are 0..12 and 12..24
        let tensor = range_tensor((2, 3, 4));
        let unfolded = tensor.unfold(0).unwrap();
        for col in 0..12 {
            assert_eq!(unfolded[[0, col]], col as f64);
            assert_eq!(unfolded[[1, col]], (col + 12) as f64);
        }
    }

    #[test]
    fn test_unfold_mode1_values() {
        let tensor = range_tensor((2, 3, 4));
        let unfolded = tensor.unfold(1).unwrap();
        // Column index is i1 * I3 + i3
        assert_eq!(unfolded[[0, 0]], 0.0); // (0, 0, 0)
        assert_eq!(unfolded[[0, 4]], 12.0); // (1, 0, 0)
        assert_eq!(unfolded[[2, 7]], 23.0); // (1, 2, 3)
    }

    #[test]
    fn test_unfold_mode2_values() {
        let tensor = range_tensor((2, 3, 4));
        let unfolded = tensor.unfold(2).unwrap();
        // Column index is i1 * I2 + i2
        assert_eq!(unfolded[[0, 0]], 0.0); // (0, 0, 0)
        assert_eq!(unfolded[[0, 3]], 12.0); // (1, 0, 0)
        assert_eq!(unfolded[[3, 5]], 23.0); // (1, 2, 3)
    }

    #[test]
    fn test_unfold_fold_roundtrip() {
        let tensor = range_tensor((2, 3, 4));

        for mode in 0..3 {
            let unfolded = tensor.unfold(mode).unwrap();
            let folded = Tensor3::fold(&unfolded, (2, 3, 4), mode).unwrap();

            assert_eq!(folded.dims(), tensor.dims());
            for i1 in 0..2 {
                for i2 in 0..3 {
                    for i3 in 0..4 {
                        assert_eq!(folded[[i1, i2, i3]], tensor[[i1, i2, i3]]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unfold_invalid_mode() {
        let tensor = Tensor3::<f64>::zeros((2, 2, 2));
        assert!(tensor.unfold(3).is_err());
    }

    #[test]
    fn test_fold_shape_mismatch() {
        let matrix = Array2::<f64>::zeros((3, 7));
        assert!(Tensor3::fold(&matrix, (2, 3, 4), 1).is_err());
    }
}
