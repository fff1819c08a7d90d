//! Cross-model transforms
//!
//! These operate on already-computed models, not raw data, and copy values
//! into a freshly shaped model. Rank reduction slices the bases column-wise
//! and the core block-wise; subsampling and region-of-interest extraction
//! slice the bases row-wise and copy the core unchanged (valid because the
//! spatial sampling is separable from the compressed representation).
//!
//! All preconditions are checked at call time against the source model's
//! shape; a violated precondition is a [`TuckerError`], never a silent
//! adjustment.

use crate::tucker::{validate_ranks, Tucker3, TuckerError};
use scirs2_core::ndarray_ext::Array2;
use scirs2_core::numeric::{Float, NumCast};
use tuckr_core::Tensor3;

impl<T> Tucker3<T>
where
    T: Clone + Float + NumCast,
{
    /// Reduce the model to smaller ranks (J1, J2, J3).
    ///
    /// Copies the first Jk columns of each basis and the leading
    /// (J1, J2, J3) sub-block of the core, element for element. The extents
    /// (I1, I2, I3) stay the same.
    ///
    /// # Errors
    ///
    /// Returns [`TuckerError::InvalidRanks`] if any target rank is zero or
    /// exceeds the source rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    /// use tuckr_decomp::tucker3_hosvd;
    ///
    /// let tensor = Tensor3::<f64>::random_uniform((6, 6, 6), 0.0, 1.0);
    /// let model = tucker3_hosvd(&tensor, (4, 4, 4)).unwrap();
    ///
    /// let reduced = model.reduce_ranks((2, 3, 4)).unwrap();
    /// assert_eq!(reduced.ranks(), (2, 3, 4));
    /// assert_eq!(reduced.dims(), (6, 6, 6));
    /// ```
    pub fn reduce_ranks(&self, ranks: (usize, usize, usize)) -> Result<Self, TuckerError> {
        validate_ranks(self.ranks(), ranks)?;

        let u1 = leading_columns(&self.u1, ranks.0);
        let u2 = leading_columns(&self.u2, ranks.1);
        let u3 = leading_columns(&self.u3, ranks.2);

        let mut core = Tensor3::zeros(ranks);
        for j1 in 0..ranks.0 {
            for j2 in 0..ranks.1 {
                for j3 in 0..ranks.2 {
                    core[[j1, j2, j3]] = self.core[[j1, j2, j3]];
                }
            }
        }

        Ok(Self {
            core,
            u1,
            u2,
            u3,
            iters: 0,
        })
    }

    /// Subsample the model spatially by keeping every `factor`-th basis row
    /// (nearest-neighbor sampling). The core is copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is zero, or if striding would leave any
    /// mode with fewer rows than its rank.
    pub fn subsample(&self, factor: usize) -> Result<Self, TuckerError> {
        check_factor(factor)?;

        let u1 = strided_rows(&self.u1, factor);
        let u2 = strided_rows(&self.u2, factor);
        let u3 = strided_rows(&self.u3, factor);
        check_subsampled_extents(&[&u1, &u2, &u3], self.ranks(), factor)?;

        Ok(Self {
            core: self.core.clone(),
            u1,
            u2,
            u3,
            iters: 0,
        })
    }

    /// Subsample the model spatially, averaging each block of `factor`
    /// consecutive basis rows into one row. The core is copied unchanged.
    ///
    /// Every mode writes the averaged row (a trailing partial block averages
    /// the rows it actually has).
    ///
    /// # Errors
    ///
    /// Same contract as [`subsample`](Self::subsample).
    pub fn subsample_mean(&self, factor: usize) -> Result<Self, TuckerError> {
        check_factor(factor)?;

        let u1 = averaged_rows(&self.u1, factor);
        let u2 = averaged_rows(&self.u2, factor);
        let u3 = averaged_rows(&self.u3, factor);
        check_subsampled_extents(&[&u1, &u2, &u3], self.ranks(), factor)?;

        Ok(Self {
            core: self.core.clone(),
            u1,
            u2,
            u3,
            iters: 0,
        })
    }

    /// Extract a spatial region of interest: keep the contiguous basis row
    /// range `[start, end)` per mode. The core is copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if any range is empty, runs past the mode's extent,
    /// or selects fewer rows than the mode's rank.
    pub fn region_of_interest(
        &self,
        rows1: (usize, usize),
        rows2: (usize, usize),
        rows3: (usize, usize),
    ) -> Result<Self, TuckerError> {
        let ranks = self.ranks();
        let selections = [
            (rows1, self.u1.nrows(), ranks.0),
            (rows2, self.u2.nrows(), ranks.1),
            (rows3, self.u3.nrows(), ranks.2),
        ];
        for (mode, &((start, end), extent, rank)) in selections.iter().enumerate() {
            if start >= end || end > extent {
                return Err(TuckerError::InvalidArgument(format!(
                    "Row range [{}, {}) invalid for mode-{} extent {}",
                    start, end, mode, extent
                )));
            }
            if end - start < rank {
                return Err(TuckerError::InvalidRanks(format!(
                    "Row range [{}, {}) leaves mode {} below rank {}",
                    start, end, mode, rank
                )));
            }
        }

        Ok(Self {
            core: self.core.clone(),
            u1: row_range(&self.u1, rows1),
            u2: row_range(&self.u2, rows2),
            u3: row_range(&self.u3, rows3),
            iters: 0,
        })
    }
}

fn check_factor(factor: usize) -> Result<(), TuckerError> {
    if factor == 0 {
        return Err(TuckerError::InvalidArgument(
            "Subsampling factor must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_subsampled_extents<T>(
    bases: &[&Array2<T>],
    ranks: (usize, usize, usize),
    factor: usize,
) -> Result<(), TuckerError> {
    let ranks = [ranks.0, ranks.1, ranks.2];
    for (mode, (basis, &rank)) in bases.iter().zip(ranks.iter()).enumerate() {
        if basis.nrows() < rank {
            return Err(TuckerError::InvalidRanks(format!(
                "Subsampling by {} leaves mode {} with {} rows, below rank {}",
                factor,
                mode,
                basis.nrows(),
                rank
            )));
        }
    }
    Ok(())
}

fn leading_columns<T>(matrix: &Array2<T>, count: usize) -> Array2<T>
where
    T: Clone + Float,
{
    let rows = matrix.nrows();
    let mut result = Array2::<T>::zeros((rows, count));
    for i in 0..rows {
        for j in 0..count {
            result[[i, j]] = matrix[[i, j]];
        }
    }
    result
}

fn row_range<T>(matrix: &Array2<T>, (start, end): (usize, usize)) -> Array2<T>
where
    T: Clone + Float,
{
    let cols = matrix.ncols();
    let mut result = Array2::<T>::zeros((end - start, cols));
    for (i, src) in (start..end).enumerate() {
        for j in 0..cols {
            result[[i, j]] = matrix[[src, j]];
        }
    }
    result
}

fn strided_rows<T>(matrix: &Array2<T>, factor: usize) -> Array2<T>
where
    T: Clone + Float,
{
    let rows = matrix.nrows();
    let cols = matrix.ncols();
    let new_rows = rows.div_ceil(factor);

    let mut result = Array2::<T>::zeros((new_rows, cols));
    for (i, src) in (0..rows).step_by(factor).enumerate() {
        for j in 0..cols {
            result[[i, j]] = matrix[[src, j]];
        }
    }
    result
}

fn averaged_rows<T>(matrix: &Array2<T>, factor: usize) -> Array2<T>
where
    T: Clone + Float + NumCast,
{
    let rows = matrix.nrows();
    let cols = matrix.ncols();
    let new_rows = rows.div_ceil(factor);

    let mut result = Array2::<T>::zeros((new_rows, cols));
    for (i, start) in (0..rows).step_by(factor).enumerate() {
        let end = (start + factor).min(rows);
        let count = T::from(end - start).unwrap();
        for j in 0..cols {
            let mut sum = T::zero();
            for src in start..end {
                sum = sum + matrix[[src, j]];
            }
            result[[i, j]] = sum / count;
        }
    }
    result
}
