//! Tucker3 model and decomposition algorithms (HOSVD and HOII/ALS)
//!
//! The model owns the core tensor and the three mode bases. Decomposition
//! seeds the bases with per-mode truncated SVDs (HOSVD), then alternates:
//! project the data onto the pseudo-inverses of two modes' bases, re-extract
//! the third mode's basis from the projection, and re-derive the core. The
//! loop is bounded both by an iteration cap and by a minimum-improvement
//! threshold on the reconstruction's Frobenius norm.

use scirs2_core::ndarray_ext::{Array2, ArrayView2, ScalarOperand};
use scirs2_core::numeric::{Float, NumAssign, NumCast};
use scirs2_linalg::svd;
use std::iter::Sum;
use thiserror::Error;
use tracing::{debug, warn};
use tuckr_core::Tensor3;
use tuckr_kernels::{nmode_product, pseudo_inverse, transpose, tucker_product};

/// Default cap on ALS iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 3;

/// Default minimum improvement of the reconstruction norm per ALS iteration
pub const DEFAULT_MIN_IMPROVEMENT: f64 = 0.1;

#[derive(Error, Debug)]
pub enum TuckerError {
    #[error("Invalid ranks: {0}")]
    InvalidRanks(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Import expects exactly {expected} elements, got {actual}")]
    ImportLength { expected: usize, actual: usize },
}

/// Tucker decomposition of a third-order tensor
///
/// Represents X ~ core x_1 u1 x_2 u2 x_3 u3 with core extents (J1, J2, J3)
/// and basis shapes u_k: (Ik, Jk), Jk <= Ik.
///
/// Bases produced by HOSVD have orthonormal columns; after ALS refinement or
/// a cross-model transform they are only approximately orthonormal, which is
/// why the general [`derive_core`] path exists next to
/// [`derive_core_orthogonal`].
#[derive(Clone)]
pub struct Tucker3<T>
where
    T: Clone + Float,
{
    pub(crate) core: Tensor3<T>,
    pub(crate) u1: Array2<T>,
    pub(crate) u2: Array2<T>,
    pub(crate) u3: Array2<T>,

    /// Number of ALS iterations that produced this model (0 for HOSVD or
    /// manually assembled models)
    pub(crate) iters: usize,
}

impl<T> Tucker3<T>
where
    T: Clone + Float,
{
    /// Assemble a model from a caller-supplied core and bases.
    ///
    /// # Errors
    ///
    /// Returns an error unless every basis has as many columns as the
    /// matching core extent and at least as many rows as columns.
    pub fn new(
        core: Tensor3<T>,
        u1: Array2<T>,
        u2: Array2<T>,
        u3: Array2<T>,
    ) -> Result<Self, TuckerError> {
        let ranks = core.dims();
        for (mode, (basis, rank)) in [(&u1, ranks.0), (&u2, ranks.1), (&u3, ranks.2)]
            .into_iter()
            .enumerate()
        {
            if basis.ncols() != rank {
                return Err(TuckerError::ShapeMismatch(format!(
                    "Basis {} has {} columns, expected core extent {}",
                    mode,
                    basis.ncols(),
                    rank
                )));
            }
            if basis.nrows() < basis.ncols() {
                return Err(TuckerError::InvalidRanks(format!(
                    "Basis {} has more columns ({}) than rows ({})",
                    mode,
                    basis.ncols(),
                    basis.nrows()
                )));
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

    /// Create an all-zero model of the given extents and ranks, e.g. as the
    /// target of [`import_from`](Self::import_from).
    pub fn zeros(
        dims: (usize, usize, usize),
        ranks: (usize, usize, usize),
    ) -> Result<Self, TuckerError> {
        validate_ranks(dims, ranks)?;
        Ok(Self {
            core: Tensor3::zeros(ranks),
            u1: Array2::zeros((dims.0, ranks.0)),
            u2: Array2::zeros((dims.1, ranks.1)),
            u3: Array2::zeros((dims.2, ranks.2)),
            iters: 0,
        })
    }

    /// The core tensor with extents (J1, J2, J3)
    pub fn core(&self) -> &Tensor3<T> {
        &self.core
    }

    /// The mode-1 basis with shape (I1, J1)
    pub fn u1(&self) -> &Array2<T> {
        &self.u1
    }

    /// The mode-2 basis with shape (I2, J2)
    pub fn u2(&self) -> &Array2<T> {
        &self.u2
    }

    /// The mode-3 basis with shape (I3, J3)
    pub fn u3(&self) -> &Array2<T> {
        &self.u3
    }

    /// Extents (I1, I2, I3) of the tensor this model approximates
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.u1.nrows(), self.u2.nrows(), self.u3.nrows())
    }

    /// Ranks (J1, J2, J3) of the core
    pub fn ranks(&self) -> (usize, usize, usize) {
        self.core.dims()
    }

    /// Number of ALS iterations that produced this model
    pub fn iters(&self) -> usize {
        self.iters
    }

    /// Replace the core. The new core must keep the current ranks.
    pub fn set_core(&mut self, core: Tensor3<T>) -> Result<(), TuckerError> {
        if core.dims() != self.ranks() {
            return Err(TuckerError::ShapeMismatch(format!(
                "Core extents {:?} do not match model ranks {:?}",
                core.dims(),
                self.ranks()
            )));
        }
        self.core = core;
        Ok(())
    }

    /// Replace the mode-1 basis. The new basis must keep the current shape.
    pub fn set_u1(&mut self, u1: Array2<T>) -> Result<(), TuckerError> {
        check_basis_shape(1, &u1, (self.u1.nrows(), self.u1.ncols()))?;
        self.u1 = u1;
        Ok(())
    }

    /// Replace the mode-2 basis. The new basis must keep the current shape.
    pub fn set_u2(&mut self, u2: Array2<T>) -> Result<(), TuckerError> {
        check_basis_shape(2, &u2, (self.u2.nrows(), self.u2.ncols()))?;
        self.u2 = u2;
        Ok(())
    }

    /// Replace the mode-3 basis. The new basis must keep the current shape.
    pub fn set_u3(&mut self, u3: Array2<T>) -> Result<(), TuckerError> {
        check_basis_shape(3, &u3, (self.u3.nrows(), self.u3.ncols()))?;
        self.u3 = u3;
        Ok(())
    }

    /// Reconstruct the approximated tensor: core x_1 u1 x_2 u2 x_3 u3.
    ///
    /// Pure function of the current core and bases; the result has the full
    /// extents (I1, I2, I3).
    pub fn reconstruct(&self) -> anyhow::Result<Tensor3<T>> {
        tucker_product(
            &self.core,
            &self.u1.view(),
            &self.u2.view(),
            &self.u3.view(),
        )
    }

    /// Relative reconstruction error ||X - X_approx||_F / ||X||_F.
    ///
    /// For an all-zero original the absolute error is returned instead.
    pub fn relative_error(&self, original: &Tensor3<T>) -> anyhow::Result<T>
    where
        T: Sum,
    {
        let reconstructed = self.reconstruct()?;
        let error = (original - &reconstructed).frobenius_norm();
        let norm = original.frobenius_norm();

        if norm > T::zero() {
            Ok(error / norm)
        } else {
            Ok(error)
        }
    }

    /// Compression ratio: original elements / (core + basis elements)
    pub fn compression_ratio(&self) -> f64 {
        let (i1, i2, i3) = self.dims();
        let original_elements = i1 * i2 * i3;

        let core_elements = self.core.len();
        let basis_elements = self.u1.len() + self.u2.len() + self.u3.len();

        original_elements as f64 / (core_elements + basis_elements) as f64
    }
}

fn check_basis_shape<T>(
    mode: usize,
    basis: &Array2<T>,
    expected: (usize, usize),
) -> Result<(), TuckerError> {
    if (basis.nrows(), basis.ncols()) != expected {
        return Err(TuckerError::ShapeMismatch(format!(
            "Basis {} has shape ({}, {}), expected ({}, {})",
            mode,
            basis.nrows(),
            basis.ncols(),
            expected.0,
            expected.1
        )));
    }
    Ok(())
}

pub(crate) fn validate_ranks(
    dims: (usize, usize, usize),
    ranks: (usize, usize, usize),
) -> Result<(), TuckerError> {
    let pairs = [(ranks.0, dims.0), (ranks.1, dims.1), (ranks.2, dims.2)];
    for (mode, &(rank, extent)) in pairs.iter().enumerate() {
        if rank == 0 {
            return Err(TuckerError::InvalidRanks(format!("Rank {} is zero", mode)));
        }
        if rank > extent {
            return Err(TuckerError::InvalidRanks(format!(
                "Rank {} ({}) exceeds mode-{} extent ({})",
                mode, rank, mode, extent
            )));
        }
    }
    Ok(())
}

fn shape_err(context: &str) -> impl Fn(anyhow::Error) -> TuckerError + '_ {
    move |e| TuckerError::ShapeMismatch(format!("{}: {}", context, e))
}

/// Extract the first `rank` columns of a matrix, zero-padding if the matrix
/// has fewer columns than requested (degenerate thin SVDs).
fn extract_columns<T>(matrix: &Array2<T>, rank: usize) -> Array2<T>
where
    T: Clone + Float,
{
    let rows = matrix.nrows();
    let available = rank.min(matrix.ncols());

    let mut result = Array2::<T>::zeros((rows, rank));
    for i in 0..rows {
        for j in 0..available {
            result[[i, j]] = matrix[[i, j]];
        }
    }
    result
}

/// Dominant left-singular subspace of an unfolding, truncated to `rank`.
///
/// On SVD failure or an all-zero spectrum the result is the zero matrix of
/// the expected shape. That is the defined fallback, not an error: later
/// arithmetic on a zero basis is well-defined and simply fails to improve
/// the affected mode.
fn svd_basis<T>(unfolded: &Array2<T>, rank: usize) -> Array2<T>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let rows = unfolded.nrows();

    match svd(&unfolded.view(), false, None) {
        Ok((u, s, _vt)) => {
            if s.iter().all(|&sigma| sigma <= T::zero()) {
                warn!(rank, "degenerate spectrum, substituting zero basis");
                Array2::zeros((rows, rank))
            } else {
                extract_columns(&u, rank)
            }
        }
        Err(e) => {
            warn!(rank, error = %e, "SVD failed, substituting zero basis");
            Array2::zeros((rows, rank))
        }
    }
}

/// Mode-wise basis extraction: matricize `tensor` along `mode` and keep the
/// top `rank` left-singular vectors of the unfolding.
pub fn mode_basis<T>(
    tensor: &Tensor3<T>,
    mode: usize,
    rank: usize,
) -> Result<Array2<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let unfolded = tensor.unfold(mode).map_err(shape_err("Unfold failed"))?;
    Ok(svd_basis(&unfolded, rank))
}

/// Derive the core by projecting the data through the transposed bases:
/// core = data x_1 U1^T x_2 U2^T x_3 U3^T.
///
/// Valid whenever the bases have orthonormal columns (always the case right
/// after SVD extraction), where the pseudo-inverse equals the transpose.
pub fn derive_core_orthogonal<T>(
    data: &Tensor3<T>,
    u1: &ArrayView2<T>,
    u2: &ArrayView2<T>,
    u3: &ArrayView2<T>,
) -> Result<Tensor3<T>, TuckerError>
where
    T: Clone + Float,
{
    let u1_t = transpose(u1);
    let u2_t = transpose(u2);
    let u3_t = transpose(u3);

    tucker_product(data, &u1_t.view(), &u2_t.view(), &u3_t.view())
        .map_err(shape_err("Core projection failed"))
}

/// Derive the core through Moore-Penrose pseudo-inverses of the bases:
/// core = data x_1 U1+ x_2 U2+ x_3 U3+.
///
/// More expensive than [`derive_core_orthogonal`], but correct for bases that
/// are not orthonormal (e.g. after cross-model transforms).
pub fn derive_core<T>(
    data: &Tensor3<T>,
    u1: &ArrayView2<T>,
    u2: &ArrayView2<T>,
    u3: &ArrayView2<T>,
) -> Result<Tensor3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let u1_pinv = pseudo_inverse(u1);
    let u2_pinv = pseudo_inverse(u2);
    let u3_pinv = pseudo_inverse(u3);

    tucker_product(data, &u1_pinv.view(), &u2_pinv.view(), &u3_pinv.view())
        .map_err(shape_err("Core projection failed"))
}

/// Project `data` onto the pseudo-inverses of the mode-2 and mode-3 bases,
/// isolating mode 1: the result has extents (I1, J2, J3).
pub fn optimize_mode1<T>(
    data: &Tensor3<T>,
    u2: &ArrayView2<T>,
    u3: &ArrayView2<T>,
) -> Result<Tensor3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let u2_pinv = pseudo_inverse(u2);
    let u3_pinv = pseudo_inverse(u3);

    let tmp = nmode_product(data, &u2_pinv.view(), 1).map_err(shape_err("Mode-2 projection"))?;
    nmode_product(&tmp, &u3_pinv.view(), 2).map_err(shape_err("Mode-3 projection"))
}

/// Project `data` onto the pseudo-inverses of the mode-1 and mode-3 bases,
/// isolating mode 2: the result has extents (J1, I2, J3).
pub fn optimize_mode2<T>(
    data: &Tensor3<T>,
    u1: &ArrayView2<T>,
    u3: &ArrayView2<T>,
) -> Result<Tensor3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let u1_pinv = pseudo_inverse(u1);
    let u3_pinv = pseudo_inverse(u3);

    let tmp = nmode_product(data, &u1_pinv.view(), 0).map_err(shape_err("Mode-1 projection"))?;
    nmode_product(&tmp, &u3_pinv.view(), 2).map_err(shape_err("Mode-3 projection"))
}

/// Project `data` onto the pseudo-inverses of the mode-1 and mode-2 bases,
/// isolating mode 3: the result has extents (J1, J2, I3).
pub fn optimize_mode3<T>(
    data: &Tensor3<T>,
    u1: &ArrayView2<T>,
    u2: &ArrayView2<T>,
) -> Result<Tensor3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    let u1_pinv = pseudo_inverse(u1);
    let u2_pinv = pseudo_inverse(u2);

    let tmp = nmode_product(data, &u1_pinv.view(), 0).map_err(shape_err("Mode-1 projection"))?;
    nmode_product(&tmp, &u2_pinv.view(), 1).map_err(shape_err("Mode-2 projection"))
}

/// Compute the Tucker-HOSVD decomposition.
///
/// Extracts each mode's basis independently from the mode's unfolding, then
/// derives the core through the transposed bases. No coupling between modes;
/// usable standalone for moderate accuracy and as the ALS starting point.
///
/// # Errors
///
/// Returns an error if any rank is zero or exceeds the matching extent.
///
/// # Examples
///
/// ```
/// use tuckr_core::Tensor3;
/// use tuckr_decomp::tucker3_hosvd;
///
/// let tensor = Tensor3::<f64>::random_uniform((10, 10, 10), 0.0, 1.0);
/// let model = tucker3_hosvd(&tensor, (5, 5, 5)).unwrap();
///
/// assert_eq!(model.core().dims(), (5, 5, 5));
/// assert_eq!(model.u1().shape(), &[10, 5]);
/// ```
pub fn tucker3_hosvd<T>(
    tensor: &Tensor3<T>,
    ranks: (usize, usize, usize),
) -> Result<Tucker3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    validate_ranks(tensor.dims(), ranks)?;

    let u1 = mode_basis(tensor, 0, ranks.0)?;
    let u2 = mode_basis(tensor, 1, ranks.1)?;
    let u3 = mode_basis(tensor, 2, ranks.2)?;

    let core = derive_core_orthogonal(tensor, &u1.view(), &u2.view(), &u3.view())?;

    Ok(Tucker3 {
        core,
        u1,
        u2,
        u3,
        iters: 0,
    })
}

/// Compute the Tucker decomposition by higher-order orthogonal iteration.
///
/// Seeds the bases with HOSVD, then repeats up to `max_iterations` times: for
/// each mode in order, project the data onto the other two modes'
/// pseudo-inverse bases and re-extract that mode's basis from the
/// projection's unfolding (mode 2 consumes mode 1's just-updated basis);
/// re-derive the core; reconstruct and measure the Frobenius norm. The loop
/// stops early once `new_norm - previous_norm <= min_improvement`. A final
/// core derivation keeps the core consistent with the last-updated bases.
///
/// Non-convergence is not an error: the cap bounds the loop and the model at
/// that point is returned.
///
/// # Examples
///
/// ```
/// use tuckr_core::Tensor3;
/// use tuckr_decomp::tucker3_als;
///
/// let tensor = Tensor3::<f64>::random_uniform((8, 8, 8), 0.0, 1.0);
/// let model = tucker3_als(&tensor, (4, 4, 4), 3, 0.1).unwrap();
/// assert!(model.iters() <= 3);
/// ```
pub fn tucker3_als<T>(
    tensor: &Tensor3<T>,
    ranks: (usize, usize, usize),
    max_iterations: usize,
    min_improvement: T,
) -> Result<Tucker3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    // Initializing: seed all three bases
    let mut model = tucker3_hosvd(tensor, ranks)?;

    let max_norm = tensor.frobenius_norm();
    let mut last_norm = model
        .reconstruct()
        .map_err(shape_err("Reconstruction failed"))?
        .frobenius_norm();
    let mut improvement = max_norm - last_norm;

    // Iterating
    let mut iters = 0;
    while improvement > min_improvement && iters < max_iterations {
        let projection1 = optimize_mode1(tensor, &model.u2.view(), &model.u3.view())?;
        model.u1 = mode_basis(&projection1, 0, ranks.0)?;

        let projection2 = optimize_mode2(tensor, &model.u1.view(), &model.u3.view())?;
        model.u2 = mode_basis(&projection2, 1, ranks.1)?;

        let projection3 = optimize_mode3(tensor, &model.u1.view(), &model.u2.view())?;
        model.u3 = mode_basis(&projection3, 2, ranks.2)?;

        model.core =
            derive_core_orthogonal(tensor, &model.u1.view(), &model.u2.view(), &model.u3.view())?;

        let norm = model
            .reconstruct()
            .map_err(shape_err("Reconstruction failed"))?
            .frobenius_norm();
        improvement = norm - last_norm;
        last_norm = norm;
        iters += 1;

        debug!(
            iteration = iters,
            norm = ?norm,
            improvement = ?improvement,
            "ALS iteration"
        );
    }

    // Converged: keep the core consistent with the last-updated bases
    model.core =
        derive_core_orthogonal(tensor, &model.u1.view(), &model.u2.view(), &model.u3.view())?;
    model.iters = iters;

    Ok(model)
}

/// Compute a Tucker3 model from raw data.
///
/// The single public entry point: ALS with the default iteration cap
/// ([`DEFAULT_MAX_ITERATIONS`]) and improvement threshold
/// ([`DEFAULT_MIN_IMPROVEMENT`]).
///
/// # Examples
///
/// ```
/// use tuckr_core::Tensor3;
/// use tuckr_decomp::tucker3_decompose;
///
/// let tensor = Tensor3::<f64>::ones((4, 4, 4));
/// let model = tucker3_decompose(&tensor, (2, 2, 2)).unwrap();
///
/// let error = model.relative_error(&tensor).unwrap();
/// assert!(error < 1e-10);
/// ```
pub fn tucker3_decompose<T>(
    tensor: &Tensor3<T>,
    ranks: (usize, usize, usize),
) -> Result<Tucker3<T>, TuckerError>
where
    T: Float + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + std::fmt::Debug + 'static,
{
    tucker3_als(
        tensor,
        ranks,
        DEFAULT_MAX_ITERATIONS,
        T::from(DEFAULT_MIN_IMPROVEMENT).unwrap(),
    )
}
