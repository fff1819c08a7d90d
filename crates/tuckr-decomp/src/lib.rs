//! # tuckr-decomp - Tucker3 Decomposition Engine
//!
//! Fixed-rank Tucker decomposition for dense third-order tensors.
//!
//! The Tucker model factorizes a tensor X with extents (I1, I2, I3) into a
//! small core tensor G with extents (J1, J2, J3), Jk <= Ik, and one basis
//! matrix per mode:
//!
//! ```text
//! X ~ G x_1 U1 x_2 U2 x_3 U3
//! ```
//!
//! ## Algorithms
//!
//! - [`tucker3_hosvd`]: Higher-Order SVD. One pass, one SVD per mode; a good
//!   starting point and a usable standalone decomposition.
//! - [`tucker3_als`]: Higher-Order Orthogonal Iteration (alternating least
//!   squares). Seeds with HOSVD, then refines one mode at a time against the
//!   pseudo-inverses of the other two until the reconstruction norm stops
//!   improving or the iteration cap is hit.
//! - [`tucker3_decompose`]: the public entry point; ALS with the default cap
//!   and improvement threshold.
//!
//! ## Cross-model transforms
//!
//! An already-computed [`Tucker3`] can be turned into a model of a different
//! shape without touching the raw data: [`Tucker3::reduce_ranks`],
//! [`Tucker3::subsample`], [`Tucker3::subsample_mean`], and
//! [`Tucker3::region_of_interest`].
//!
//! ## Quick Start
//!
//! ```
//! use tuckr_core::Tensor3;
//! use tuckr_decomp::tucker3_decompose;
//!
//! let tensor = Tensor3::<f64>::random_uniform((10, 10, 10), 0.0, 1.0);
//! let model = tucker3_decompose(&tensor, (5, 5, 5)).unwrap();
//!
//! assert_eq!(model.ranks(), (5, 5, 5));
//! let approx = model.reconstruct().unwrap();
//! assert_eq!(approx.dims(), (10, 10, 10));
//! ```
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext` and all SVDs come from
//! `scirs2_linalg`. Direct use of `ndarray` or `rand` is forbidden.
//!
//! ## Numerical degeneracy
//!
//! When a mode's SVD fails or the unfolding has an all-zero spectrum, the
//! affected basis is the zero matrix of the expected shape. The decomposition
//! still terminates and returns a documented degraded result instead of
//! aborting; decomposing an all-zero tensor yields all-zero bases.
//!
//! ## References
//!
//! - Tucker (1966), "Some mathematical notes on three-mode factor analysis"
//! - De Lathauwer et al. (2000a), "A multilinear singular value decomposition"
//! - De Lathauwer et al. (2000b), "On the best rank-1 and rank-(R1, R2, ..., Rn)
//!   approximation of higher-order tensors"
//! - Kolda & Bader (2009), "Tensor Decompositions and Applications"

#![deny(warnings)]

pub mod io;
pub mod transforms;
pub mod tucker;


pub use tucker::*;
