//! # tuckr-kernels
//!
//! Tensor-times-matrix kernels for the tuckr stack:
//!
//! - **N-mode product** ([`nmode_product`]): multiply an order-3 tensor by a
//!   matrix along one mode
//! - **Full Tucker product** ([`tucker_product`]): apply one matrix per mode
//!   in sequence, the reconstruction/projection workhorse
//! - **Moore-Penrose pseudo-inverse** ([`pseudo_inverse`]): SVD-based, used
//!   to project onto possibly non-orthonormal bases
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`; SVD comes from
//! `scirs2_linalg`. Direct use of `ndarray` is forbidden.
//!
//! # Examples
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use tuckr_core::Tensor3;
//! use tuckr_kernels::nmode_product;
//!
//! let tensor = Tensor3::from_vec((0..24).map(|x| x as f64).collect(), (2, 3, 4)).unwrap();
//! let matrix = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]; // 2x3, applied to mode 1
//!
//! let result = nmode_product(&tensor, &matrix.view(), 1).unwrap();
//! assert_eq!(result.dims(), (2, 2, 4));
//! ```

#![deny(warnings)]

mod matmul;
mod nmode;
mod pinv;

#[cfg(test)]
mod property_tests;

pub use matmul::{matmul, transpose};
pub use nmode::{nmode_product, tucker_product};
pub use pinv::pseudo_inverse;
