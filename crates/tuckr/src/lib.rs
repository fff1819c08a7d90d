//! # tuckr - Tucker3 Decomposition Stack
//!
//! Fixed-rank Tucker decomposition (higher-order SVD / higher-order
//! orthogonal iteration) for dense third-order tensors.
//!
//! This is the meta crate that re-exports all tuckr components:
//!
//! - [`core`]: the dense [`Tensor3`](core::Tensor3) container and
//!   matricization (unfold/fold)
//! - [`kernels`]: n-mode products, the full Tucker product, and the
//!   Moore-Penrose pseudo-inverse
//! - [`decomp`]: the [`Tucker3`](decomp::Tucker3) model, HOSVD and ALS
//!   decompositions, cross-model transforms, and flat export/import
//!
//! ## Quick Start
//!
//! ```
//! use tuckr::prelude::*;
//!
//! // A 10x10x10 volume compressed to a (4, 4, 4) core
//! let tensor = Tensor3::<f64>::random_uniform((10, 10, 10), 0.0, 1.0);
//! let model = tucker3_decompose(&tensor, (4, 4, 4)).unwrap();
//!
//! let approx = model.reconstruct().unwrap();
//! assert_eq!(approx.dims(), (10, 10, 10));
//! println!("compression: {:.1}x", model.compression_ratio());
//! ```

#![deny(warnings)]

pub use tuckr_core as core;
pub use tuckr_decomp as decomp;
pub use tuckr_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tuckr::prelude::*;
    //!
    //! let tensor = Tensor3::<f64>::zeros((4, 4, 4));
    //! ```

    pub use crate::core::Tensor3;

    pub use crate::decomp::{
        tucker3_als, tucker3_decompose, tucker3_hosvd, Tucker3, TuckerError,
    };

    pub use crate::kernels::{nmode_product, pseudo_inverse, tucker_product};
}
