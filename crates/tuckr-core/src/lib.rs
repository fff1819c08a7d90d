//! # tuckr-core
//!
//! Dense order-3 tensor type and matricization primitives for the tuckr stack.
//!
//! This crate provides the data structures the decomposition engine operates on:
//!
//! - **Dense order-3 tensors** ([`Tensor3`]) with fixed extents, bounds-checked
//!   indexing, and elementwise arithmetic
//! - **Matricization** (unfold/fold): the three canonical 2D unfoldings of a
//!   third-order tensor and their inverse
//! - **Frobenius norm**, the approximation-quality metric used throughout the
//!   decomposition crates
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all scientific computing operations.
//! Direct use of `ndarray`, `rand`, or `num-traits` is forbidden.
//!
//! ## Quick Start
//!
//! ```
//! use tuckr_core::Tensor3;
//!
//! let tensor = Tensor3::<f64>::zeros((2, 3, 4));
//! assert_eq!(tensor.dims(), (2, 3, 4));
//!
//! // Mode-1 unfolding has shape (I2, I1 * I3)
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//!
//! // Fold is the exact inverse
//! let folded = Tensor3::fold(&unfolded, (2, 3, 4), 1).unwrap();
//! assert_eq!(folded.dims(), (2, 3, 4));
//! ```
//!
//! ## Memory Layout
//!
//! Tensors are C-contiguous (row-major). The unfold/fold pair uses a single
//! fixed linearization (unfolding mode first, remaining axes in ascending
//! order) so that every consumer in the stack sees the same element ordering.
//!
//! ## Error Handling
//!
//! Operations return `Result<T, anyhow::Error>`:
//!
//! ```
//! use tuckr_core::Tensor3;
//!
//! let tensor = Tensor3::<f64>::zeros((2, 3, 4));
//! assert!(tensor.unfold(3).is_err());
//! ```

#![deny(warnings)]

pub mod dense;


pub use dense::Tensor3;
