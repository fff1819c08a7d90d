//! Dense order-3 tensor implementation and operations
//!
//! The `Tensor3` type is defined in `types`; operations are organized into
//! functional sub-modules.

pub mod types;

mod creation;
mod functions;
mod indexing;
mod matricization;
mod statistics;

pub use types::Tensor3;
