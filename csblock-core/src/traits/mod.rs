//! Abstract interfaces shared by every crate in the workspace
//!
//! Traits are pure interfaces; concrete kernels live in `csblock`.

pub mod kernel;
pub mod matrix;

pub use kernel::Kernel;
pub use matrix::SparseMatrix;
