#![no_std]

//! csblock core - sparse matrix model and kernel contract
//!
//! This crate provides the dual-representation matrix types, the error enum,
//! the kernel trait the block layer is written against, and pure validation
//! and parsing helpers. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use matrix::*;
pub use traits::*;
pub use validation::*;
