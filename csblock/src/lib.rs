//! csblock - sparse submatrix extraction and insertion
//!
//! This library clips rectangular windows out of sparse matrices and patches
//! scaled blocks back in, on top of a compressed-column kernel.
//!
//! ## Architecture
//!
//! - **csblock-core**: matrix model, error enum, kernel trait and validation (no I/O)
//! - **csblock**: the reference kernel, the block engine, the Matrix Market
//!   loader and debug output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csblock::{load_matrix_market, BlockEngine, CsMatrix};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = BlockEngine::new();
//!     let a: CsMatrix = engine.compress(&load_matrix_market("matrix.mtx")?)?.into();
//!
//!     // Take the top-left 2x2 block and add it back twice over
//!     let block = engine.clip(&a, 0, 0, 2, 2)?;
//!     let patched = engine.patch(a.as_compressed()?, &block, 0, 0, 2.0)?;
//!     println!("{}", csblock::render(&patched.into(), "patched"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: load Matrix Market files through a memory map
//! - **serde**: JSON round trip of matrices
//! - **cli**: the `block_cli` example binary

pub use csblock_core::{
    // Matrix model
    max_abs_difference, CsMatrix, CscMatrix, TripletMatrix,
    // Traits
    Kernel, SparseMatrix,
    // Errors
    CsError, Result,
    // Matrix Market typecodes
    MmField, MmFormat, MmSymmetry, MmTypecode,
    // Validation
    validate_offset, validate_split, validate_window,
};

pub mod block;
pub mod config;
pub mod construct;
pub mod convert;
pub mod dump;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod loader;
pub mod partition;

pub use config::{EngineConfig, LoadConfig};
pub use dump::{dump, render};
#[cfg(feature = "serde")]
pub use dump::{from_json, to_json};
pub use engine::BlockEngine;
pub use error::LoadError;
pub use kernel::CsKernel;
#[cfg(feature = "mmap")]
pub use loader::load_matrix_market_mmap;
pub use loader::{load_matrix_market, load_matrix_market_with, parse_matrix_market, read_matrix_market};
pub use partition::Blocks;
