//! Matrix Market coordinate format definitions
//!
//! Pure data definitions for the text format the loader reads. No I/O.

pub mod constants;
pub mod typecode;

pub use typecode::{MmField, MmFormat, MmSymmetry, MmTypecode};
