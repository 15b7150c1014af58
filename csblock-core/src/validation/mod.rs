//! Validation utilities
//!
//! Pure checks on block windows and Matrix Market text lines, with no I/O
//! dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_offset, validate_split, validate_window};
pub use parsing::{is_skippable, parse_banner, parse_entry_line, parse_size_line};
