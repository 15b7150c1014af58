//! Matrix Market coordinate file loader
//!
//! Reads `%%MatrixMarket matrix coordinate <field> <symmetry>` files into a
//! triplet matrix with 0-based indices. The stored entries are taken as they
//! are: symmetric files are not mirrored. Complex and dense (`array`) files
//! are rejected.

use std::{fs, io::Read, path::Path};

use csblock_core::{
    is_skippable, parse_banner, parse_entry_line, parse_size_line, CsError, TripletMatrix,
};
#[cfg(feature = "mmap")]
use memmap2::Mmap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::error::LoadError;

/// Load a Matrix Market file with the default configuration
pub fn load_matrix_market<P: AsRef<Path>>(path: P) -> Result<TripletMatrix, LoadError> {
    load_matrix_market_with(path, &LoadConfig::default())
}

/// Load a Matrix Market file
pub fn load_matrix_market_with<P: AsRef<Path>>(
    path: P,
    config: &LoadConfig,
) -> Result<TripletMatrix, LoadError> {
    let path = path.as_ref();

    #[cfg(feature = "mmap")]
    if config.use_mmap {
        return load_matrix_market_mmap(path, config);
    }

    #[cfg(not(feature = "mmap"))]
    if config.use_mmap {
        tracing::warn!(
            path = %path.display(),
            "memory mapping needs the `mmap` feature, reading the file instead"
        );
    }

    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read Matrix Market file");
    parse_matrix_market(&text, config)
}

/// Load a Matrix Market file through a read-only memory map
#[cfg(feature = "mmap")]
pub fn load_matrix_market_mmap<P: AsRef<Path>>(
    path: P,
    config: &LoadConfig,
) -> Result<TripletMatrix, LoadError> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;

    // SAFETY: the map is read-only and lives only for this call. Another
    // process truncating the file while we parse is not guarded against.
    let mmap = unsafe { Mmap::map(&file)? };
    debug!(path = %path.display(), bytes = mmap.len(), "mapped Matrix Market file");

    let text = std::str::from_utf8(&mmap)?;
    parse_matrix_market(text, config)
}

/// Read a whole Matrix Market stream
pub fn read_matrix_market<R: Read>(
    mut reader: R,
    config: &LoadConfig,
) -> Result<TripletMatrix, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_matrix_market(&text, config)
}

/// Parse Matrix Market text already held in memory
pub fn parse_matrix_market(text: &str, config: &LoadConfig) -> Result<TripletMatrix, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let banner = lines.next().map(|(_, line)| line).unwrap_or("");
    let typecode = parse_banner(banner).map_err(|err| match err {
        CsError::UnsupportedType => LoadError::UnsupportedType(banner.trim().to_string()),
        _ => LoadError::Banner(banner.to_string()),
    })?;

    if typecode.is_complex() || !typecode.is_sparse() {
        return Err(LoadError::UnsupportedType(typecode.to_string()));
    }

    let size_line = lines
        .by_ref()
        .map(|(_, line)| line)
        .find(|line| !is_skippable(line))
        .ok_or_else(|| LoadError::Size(String::new()))?;
    let (nrows, ncols, nnz) =
        parse_size_line(size_line).map_err(|_| LoadError::Size(size_line.to_string()))?;

    info!(nrows, ncols, nnz, typecode = %typecode, "(M, N, nz)");

    let entry_lines: Vec<(usize, &str)> = lines
        .filter(|(_, line)| !is_skippable(line))
        .take(nnz)
        .collect();
    if entry_lines.len() < nnz {
        return Err(LoadError::Truncated {
            expected: nnz,
            found: entry_lines.len(),
        });
    }

    let field = typecode.field;
    let parse = |&(line, text): &(usize, &str)| {
        parse_entry_line(text, field, nrows, ncols).map_err(|reason| LoadError::Entry { line, reason })
    };

    let parallel = config.parse_in_parallel(nnz);
    let entries: Vec<(usize, usize, f64)> = if parallel {
        entry_lines.par_iter().map(parse).collect::<Result<_, _>>()?
    } else {
        entry_lines.iter().map(parse).collect::<Result<_, _>>()?
    };
    debug!(parallel, entries = entries.len(), "parsed entry lines");

    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut values = Vec::with_capacity(nnz);
    for (row, col, value) in entries {
        rows.push(row);
        cols.push(col);
        values.push(value);
    }

    Ok(TripletMatrix::from_parts(nrows, ncols, rows, cols, values)?)
}
