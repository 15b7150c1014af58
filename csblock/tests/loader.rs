//! Matrix Market loading from real files

use std::io::Write;

use csblock::{
    load_matrix_market, load_matrix_market_with, BlockEngine, CsError, CsMatrix, LoadConfig,
    LoadError, SparseMatrix,
};
use tempfile::NamedTempFile;

fn write_mtx(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const LU: &str = "%%MatrixMarket matrix coordinate real general
% 3x3 sample
3 3 6
1 1 2.0
2 1 3.0
3 2 1.0
1 3 3.0
2 2 6.0
3 3 4.0
";

#[test]
fn test_load_valid_file() {
    let file = write_mtx(LU);
    let t = load_matrix_market(file.path()).unwrap();

    assert_eq!(t.dimensions(), (3, 3));
    assert_eq!(t.nz(), 6);
    assert_eq!(t.nzmax(), 6);
    assert_eq!(t.row_indices(), &[0, 1, 2, 0, 1, 2]);
    assert_eq!(t.col_indices(), &[0, 0, 1, 2, 1, 2]);

    let engine = BlockEngine::new();
    let a: CsMatrix = engine.compress(&t).unwrap().into();
    let block = engine.clip(&a, 0, 0, 2, 2).unwrap();
    assert_eq!(block.nnz(), 3);
    assert_eq!(block.get_element(1, 1), Some(6.0));
}

#[cfg(feature = "mmap")]
#[test]
fn test_load_through_mmap() {
    let file = write_mtx(LU);
    let buffered = load_matrix_market(file.path()).unwrap();
    let mapped =
        load_matrix_market_with(file.path(), &LoadConfig::default().with_mmap(true)).unwrap();
    assert_eq!(buffered, mapped);
}

#[test]
fn test_mmap_request_loads_with_or_without_feature() {
    let file = write_mtx(LU);
    let config = LoadConfig::default().with_mmap(true);
    let t = load_matrix_market_with(file.path(), &config).unwrap();
    assert_eq!(t, load_matrix_market(file.path()).unwrap());
}

#[test]
fn test_load_in_parallel() {
    let file = write_mtx(LU);
    let config = LoadConfig::default().with_parallel_threshold(1);
    let t = load_matrix_market_with(file.path(), &config).unwrap();
    assert_eq!(t, load_matrix_market(file.path()).unwrap());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_matrix_market(dir.path().join("absent.mtx"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_rejects_complex() {
    let file = write_mtx("%%MatrixMarket matrix coordinate complex general\n2 2 1\n1 1 1.0 0.5\n");
    match load_matrix_market(file.path()) {
        Err(LoadError::UnsupportedType(kind)) => assert!(kind.contains("complex")),
        other => panic!("expected UnsupportedType, got {other:?}"),
    }

    let file = write_mtx("%%MatrixMarket matrix coordinate real hermitian\n2 2 1\n1 1 1.0\n");
    assert!(matches!(
        load_matrix_market(file.path()),
        Err(LoadError::UnsupportedType(_))
    ));
}

#[test]
fn test_rejects_malformed_header() {
    let file = write_mtx("MatrixMarket matrix coordinate real general\n2 2 0\n");
    assert!(matches!(load_matrix_market(file.path()), Err(LoadError::Banner(_))));

    let file = write_mtx("%%MatrixMarket matrix coordinate real general\n2 2\n");
    assert!(matches!(load_matrix_market(file.path()), Err(LoadError::Size(_))));
}

#[test]
fn test_rejects_truncated_file() {
    let file = write_mtx("%%MatrixMarket matrix coordinate real general\n3 3 4\n1 1 1.0\n2 2 2.0\n");
    assert!(matches!(
        load_matrix_market(file.path()),
        Err(LoadError::Truncated { expected: 4, found: 2 })
    ));
}

#[test]
fn test_rejects_index_outside_shape() {
    let file = write_mtx("%%MatrixMarket matrix coordinate real general\n2 2 2\n1 1 1.0\n1 3 1.0\n");
    assert!(matches!(
        load_matrix_market(file.path()),
        Err(LoadError::Entry { line: 4, reason: CsError::IndexOutOfBounds })
    ));

    let file = write_mtx("%%MatrixMarket matrix coordinate real general\n2 2 1\n0 1 1.0\n");
    assert!(matches!(
        load_matrix_market(file.path()),
        Err(LoadError::Entry { line: 3, reason: CsError::IndexOutOfBounds })
    ));
}

#[test]
fn test_pattern_and_symmetric_files() {
    let file = write_mtx("%%MatrixMarket matrix coordinate pattern general\n2 3 2\n1 3\n2 1\n");
    let t = load_matrix_market(file.path()).unwrap();
    assert_eq!(t.dimensions(), (2, 3));
    assert_eq!(t.values(), &[1.0, 1.0]);

    // Symmetric files keep only the stored triangle
    let file = write_mtx("%%MatrixMarket matrix coordinate real symmetric\n2 2 2\n1 1 4.0\n2 1 -1.0\n");
    let t = load_matrix_market(file.path()).unwrap();
    assert_eq!(t.nz(), 2);
    assert_eq!(t.get_element(1, 0), Some(-1.0));
    assert_eq!(t.get_element(0, 1), None);
}
