//! End-to-end scenarios over small literal matrices

use csblock::{max_abs_difference, BlockEngine, CsError, CsMatrix, SparseMatrix, TripletMatrix};

fn lu_fixture() -> TripletMatrix {
    TripletMatrix::from_parts(
        3,
        3,
        vec![0, 1, 2, 0, 1, 2],
        vec![0, 0, 1, 2, 1, 2],
        vec![2.0, 3.0, 1.0, 3.0, 6.0, 4.0],
    )
    .unwrap()
}

#[test]
fn test_clip_top_left_window() {
    let engine = BlockEngine::new();
    let a: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    let block = engine.clip(&a, 0, 0, 2, 2).unwrap();
    assert_eq!(block.dimensions(), (2, 2));
    assert_eq!(block.nnz(), 3);

    let entries: Vec<_> = block.iter().collect();
    assert_eq!(entries, vec![(0, 0, 2.0), (1, 0, 3.0), (1, 1, 6.0)]);
    assert_eq!(block.get_element(0, 1), None);
}

#[test]
fn test_identity_three() {
    let engine = BlockEngine::new();
    let eye = engine.identity(3).unwrap();

    let entries: Vec<_> = eye.iter().collect();
    assert_eq!(entries, vec![(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0)]);
}

#[test]
fn test_clip_boundary_rejection() {
    let engine = BlockEngine::new();
    let t: CsMatrix = lu_fixture().into();
    let c: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    for a in [&t, &c] {
        assert_eq!(engine.clip(a, 1, 0, 3, 1), Err(CsError::InvalidArgument));
        assert_eq!(engine.clip(a, 0, 1, 1, 3), Err(CsError::InvalidArgument));
        assert_eq!(engine.clip(a, 0, 0, 4, 4), Err(CsError::InvalidArgument));
        assert_eq!(engine.clip(a, usize::MAX, 0, 1, 1), Err(CsError::InvalidArgument));
        assert!(engine.clip(a, 2, 2, 1, 1).is_ok());
    }
}

#[test]
fn test_copy_independence() {
    let engine = BlockEngine::new();
    let original: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    let mut copy = engine.copy(&original);
    assert_eq!(copy, original);

    if let CsMatrix::Compressed(c) = &mut copy {
        c.values_mut()[0] = 100.0;
    }
    assert_ne!(copy, original);
    assert_eq!(original.as_compressed().unwrap().values()[0], 2.0);

    let triplet: CsMatrix = lu_fixture().into();
    let mut copy = engine.copy(&triplet);
    if let CsMatrix::Triplet(t) = &mut copy {
        t.values_mut()[5] = -4.0;
    }
    assert_eq!(triplet.as_triplet().unwrap().values()[5], 4.0);
    assert!(!copy.is_compressed());
}

#[test]
fn test_diff_of_self_is_zero() {
    let engine = BlockEngine::new();
    let a = engine.compress(&lu_fixture()).unwrap();

    let d = engine.diff(&a, &a).unwrap();
    assert!(d.values().iter().all(|v| v.abs() < 1e-12));
    assert!(d.norm1() < 1e-12);
}

#[test]
fn test_unzip_then_compress() {
    let engine = BlockEngine::new();
    let a: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    let t = engine.unzip(&a).unwrap();
    assert_eq!(t.nz(), 6);
    let back: CsMatrix = engine.compress(&t).unwrap().into();

    assert_eq!(back, a);
    assert_eq!(back.content(), a.content());
}

#[test]
fn test_patch_into_skeleton_reproduces_window() {
    let engine = BlockEngine::new();
    let a: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    let block = engine.clip(&a, 1, 1, 2, 2).unwrap();
    let empty = engine.skeleton_compressed(3, 3);
    let placed: CsMatrix = engine.patch(&empty, &block, 1, 1, 1.0).unwrap().into();

    let content = placed.content();
    assert_eq!(content.len(), 3);
    assert_eq!(content.get(&(1, 1)), Some(&6.0));
    assert_eq!(content.get(&(2, 1)), Some(&1.0));
    assert_eq!(content.get(&(2, 2)), Some(&4.0));
}

#[test]
fn test_split_assemble_and_multiply() {
    let engine = BlockEngine::new();
    let a: CsMatrix = engine.compress(&lu_fixture()).unwrap().into();

    let blocks = engine.split(&a, 1, 2).unwrap();
    let back: CsMatrix = engine.assemble(&blocks).unwrap().into();
    assert_eq!(max_abs_difference(&a, &back), Some(0.0));

    let eye = engine.identity(3).unwrap();
    let product: CsMatrix = engine.multiply(a.as_compressed().unwrap(), &eye).unwrap().into();
    assert_eq!(max_abs_difference(&a, &product), Some(0.0));
}
