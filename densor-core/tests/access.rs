use densor_core::{
    index::{checked_flat_offset, contiguous_strides, flat_offset, offset_1d, offset_2d, offset_3d},
    Error, Shape, Tensor,
};

#[test]
fn offset_formula() {
    assert_eq!(flat_offset(&[1, 2, 3], &[2, 3, 4]), 1 * 3 * 4 + 2 * 4 + 3);
    assert_eq!(flat_offset(&[1, 2, 3], &[2, 3, 4]), 23);
    assert_eq!(contiguous_strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(Shape::from([2, 3, 4]).strides(), vec![12, 4, 1]);
    assert_eq!(flat_offset(&[], &[]), 0);
}

#[test]
fn offset_matches_strides_for_rank_4() {
    let dims = [2, 3, 4, 5];
    let strides = contiguous_strides(&dims);
    let idx = [1, 2, 3, 4];
    let expected: usize = idx.iter().zip(&strides).map(|(i, s)| i * s).sum();
    assert_eq!(flat_offset(&idx, &dims), expected);
    assert_eq!(flat_offset(&idx, &dims), 119);
}

#[test]
fn rank_specializations_agree_with_general_formula() {
    for i in 0..7 {
        assert_eq!(offset_1d(i), flat_offset(&[i], &[7]));
    }
    for r in 0..3 {
        for c in 0..5 {
            assert_eq!(offset_2d(r, c, [3, 5]), r * 5 + c);
            assert_eq!(offset_2d(r, c, [3, 5]), flat_offset(&[r, c], &[3, 5]));
        }
    }
    let dims = [2, 3, 4];
    for x in 0..2 {
        for y in 0..3 {
            for z in 0..4 {
                let expected = x * dims[1] * dims[2] + y * dims[2] + z;
                assert_eq!(offset_3d(x, y, z, dims), expected);
                assert_eq!(flat_offset(&[x, y, z], &dims), expected);
            }
        }
    }
}

#[test]
fn rank_three_offsets_are_a_bijection() {
    let dims = [3, 2, 5];
    let mut seen = vec![false; 30];
    for x in 0..3 {
        for y in 0..2 {
            for z in 0..5 {
                let off = checked_flat_offset(&[x, y, z], &dims).unwrap();
                assert!(!seen[off]);
                seen[off] = true;
            }
        }
    }
    assert!(seen.into_iter().all(|s| s));
}

#[test]
fn checked_offset_errors() {
    assert!(matches!(
        checked_flat_offset(&[1, 2], &[2, 3, 4]).unwrap_err(),
        Error::RankMismatch {
            expected: 3,
            got: 2
        }
    ));
    assert!(matches!(
        checked_flat_offset(&[1, 3, 0], &[2, 3, 4]).unwrap_err(),
        Error::IndexOutOfBounds { .. }
    ));
}

#[test]
fn checked_offset_reports_overflow() {
    assert!(matches!(
        checked_flat_offset(&[usize::MAX - 1, 0], &[usize::MAX, 3]).unwrap_err(),
        Error::IndexOutOfBounds { .. }
    ));
    assert!(matches!(
        checked_flat_offset(&[1, 0, 0], &[2, usize::MAX, 2]).unwrap_err(),
        Error::IndexOutOfBounds { .. }
    ));
    // An unrepresentable stride is harmless while its coordinate is zero.
    assert_eq!(checked_flat_offset(&[0, 0, 1], &[2, usize::MAX, 2]).unwrap(), 1);
    assert_eq!(
        checked_flat_offset(&[0, usize::MAX - 1], &[1, usize::MAX]).unwrap(),
        usize::MAX - 1
    );
}

#[test]
fn access_and_set_scenario() {
    let mut t = Tensor::<i32>::new(vec![1, 2, 3, 4], [2, 2]).unwrap();
    assert_eq!(t.access(&[1, 0]).unwrap(), 3);

    t.set_at(&[0, 1], 9).unwrap();
    assert_eq!(t.access(&[0, 1]).unwrap(), 9);
    assert_eq!(t.access(&[1, 1]).unwrap(), 4);
    assert_eq!(t.data(), &[1, 9, 3, 4]);
}

macro_rules! test_dtype {
    ($dtype:ty, $value:expr, $dtype_mod:ident) => {
        mod $dtype_mod {
            use super::*;

            #[test]
            fn set_then_access_touches_one_element() {
                let base = Tensor::<$dtype>::zeros([2, 3, 4]).unwrap();
                for x in 0..2 {
                    for y in 0..3 {
                        for z in 0..4 {
                            let mut t = base.clone();
                            t.set_at(&[x, y, z], $value).unwrap();
                            assert_eq!(t.access(&[x, y, z]).unwrap(), $value);
                            let changed = t
                                .data()
                                .iter()
                                .zip(base.data())
                                .filter(|(a, b)| a != b)
                                .count();
                            assert_eq!(changed, 1);
                        }
                    }
                }
            }

            #[test]
            fn access_out_of_bounds() {
                let mut t = Tensor::<$dtype>::zeros([2, 3]).unwrap();
                for idx in [[2, 0], [0, 3], [5, 5]] {
                    assert!(matches!(
                        t.access(&idx).unwrap_err(),
                        Error::IndexOutOfBounds { .. }
                    ));
                    assert!(matches!(
                        t.set_at(&idx, $value).unwrap_err(),
                        Error::IndexOutOfBounds { .. }
                    ));
                }
                assert_eq!(t, Tensor::<$dtype>::zeros([2, 3]).unwrap());
            }

            #[test]
            fn access_rank_mismatch() {
                let mut t = Tensor::<$dtype>::zeros([2, 3]).unwrap();
                assert!(matches!(
                    t.access(&[1]).unwrap_err(),
                    Error::RankMismatch {
                        expected: 2,
                        got: 1
                    }
                ));
                assert!(matches!(
                    t.set_at(&[0, 0, 0], $value).unwrap_err(),
                    Error::RankMismatch {
                        expected: 2,
                        got: 3
                    }
                ));
            }

            #[test]
            fn views_expose_buffers() {
                let mut t = Tensor::<$dtype>::zeros([2, 3]).unwrap();
                let view = t.view();
                assert_eq!(view.len(), 6);
                assert_eq!(view.rank(), 2);
                assert_eq!(view.dims(), &[2, 3]);
                assert_eq!(view.as_ptr(), t.data().as_ptr());

                let mut view = t.view_mut();
                view.as_mut_slice()[4] = $value;
                assert_eq!(view.as_slice()[4], $value);
                assert_eq!(t.access(&[1, 1]).unwrap(), $value);
            }
        }
    };
}

test_dtype!(i32, 7, i32_test);
test_dtype!(f64, 2.5, f64_test);
