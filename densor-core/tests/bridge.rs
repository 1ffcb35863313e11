use densor_core::{bridge, Tensor};
use rayon::prelude::*;

macro_rules! test_dtype {
    ($dtype:ty, $dtype_mod:ident) => {
        mod $dtype_mod {
            use super::*;

            fn iota(dims: &[usize]) -> Tensor<$dtype> {
                let n = dims.iter().product();
                let (data, _) = Tensor::<$dtype>::arange(0 as $dtype, 1 as $dtype, n).into_parts();
                Tensor::new(data, dims).unwrap()
            }

            #[test]
            fn get_1d_agrees_with_access() {
                let t = iota(&[6]);
                let view = t.view();
                for i in 0..6 {
                    let v = unsafe { bridge::get_1d(view.as_ptr(), i) };
                    assert_eq!(v, t.access(&[i]).unwrap());
                }
            }

            #[test]
            fn get_2d_agrees_with_access() {
                let t = iota(&[3, 5]);
                let view = t.view();
                for r in 0..3 {
                    for c in 0..5 {
                        let v = unsafe { bridge::get_2d(view.as_ptr(), r, c, view.dims_ptr()) };
                        assert_eq!(v, t.access(&[r, c]).unwrap());
                    }
                }
            }

            #[test]
            fn get_3d_agrees_with_access() {
                let t = iota(&[2, 3, 4]);
                let view = t.view();
                for x in 0..2 {
                    for y in 0..3 {
                        for z in 0..4 {
                            let v = unsafe {
                                bridge::get_3d(view.as_ptr(), x, y, z, view.dims_ptr())
                            };
                            assert_eq!(v, t.access(&[x, y, z]).unwrap());
                        }
                    }
                }
                let v = unsafe { bridge::get_3d(view.as_ptr(), 1, 2, 3, view.dims_ptr()) };
                assert_eq!(v, 23 as $dtype);
            }

            #[test]
            fn setters_agree_with_set_at() {
                let mut via_bridge = Tensor::<$dtype>::zeros([2, 3, 4]).unwrap();
                let mut via_set = Tensor::<$dtype>::zeros([2, 3, 4]).unwrap();
                {
                    let view = via_bridge.view_mut();
                    unsafe { bridge::set_3d(view.as_mut_ptr(), 1, 0, 2, view.dims_ptr(), 5 as $dtype) };
                }
                via_set.set_at(&[1, 0, 2], 5 as $dtype).unwrap();
                assert_eq!(via_bridge, via_set);

                let mut m = Tensor::<$dtype>::zeros([3, 2]).unwrap();
                {
                    let view = m.view_mut();
                    unsafe { bridge::set_2d(view.as_mut_ptr(), 2, 1, view.dims_ptr(), 4 as $dtype) };
                }
                assert_eq!(m.access(&[2, 1]).unwrap(), 4 as $dtype);

                let mut v = Tensor::<$dtype>::zeros([4]).unwrap();
                {
                    let view = v.view_mut();
                    unsafe { bridge::set_1d(view.as_mut_ptr(), 3, 8 as $dtype) };
                }
                assert_eq!(v.data(), &[0 as $dtype, 0 as $dtype, 0 as $dtype, 8 as $dtype]);
            }

            // Every parallel worker owns one coordinate, like one accelerator thread.
            #[test]
            fn concurrent_disjoint_writes() {
                let src = iota(&[4, 5, 6]);
                let mut dst = Tensor::<$dtype>::zeros([4, 5, 6]).unwrap();
                {
                    let input = src.view();
                    let output = dst.view_mut();
                    let dims = output.dims();
                    (0..output.len()).into_par_iter().for_each(|flat| {
                        let (x, y, z) = (flat / 30, (flat / 6) % 5, flat % 6);
                        unsafe {
                            let v = bridge::get_3d(input.as_ptr(), x, y, z, input.dims_ptr());
                            bridge::set_3d(
                                output.as_mut_ptr(),
                                x,
                                y,
                                z,
                                dims.as_ptr(),
                                v + v,
                            );
                        }
                    });
                }
                assert_eq!(dst, src.scale(2 as $dtype));
            }
        }
    };
}

test_dtype!(i32, i32_test);
test_dtype!(f64, f64_test);
