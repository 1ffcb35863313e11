//! Runs a "kernel" the way an accelerator would: one worker per output coordinate,
//! each addressing raw buffers through the bridge functions.

use densor_core::{bridge, Tensor, TensorView, TensorViewMut};
use rayon::prelude::*;

/// `out[x][y][z] = a[x][y][z] * b[y][z]`, with `b` broadcast by hand over `x`.
fn kernel(a: TensorView<'_, f64>, b: TensorView<'_, f64>, out: &TensorViewMut<'_, f64>, flat: usize) {
    let dims = out.dims();
    let (x, y, z) = (flat / (dims[1] * dims[2]), (flat / dims[2]) % dims[1], flat % dims[2]);
    unsafe {
        let lhs = bridge::get_3d(a.as_ptr(), x, y, z, a.dims_ptr());
        let rhs = bridge::get_2d(b.as_ptr(), y, z, b.dims_ptr());
        bridge::set_3d(out.as_mut_ptr(), x, y, z, out.dims_ptr(), lhs * rhs);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let a = Tensor::<f64>::full([4, 3, 2], 2.0).unwrap();
    let b = Tensor::<f64>::new(vec![1., 2., 3., 4., 5., 6.], [3, 2]).unwrap();
    let mut out = Tensor::<f64>::zeros([4, 3, 2]).unwrap();

    {
        let (av, bv) = (a.view(), b.view());
        let ov = out.view_mut();
        (0..ov.len())
            .into_par_iter()
            .for_each(|flat| kernel(av, bv, &ov, flat));
    }

    for x in 0..4 {
        assert_eq!(
            out.access(&[x, 2, 1]).unwrap(),
            12.0,
            "row {x} was not written"
        );
    }
    dbg!(out.to_vec3().unwrap());
}
