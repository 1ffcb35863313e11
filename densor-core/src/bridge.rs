//! Raw-pointer accessors shared by host code and accelerator kernels.
//!
//! These functions take an element pointer and a dimension pointer instead of a
//! [`Tensor`](crate::Tensor), because flat memory regions and plain integers are
//! all that crosses into accelerator address space. Each one resolves its offset
//! through [`crate::index`], holds no state, never allocates and never
//! synchronizes, so one body serves a single sequential caller as well as many
//! parallel execution units.
//!
//! # Safety
//!
//! Every function here shares the same contract:
//! - `data` is valid for reads (and writes, for setters) at the resolved offset;
//! - `dims` is valid for reads of as many `usize`s as the rank;
//! - the coordinate is in bounds for those dimensions;
//! - concurrent callers never write the same element, or read one being written.
//!
//! A shared [`TensorViewMut`](crate::TensorViewMut) only hands out raw pointers;
//! its safe slice accessors need exclusive access, so they cannot race these writes.
//!
//! Obtain the pointers from a [`TensorView`](crate::TensorView) or
//! [`TensorViewMut`](crate::TensorViewMut), or from a copy of their buffers.

use core::slice;

use crate::index::{offset_1d, offset_2d, offset_3d};

#[inline(always)]
unsafe fn dims_array<const N: usize>(dims: *const usize) -> [usize; N] {
    let mut out = [0; N];
    // SAFETY: the caller guarantees `dims` is readable for `N` elements.
    out.copy_from_slice(unsafe { slice::from_raw_parts(dims, N) });
    out
}

/// Read element `index` of a rank 1 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn get_1d<T: Copy>(data: *const T, index: usize) -> T {
    unsafe { *data.add(offset_1d(index)) }
}

/// Write element `index` of a rank 1 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn set_1d<T: Copy>(data: *mut T, index: usize, value: T) {
    unsafe { *data.add(offset_1d(index)) = value }
}

/// Read element `(row, col)` of a rank 2 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn get_2d<T: Copy>(data: *const T, row: usize, col: usize, dims: *const usize) -> T {
    unsafe { *data.add(offset_2d(row, col, dims_array(dims))) }
}

/// Write element `(row, col)` of a rank 2 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn set_2d<T: Copy>(data: *mut T, row: usize, col: usize, dims: *const usize, value: T) {
    unsafe { *data.add(offset_2d(row, col, dims_array(dims))) = value }
}

/// Read element `(x, y, z)` of a rank 3 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn get_3d<T: Copy>(
    data: *const T,
    x: usize,
    y: usize,
    z: usize,
    dims: *const usize,
) -> T {
    unsafe { *data.add(offset_3d(x, y, z, dims_array(dims))) }
}

/// Write element `(x, y, z)` of a rank 3 buffer.
///
/// # Safety
/// See the [module docs](self).
#[inline(always)]
pub unsafe fn set_3d<T: Copy>(
    data: *mut T,
    x: usize,
    y: usize,
    z: usize,
    dims: *const usize,
    value: T,
) {
    unsafe { *data.add(offset_3d(x, y, z, dims_array(dims))) = value }
}
