//! Row-major flat index arithmetic.
//!
//! Every offset computed by this crate goes through [`flat_offset`]: the stride of
//! axis `i` is the product of all trailing dimensions `dims[i+1..]`, and the offset
//! is the dot product of the coordinate with those strides. The rank-specific
//! helpers are thin specializations of the same function, so they cannot disagree
//! with the general path.
//!
//! Nothing here allocates except [`contiguous_strides`], which keeps the unchecked
//! functions usable from accelerator-style callers.

use crate::{Error, Result};

/// Linear offset of `idx` in a row-major buffer with dimensions `dims`.
///
/// No bounds checking is performed. `idx` and `dims` must have the same length.
#[inline(always)]
pub fn flat_offset(idx: &[usize], dims: &[usize]) -> usize {
    debug_assert_eq!(idx.len(), dims.len());
    let mut offset = 0;
    let mut stride = 1;
    for axis in (0..idx.len()).rev() {
        offset += idx[axis] * stride;
        if axis > 0 {
            stride *= dims[axis];
        }
    }
    offset
}

/// Like [`flat_offset`], but validates the coordinate rank and every axis bound.
pub fn checked_flat_offset(idx: &[usize], dims: &[usize]) -> Result<usize> {
    if idx.len() != dims.len() {
        return Err(Error::RankMismatch {
            expected: dims.len(),
            got: idx.len(),
        });
    }
    let out_of_bounds = || Error::IndexOutOfBounds {
        index: idx.to_vec(),
        dims: dims.to_vec(),
    };
    if idx.iter().zip(dims).any(|(i, d)| i >= d) {
        return Err(out_of_bounds());
    }
    // Same walk as `flat_offset`. A stride past `usize::MAX` only matters for a
    // nonzero coordinate, and then the offset cannot be represented.
    let mut offset = 0usize;
    let mut stride = Some(1usize);
    for axis in (0..idx.len()).rev() {
        if idx[axis] != 0 {
            offset = stride
                .and_then(|s| s.checked_mul(idx[axis]))
                .and_then(|term| offset.checked_add(term))
                .ok_or_else(out_of_bounds)?;
        }
        if axis > 0 {
            stride = stride.and_then(|s| s.checked_mul(dims[axis]));
        }
    }
    Ok(offset)
}

/// Compute default (contiguous) strides for a tensor of given shape.
///
/// Strides saturate at `usize::MAX`, like [`Shape::element_count`](crate::Shape::element_count).
pub fn contiguous_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(dims.len());
    let mut acc = 1usize;
    // Iterate dims in reverse to accumulate products
    for dim in dims.iter().rev() {
        strides.push(acc);
        acc = acc.saturating_mul(*dim);
    }
    strides.reverse();
    strides
}

/// Rank 1: `offset = index`.
#[inline(always)]
pub fn offset_1d(index: usize) -> usize {
    // The leading extent never contributes to the offset.
    flat_offset(&[index], &[0])
}

/// Rank 2: `offset = row * dims[1] + col`.
#[inline(always)]
pub fn offset_2d(row: usize, col: usize, dims: [usize; 2]) -> usize {
    flat_offset(&[row, col], &dims)
}

/// Rank 3: `offset = x * dims[1] * dims[2] + y * dims[2] + z`.
#[inline(always)]
pub fn offset_3d(x: usize, y: usize, z: usize, dims: [usize; 3]) -> usize {
    flat_offset(&[x, y, z], &dims)
}
