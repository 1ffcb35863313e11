//! Non-owning views over a tensor's buffers.
//!
//! A view is what crosses the host/accelerator boundary: an element address, a
//! dimension address and the counts needed to copy both. It borrows the owning
//! [`Tensor`](crate::Tensor), so the compiler rejects any use after the owner is
//! resized, rebuilt or dropped. The owner keeps the storage throughout.

use std::marker::PhantomData;

use crate::DType;

/// Read-only view, see the [module docs](self).
#[derive(Clone, Copy, Debug)]
pub struct TensorView<'a, T: DType> {
    data: &'a [T],
    dims: &'a [usize],
}

impl<'a, T: DType> TensorView<'a, T> {
    pub(crate) fn new(data: &'a [T], dims: &'a [usize]) -> Self {
        Self { data, dims }
    }

    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    pub fn dims_ptr(&self) -> *const usize {
        self.dims.as_ptr()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn dims(&self) -> &'a [usize] {
        self.dims
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }
}

/// Writable view, see the [module docs](self).
///
/// The view can be shared between threads so that many bridge callers write through
/// [`as_mut_ptr`](Self::as_mut_ptr) at once. Those writes are `unsafe`: callers must
/// never touch overlapping elements concurrently.
#[derive(Debug)]
pub struct TensorViewMut<'a, T: DType> {
    data: *mut T,
    len: usize,
    dims: &'a [usize],
    _ghost: PhantomData<&'a mut [T]>,
}

// SAFETY: the view is an exclusive borrow of the tensor. Safe element access needs
// `&mut self`; shared writes go through the raw pointer and carry the disjointness
// obligation.
unsafe impl<T: DType> Send for TensorViewMut<'_, T> {}
unsafe impl<T: DType> Sync for TensorViewMut<'_, T> {}

impl<'a, T: DType> TensorViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], dims: &'a [usize]) -> Self {
        Self {
            data: data.as_mut_ptr(),
            len: data.len(),
            dims,
            _ghost: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *const T {
        self.data
    }

    pub fn as_mut_ptr(&self) -> *mut T {
        self.data
    }

    pub fn dims_ptr(&self) -> *const usize {
        self.dims.as_ptr()
    }

    /// Takes `&mut self` so a safe read can never race a raw write made through a
    /// shared view.
    pub fn as_slice(&mut self) -> &[T] {
        // SAFETY: `data` and `len` come from a live `&'a mut [T]`, and `&mut self`
        // excludes the shared references raw writers hold.
        unsafe { std::slice::from_raw_parts(self.data, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above.
        unsafe { std::slice::from_raw_parts_mut(self.data, self.len) }
    }

    pub fn dims(&self) -> &'a [usize] {
        self.dims
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }
}
