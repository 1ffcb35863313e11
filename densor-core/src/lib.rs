//! Densor is a dense, row-major tensor container whose addressing logic is shared
//! between ordinary host code and accelerator kernels working on raw memory.
//!
//! A [`Tensor`] owns a contiguous element buffer and a dimension vector, and is generic
//! over its element type (see [`DType`]; `i32` and `f64` are the usual choices).
//! Every offset is computed by the single row-major formula in [`index`], and the
//! rank 1 to 3 raw-pointer accessors in [`bridge`] are specializations of it, so
//! host-side [`Tensor::access`] and device-side [`bridge::get_3d`] always agree.
//!
//! ## A quick guide
//! - Build a tensor with [`Tensor::new`], or one of the fill constructors such as [`Tensor::full`].
//! - Read and write single elements with [`Tensor::access`] and [`Tensor::set_at`]. Both validate
//!   the coordinate and return an [`Error`] instead of touching memory out of bounds.
//! - Combine equally shaped tensors with [`Tensor::add`], [`Tensor::sub`],
//!   [`Tensor::elementwise_mul`] and [`Tensor::scale`].
//! - Hand the raw buffers to an accelerator runtime through [`Tensor::view`] or
//!   [`Tensor::view_mut`], and address them with the [`bridge`] functions.
//!
//! ## What can you do with it?
//! ```
//! use densor_core::{bridge, Tensor};
//!
//! let mut t = Tensor::<i32>::new(vec![1, 2, 3, 4], [2, 2]).unwrap();
//! assert_eq!(t.access(&[1, 0]).unwrap(), 3);
//!
//! t.set_at(&[0, 1], 9).unwrap();
//! let doubled = t.scale(2);
//! let sum = t.add(&doubled).unwrap();
//! assert_eq!(sum.to_vec2().unwrap(), vec![vec![3, 27], vec![9, 12]]);
//!
//! let view = sum.view();
//! let corner = unsafe { bridge::get_2d(view.as_ptr(), 1, 1, view.dims_ptr()) };
//! assert_eq!(corner, sum.access(&[1, 1]).unwrap());
//! ```

pub mod bridge;
pub mod config;
mod dtype;
mod error;
pub mod index;
mod ops;
mod shape;
mod tensor;

pub use config::Config;
pub use dtype::DType;
pub use error::{Context, Error, Result};
pub use ops::BinaryOpType;
pub use shape::Shape;
pub use tensor::{Tensor, TensorView, TensorViewMut};
