//! Elementwise operator algebra.
//!
//! Every operator returns a new [`Tensor`] with the left operand's dimensions and
//! leaves its operands untouched. Binary operators require identical dimensions;
//! there is no broadcasting. The Hadamard product is only available as
//! [`Tensor::elementwise_mul`], `*` is reserved for scalar scaling.

use std::{
    fmt::Display,
    ops::{Add, Mul, Sub},
};

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::{config, DType, Error, Result, Tensor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOpType {
    Add,
    Sub,
    Mul,
}

impl BinaryOpType {
    pub fn as_c_op(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "elementwise_mul",
        }
    }

    #[inline(always)]
    pub fn apply<T: DType>(&self, l: T, r: T) -> T {
        match self {
            Self::Add => l.elem_add(r),
            Self::Sub => l.elem_sub(r),
            Self::Mul => l.elem_mul(r),
        }
    }
}

impl Display for BinaryOpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_c_op())
    }
}

/// `out[i] = op(lhs[i], rhs[i])`, in parallel for large inputs.
fn binary_map<T: DType>(lhs: &[T], rhs: &[T], op: BinaryOpType) -> Vec<T> {
    debug_assert_eq!(lhs.len(), rhs.len());
    let parallel = config::global().should_parallelize(lhs.len());
    tracing::trace!(op = %op, len = lhs.len(), parallel, "binary op");
    if parallel {
        lhs.par_iter()
            .zip(rhs.par_iter())
            .map(|(&l, &r)| op.apply(l, r))
            .collect()
    } else {
        lhs.iter()
            .zip(rhs)
            .map(|(&l, &r)| op.apply(l, r))
            .collect()
    }
}

/// `out[i] = s * xs[i]`, in parallel for large inputs.
fn scale_map<T: DType>(s: T, xs: &[T]) -> Vec<T> {
    let parallel = config::global().should_parallelize(xs.len());
    tracing::trace!(op = "scale", len = xs.len(), parallel, "scalar op");
    if parallel {
        xs.par_iter().map(|&x| s.elem_mul(x)).collect()
    } else {
        xs.iter().map(|&x| s.elem_mul(x)).collect()
    }
}

impl<T: DType> Tensor<T> {
    fn binary_op(&self, rhs: &Self, op: BinaryOpType) -> Result<Self> {
        if self.dims() != rhs.dims() {
            tracing::trace!(op = op.name(), "rejected operands of different shapes");
            return Err(Error::ShapeMismatch {
                op: op.name(),
                lhs: self.dims().to_vec(),
                rhs: rhs.dims().to_vec(),
            });
        }
        let data = binary_map(self.data(), rhs.data(), op);
        Ok(Tensor::from_parts(data, self.shape().clone()))
    }

    /// Elementwise sum. Fails if the dimensions differ.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Add)
    }

    /// Elementwise difference `self - rhs`. Fails if the dimensions differ.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Sub)
    }

    /// Hadamard product. Fails if the dimensions differ.
    pub fn elementwise_mul(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Mul)
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Self {
        let data = scale_map(s, self.data());
        Tensor::from_parts(data, self.shape().clone())
    }
}

impl<T: DType> Add<&Tensor<T>> for &Tensor<T> {
    type Output = Result<Tensor<T>>;

    fn add(self, rhs: &Tensor<T>) -> Self::Output {
        Tensor::add(self, rhs)
    }
}

impl<T: DType> Sub<&Tensor<T>> for &Tensor<T> {
    type Output = Result<Tensor<T>>;

    fn sub(self, rhs: &Tensor<T>) -> Self::Output {
        Tensor::sub(self, rhs)
    }
}

macro_rules! scalar_mul {
    ($t:ident) => {
        impl Mul<&Tensor<$t>> for $t {
            type Output = Tensor<$t>;

            fn mul(self, rhs: &Tensor<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    };
}

scalar_mul!(u8);
scalar_mul!(u32);
scalar_mul!(i32);
scalar_mul!(i64);
scalar_mul!(f32);
scalar_mul!(f64);
#[cfg(feature = "half")]
scalar_mul!(f16);
#[cfg(feature = "bfloat")]
scalar_mul!(bf16);
