use std::fmt::Debug;

#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

#[cfg(feature = "cuda")]
use cudarc::driver::DeviceRepr;

use random::RandDispatch;

mod random;

/// Elementwise arithmetic used by the operator algebra.
///
/// Integral types wrap on overflow so that no operator can panic on valid input.
pub trait DTypeOps: Copy + PartialEq + RandDispatch {
    fn elem_add(self, rhs: Self) -> Self;
    fn elem_sub(self, rhs: Self) -> Self;
    fn elem_mul(self, rhs: Self) -> Self;
}

macro_rules! integral_ops {
    ($t:ident) => {
        impl DTypeOps for $t {
            #[inline(always)]
            fn elem_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            #[inline(always)]
            fn elem_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            #[inline(always)]
            fn elem_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    };
}

macro_rules! float_ops {
    ($t:ident) => {
        impl DTypeOps for $t {
            #[inline(always)]
            fn elem_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline(always)]
            fn elem_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline(always)]
            fn elem_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    };
}

integral_ops!(u8);
integral_ops!(u32);
integral_ops!(i32);
integral_ops!(i64);
float_ops!(f32);
float_ops!(f64);
#[cfg(feature = "half")]
float_ops!(f16);
#[cfg(feature = "bfloat")]
float_ops!(bf16);

/// Element types that can be copied into accelerator memory as-is.
#[cfg(feature = "cuda")]
pub trait DeviceReprLike: DeviceRepr {}

#[cfg(not(feature = "cuda"))]
pub trait DeviceReprLike {}

impl DeviceReprLike for u8 {}
impl DeviceReprLike for i32 {}
impl DeviceReprLike for u32 {}
impl DeviceReprLike for i64 {}
impl DeviceReprLike for f32 {}
impl DeviceReprLike for f64 {}

/// Marker trait for tensor datatypes.
pub trait DType: Debug + Clone + DTypeOps + Send + Sync + DeviceReprLike + 'static {
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;
    const INTEGRAL: bool;

    fn to_f64(&self) -> f64;
    fn from_f64(x: f64) -> Self;
}

macro_rules! dtype {
    ($rt:ident, $zero:expr, $one:expr, $integral:expr) => {
        impl DType for $rt {
            const ZERO: $rt = $zero;
            const ONE: $rt = $one;
            const NAME: &'static str = stringify!($rt);
            const INTEGRAL: bool = $integral;

            fn to_f64(&self) -> f64 {
                *self as f64
            }
            fn from_f64(x: f64) -> Self {
                x as $rt
            }
        }
    };
}

dtype!(u8, 0u8, 1u8, true);
dtype!(u32, 0u32, 1u32, true);
dtype!(i32, 0i32, 1i32, true);
dtype!(i64, 0i64, 1i64, true);
dtype!(f32, 0f32, 1f32, false);
dtype!(f64, 0f64, 1f64, false);

#[cfg(feature = "half")]
impl DeviceReprLike for f16 {}
#[cfg(feature = "half")]
impl DType for f16 {
    const ZERO: f16 = f16::from_f64_const(0.0);
    const ONE: f16 = f16::from_f64_const(1.0);
    const NAME: &'static str = "f16";
    const INTEGRAL: bool = false;

    fn to_f64(&self) -> f64 {
        self.to_f64_const()
    }
    fn from_f64(x: f64) -> Self {
        Self::from_f64_const(x)
    }
}

#[cfg(feature = "bfloat")]
impl DeviceReprLike for bf16 {}
#[cfg(feature = "bfloat")]
impl DType for bf16 {
    const ZERO: bf16 = bf16::from_f64_const(0.0);
    const ONE: bf16 = bf16::from_f64_const(1.0);
    const NAME: &'static str = "bf16";
    const INTEGRAL: bool = false;

    fn to_f64(&self) -> f64 {
        self.to_f64_const()
    }
    fn from_f64(x: f64) -> Self {
        Self::from_f64_const(x)
    }
}
