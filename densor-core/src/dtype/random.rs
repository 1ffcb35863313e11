use rand::{distr::Uniform, Rng};
use rand_distr::{Distribution, Normal};

// Optional half-precision types
#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

use crate::{bail, Context, Result};

/// Dispatch random fills based on the data type.
pub trait RandDispatch {
    /// Append `n` uniform samples from `[lo, hi)` to `out`.
    fn fill_uniform<R: Rng + ?Sized>(
        rng: &mut R,
        out: &mut Vec<Self>,
        n: usize,
        lo: Self,
        hi: Self,
    ) -> Result<()>
    where
        Self: Sized;

    /// Append `n` normal (Gaussian) samples to `out`.
    fn fill_normal<R: Rng + ?Sized>(
        rng: &mut R,
        out: &mut Vec<Self>,
        n: usize,
        mean: Self,
        std: Self,
    ) -> Result<()>
    where
        Self: Sized;
}

// Integral types: uniform only
macro_rules! rand_integral {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                out: &mut Vec<Self>,
                n: usize,
                lo: Self,
                hi: Self,
            ) -> Result<()> {
                let dist = Uniform::new(lo, hi)
                    .with_context(|| format!("uniform range {lo}..{hi} for {}", stringify!($t)))?;
                out.extend(dist.sample_iter(rng).take(n));
                Ok(())
            }

            fn fill_normal<R: Rng + ?Sized>(
                _rng: &mut R,
                _out: &mut Vec<Self>,
                _n: usize,
                _mean: Self,
                _std: Self,
            ) -> Result<()> {
                bail!(
                    "Normal random fill is not supported for dtype {}",
                    stringify!($t)
                )
            }
        }
    };
}

macro_rules! rand_float {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                out: &mut Vec<Self>,
                n: usize,
                lo: Self,
                hi: Self,
            ) -> Result<()> {
                let dist = Uniform::new(lo, hi)
                    .with_context(|| format!("uniform range {lo}..{hi} for {}", stringify!($t)))?;
                out.extend(dist.sample_iter(rng).take(n));
                Ok(())
            }

            fn fill_normal<R: Rng + ?Sized>(
                rng: &mut R,
                out: &mut Vec<Self>,
                n: usize,
                mean: Self,
                std: Self,
            ) -> Result<()> {
                if std.is_nan() || std < 0.0 {
                    bail!("standard deviation must be non-negative, got {std}");
                }
                let dist = Normal::new(mean, std)
                    .with_context(|| format!("normal distribution N({mean}, {std})"))?;
                out.extend(dist.sample_iter(rng).take(n));
                Ok(())
            }
        }
    };
}

rand_integral!(u8);
rand_integral!(u32);
rand_integral!(i32);
rand_integral!(i64);
rand_float!(f32);
rand_float!(f64);

// Half-precision types sample in f32 and round.
macro_rules! rand_half {
    ($t:ident) => {
        impl RandDispatch for $t {
            fn fill_uniform<R: Rng + ?Sized>(
                rng: &mut R,
                out: &mut Vec<Self>,
                n: usize,
                lo: Self,
                hi: Self,
            ) -> Result<()> {
                let mut wide = Vec::with_capacity(n);
                f32::fill_uniform(rng, &mut wide, n, lo.to_f32(), hi.to_f32())?;
                out.extend(wide.into_iter().map($t::from_f32));
                Ok(())
            }

            fn fill_normal<R: Rng + ?Sized>(
                rng: &mut R,
                out: &mut Vec<Self>,
                n: usize,
                mean: Self,
                std: Self,
            ) -> Result<()> {
                let mut wide = Vec::with_capacity(n);
                f32::fill_normal(rng, &mut wide, n, mean.to_f32(), std.to_f32())?;
                out.extend(wide.into_iter().map($t::from_f32));
                Ok(())
            }
        }
    };
}

#[cfg(feature = "half")]
rand_half!(f16);
#[cfg(feature = "bfloat")]
rand_half!(bf16);
