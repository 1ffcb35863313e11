use rand::Rng;

use crate::{
    tensor::view::{TensorView, TensorViewMut},
    Context, DType, Error, Result, Shape,
};

/// Reserve room for the `shape.element_count()` elements of a new tensor.
///
/// Fails instead of aborting when the shape is too large to allocate.
fn reserve_for<T>(shape: &Shape) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(shape.element_count())
        .with_context(|| format!("cannot allocate a tensor of dimensions {shape}"))?;
    Ok(data)
}

/// A dense tensor with row-major storage.
///
/// The buffer length always equals the product of the dimensions, except for the
/// [empty](Tensor::empty) tensor, which holds no elements and no dimensions and
/// cannot be indexed. Operations that can fail on caller input return `Result`s.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T: DType> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: DType> Default for Tensor<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: DType> Tensor<T> {
    /// Create a tensor from row-major `data` laid out over `dims`.
    pub fn new(data: Vec<T>, dims: impl Into<Shape>) -> Result<Self> {
        let shape = dims.into();
        let expected = shape.element_count();
        if data.len() != expected {
            tracing::trace!(elements = data.len(), %shape, "rejected tensor construction");
            return Err(Error::DimensionMismatch {
                elements: data.len(),
                expected,
                dims: shape.into_dims(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Assemble a tensor whose buffer is already known to match `shape`.
    pub(crate) fn from_parts(data: Vec<T>, shape: Shape) -> Self {
        debug_assert!(
            data.len() == shape.element_count() || (data.is_empty() && shape.rank() == 0)
        );
        Self { data, shape }
    }

    /// A tensor with no elements and no dimensions.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            shape: Shape::default(),
        }
    }

    /// Create a tensor filled with some value.
    ///
    /// Fails if the buffer for `dims` cannot be allocated.
    pub fn full(dims: impl Into<Shape>, v: T) -> Result<Self> {
        let shape = dims.into();
        let mut data = reserve_for(&shape)?;
        data.resize(shape.element_count(), v);
        Ok(Self { data, shape })
    }

    pub fn zeros(dims: impl Into<Shape>) -> Result<Self> {
        Self::full(dims, T::ZERO)
    }

    pub fn ones(dims: impl Into<Shape>) -> Result<Self> {
        Self::full(dims, T::ONE)
    }

    /// A vector of `len` elements `start, start + step, ...`.
    pub fn arange(start: T, step: T, len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        let mut x = start;
        for _ in 0..len {
            data.push(x);
            x = x.elem_add(step);
        }
        Self {
            data,
            shape: Shape::new(vec![len]),
        }
    }

    /// Create a tensor with each element sampled uniformly from `[lo, hi)`.
    pub fn rand_uniform<R: Rng + ?Sized>(
        dims: impl Into<Shape>,
        lo: T,
        hi: T,
        rng: &mut R,
    ) -> Result<Self> {
        let shape = dims.into();
        let n = shape.element_count();
        let mut data = reserve_for(&shape)?;
        T::fill_uniform(rng, &mut data, n, lo, hi)?;
        Ok(Self { data, shape })
    }

    /// Create a tensor with normally distributed elements. Only floating dtypes are supported.
    pub fn randn<R: Rng + ?Sized>(
        dims: impl Into<Shape>,
        mean: T,
        std: T,
        rng: &mut R,
    ) -> Result<Self> {
        let shape = dims.into();
        let n = shape.element_count();
        let mut data = reserve_for(&shape)?;
        T::fill_normal(rng, &mut data, n, mean, std)?;
        Ok(Self { data, shape })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major element buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.data, self.shape.into_dims())
    }

    /// Resolve `idx` to a buffer offset, validating rank and bounds.
    fn offset(&self, idx: &[usize]) -> Result<usize> {
        let offset = self.shape.offset_of(idx)?;
        if offset >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index: idx.to_vec(),
                dims: self.dims().to_vec(),
            });
        }
        Ok(offset)
    }

    /// Read the element at `idx`.
    pub fn access(&self, idx: &[usize]) -> Result<T> {
        let offset = self.offset(idx)?;
        Ok(self.data[offset])
    }

    /// Overwrite the element at `idx`. Nothing else changes.
    pub fn set_at(&mut self, idx: &[usize], value: T) -> Result<()> {
        let offset = self.offset(idx)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Borrow the buffers for the accessor bridge or an accelerator transfer.
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(&self.data, self.shape.dims())
    }

    /// Mutable counterpart of [`Tensor::view`].
    pub fn view_mut(&mut self) -> TensorViewMut<'_, T> {
        TensorViewMut::new(&mut self.data, self.shape.dims())
    }

    /// Cast this tensor to a different dtype `U`.
    ///
    /// Values go through `f64`, so float to integer casts truncate toward zero.
    pub fn cast<U: DType>(&self) -> Tensor<U> {
        Tensor {
            data: self.data.iter().map(|x| U::from_f64(x.to_f64())).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Whether `other` has the same dimensions and every element is within `tol`.
    ///
    /// Integral dtypes are compared exactly.
    pub fn all_close(&self, other: &Self, tol: f64) -> bool {
        if self.shape != other.shape {
            return false;
        }
        self.data.iter().zip(&other.data).all(|(a, b)| {
            if T::INTEGRAL {
                a == b
            } else {
                (a.to_f64() - b.to_f64()).abs() <= tol
            }
        })
    }

    fn expect_rank(&self, rank: usize) -> Result<()> {
        if self.rank() != rank {
            return Err(Error::RankMismatch {
                expected: rank,
                got: self.rank(),
            });
        }
        Ok(())
    }

    /// Get data for a vector.
    pub fn to_vec1(&self) -> Result<Vec<T>> {
        self.expect_rank(1)?;
        Ok(self.data.clone())
    }

    /// Get data for a matrix.
    pub fn to_vec2(&self) -> Result<Vec<Vec<T>>> {
        self.expect_rank(2)?;
        let cols = self.dims()[1];
        if cols == 0 {
            return Ok(vec![Vec::new(); self.dims()[0]]);
        }
        Ok(self.data.chunks(cols).map(<[T]>::to_vec).collect())
    }

    /// Get data for a 3 dimensional tensor.
    pub fn to_vec3(&self) -> Result<Vec<Vec<Vec<T>>>> {
        self.expect_rank(3)?;
        let (a, b, c) = (self.dims()[0], self.dims()[1], self.dims()[2]);
        let mut top_rows = Vec::with_capacity(a);
        for i in 0..a {
            let rows = (0..b)
                .map(|j| {
                    let start = crate::index::offset_3d(i, j, 0, [a, b, c]);
                    self.data[start..start + c].to_vec()
                })
                .collect();
            top_rows.push(rows);
        }
        Ok(top_rows)
    }
}
