use std::fmt;

use crate::{
    index::{checked_flat_offset, contiguous_strides},
    Result,
};

/// The ordered axis sizes of a tensor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of elements a buffer of this shape holds. A rank 0 shape holds one.
    ///
    /// Saturates instead of overflowing, so an absurd shape never matches a real buffer.
    pub fn element_count(&self) -> usize {
        self.0.iter().fold(1usize, |acc, d| acc.saturating_mul(*d))
    }

    pub fn strides(&self) -> Vec<usize> {
        contiguous_strides(&self.0)
    }

    /// Checked row-major offset of `idx`.
    pub fn offset_of(&self, idx: &[usize]) -> Result<usize> {
        checked_flat_offset(idx, &self.0)
    }

    pub fn into_dims(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}
