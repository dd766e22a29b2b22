//! The dense fixed-shape tensor container.
//!
//! [`Tensor`] owns a contiguous row-major buffer plus its [`Shape`]; the
//! invariant `data.len() == element_count(shape)` is established by every
//! constructor and preserved by every operation. Tensors are plain values:
//! copies are deep, operations never alias across instances, and no mutation
//! is visible across copies.
//!
//! Operations are organized in submodules:
//!
//! - [`indexing`](self): element and subtensor access
//! - [`elementwise`](self): map/zip combinators and the operator surface
//! - [`permute`](self): the two-axis permutation engine

mod elementwise;
mod indexing;
mod permute;

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::shape;
use crate::types::{Rank, Shape};

/// Dense N-dimensional tensor with an owned row-major buffer.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Memory Layout
///
/// Row-major (C-contiguous): the last axis varies fastest. A rank-0 tensor
/// holds exactly one element.
///
/// # Examples
///
/// ```
/// use linrs::Tensor;
///
/// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tensor<T> {
    /// Flat element storage, row-major
    pub(crate) data: Vec<T>,
    /// Per-axis extents
    pub(crate) shape: Shape,
}

impl<T> Tensor<T> {
    /// Get the rank (number of axes) of this tensor.
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3]);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get an owned copy of the shape.
    pub fn shape_list(&self) -> Shape {
        self.shape.clone()
    }

    /// Get the total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the tensor holds zero elements (some extent is 0).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Axis-local size: the extent of axis 0, **not** the total element
    /// count.
    ///
    /// Every level of the recursive shape reports only its own leading
    /// extent; a rank-0 scalar reports 1 (its one element). Use
    /// [`len`](Self::len) for the flattened total.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor.size(), 2);
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn size(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }

    /// Check if two tensors have the same shape.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape == other.shape
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T: Clone> Tensor<T> {
    /// Create a tensor from a flat vector with the given shape.
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ElementCountMismatch`] if the data length does
    /// not equal the product of the extents.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(Tensor::from_vec(vec![1.0], &[2, 3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected = shape::element_count(shape);
        if vec.len() != expected {
            return Err(LinalgError::ElementCountMismatch {
                shape: shape.to_vec(),
                expected,
                actual: vec.len(),
            });
        }
        Ok(Self {
            data: vec,
            shape: shape.iter().copied().collect(),
        })
    }

    /// Create a tensor with every element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: vec![value; shape::element_count(shape)],
            shape: shape.iter().copied().collect(),
        }
    }

    /// Nested construction: stack `extent` subtensors of identical shape
    /// along a new leading axis.
    ///
    /// The result has shape `[extent] ++ child_shape`. With `extent == 0`
    /// the child shape is unknowable and the result is the empty rank-1
    /// tensor of shape `[0]`.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::ArityMismatch`] if `parts.len() != extent`.
    /// - [`LinalgError::ShapeMismatch`] if the subtensors disagree on shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let row0 = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let row1 = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();
    /// let m = Tensor::from_subtensors(2, &[row0, row1]).unwrap();
    /// assert_eq!(m.shape(), &[2, 2]);
    /// assert_eq!(m[&[1, 0]], 3.0);
    ///
    /// let short = Tensor::from_vec(vec![9.0], &[1]).unwrap();
    /// assert!(Tensor::from_subtensors(2, &[short]).is_err());
    /// ```
    pub fn from_subtensors(extent: usize, parts: &[Tensor<T>]) -> Result<Self> {
        if parts.len() != extent {
            return Err(LinalgError::ArityMismatch {
                expected: extent,
                actual: parts.len(),
            });
        }
        let Some(first) = parts.first() else {
            return Ok(Self {
                data: Vec::new(),
                shape: Shape::from_slice(&[0]),
            });
        };
        for part in &parts[1..] {
            if !part.same_shape(first) {
                return Err(LinalgError::ShapeMismatch {
                    left: first.shape().to_vec(),
                    right: part.shape().to_vec(),
                });
            }
        }
        let mut out_shape = Shape::with_capacity(first.rank() + 1);
        out_shape.push(extent);
        out_shape.extend_from_slice(first.shape());

        let mut data = Vec::with_capacity(extent * first.len());
        for part in parts {
            data.extend_from_slice(&part.data);
        }
        Ok(Self {
            data,
            shape: out_shape,
        })
    }

    /// Convert the tensor to a flat vector in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the tensor and return its flat storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Fill the tensor with values produced by a function of the
    /// multi-index.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 3]);
    /// tensor.fill_with(|idx| (idx[0] + idx[1]) as f64);
    /// assert_eq!(tensor[&[0, 0]], 0.0);
    /// assert_eq!(tensor[&[1, 2]], 3.0);
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&[usize]) -> T,
    {
        let rank = self.rank();
        let mut indices = vec![0usize; rank];
        for i in 0..self.data.len() {
            let mut remaining = i;
            for d in (0..rank).rev() {
                indices[d] = remaining % self.shape[d];
                remaining /= self.shape[d];
            }
            self.data[i] = f(&indices);
        }
    }
}

impl<T: Float> Tensor<T> {
    /// Create a tensor of zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(tensor[&[0, 0, 0]], 0.0);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor of ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a rank-0 scalar tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let s = Tensor::scalar(2.5);
    /// assert_eq!(s.rank(), 0);
    /// assert_eq!(*s.element(&[]).unwrap(), 2.5);
    /// ```
    pub fn scalar(value: T) -> Self {
        Self::from_elem(&[], value)
    }
}
