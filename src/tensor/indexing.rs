//! Element and subtensor access.
//!
//! A full multi-index (one component per axis) addresses a single scalar;
//! an axis-0 position addresses a rank `r-1` subtensor. Checked access goes
//! through [`Tensor::element`] / [`Tensor::get`]; the `Index` operators
//! panic on violation with the same diagnostics.

use std::ops::{Index, IndexMut};

use crate::error::{LinalgError, Result};
use crate::tensor::Tensor;

impl<T> Tensor<T> {
    /// Row-major flat offset of a full multi-index, with per-axis bounds
    /// checks.
    fn offset(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.rank() {
            return Err(LinalgError::RankMismatch {
                expected: self.rank(),
                actual: indices.len(),
            });
        }
        let mut acc = 0usize;
        for (axis, (&index, &extent)) in indices.iter().zip(self.shape.iter()).enumerate() {
            if index >= extent {
                return Err(LinalgError::IndexOutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
            acc = acc * extent + index;
        }
        Ok(acc)
    }

    /// Get a reference to the element at the given multi-index.
    ///
    /// A rank-0 tensor is addressed by the empty multi-index `&[]`.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::RankMismatch`] if `indices.len() != rank`.
    /// - [`LinalgError::IndexOutOfBounds`] if any component is outside its
    ///   axis extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(*t.element(&[1, 0]).unwrap(), 3.0);
    /// assert!(t.element(&[2, 0]).is_err());
    /// assert!(t.element(&[0]).is_err());
    /// ```
    pub fn element(&self, indices: &[usize]) -> Result<&T> {
        let offset = self.offset(indices)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the element at the given multi-index.
    ///
    /// # Errors
    ///
    /// Same conditions as [`element`](Self::element).
    pub fn element_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = self.offset(indices)?;
        Ok(&mut self.data[offset])
    }

    /// Get a reference to the element at the given multi-index, or `None`.
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        self.element(indices).ok()
    }

    /// Get a mutable reference to the element at the given multi-index, or
    /// `None`.
    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut T> {
        self.element_mut(indices).ok()
    }
}

impl<T: Clone> Tensor<T> {
    /// Extract the rank `r-1` subtensor at position `index` along axis 0.
    ///
    /// The subtensor is an independent copy; mutating it never affects the
    /// parent.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::EmptyShape`] on a rank-0 tensor.
    /// - [`LinalgError::IndexOutOfBounds`] if `index >= shape[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let row = t.subtensor(1).unwrap();
    /// assert_eq!(row.shape(), &[3]);
    /// assert_eq!(row.to_vec(), vec![4.0, 5.0, 6.0]);
    /// ```
    pub fn subtensor(&self, index: usize) -> Result<Tensor<T>> {
        let Some(&extent) = self.shape.first() else {
            return Err(LinalgError::EmptyShape);
        };
        if index >= extent {
            return Err(LinalgError::IndexOutOfBounds {
                axis: 0,
                index,
                extent,
            });
        }
        let stride = self.data.len() / extent;
        Ok(Tensor {
            data: self.data[index * stride..(index + 1) * stride].to_vec(),
            shape: self.shape[1..].iter().copied().collect(),
        })
    }
}

impl<T> Index<&[usize]> for Tensor<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the multi-index has the wrong rank or any component is out
    /// of bounds. Use [`Tensor::element`] for checked access.
    fn index(&self, indices: &[usize]) -> &T {
        match self.element(indices) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, indices: &[usize]) -> &mut T {
        match self.element_mut(indices) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> Index<&[usize; N]> for Tensor<T> {
    type Output = T;

    fn index(&self, indices: &[usize; N]) -> &T {
        self.index(indices.as_slice())
    }
}

impl<T, const N: usize> IndexMut<&[usize; N]> for Tensor<T> {
    fn index_mut(&mut self, indices: &[usize; N]) -> &mut T {
        self.index_mut(indices.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(shape: &[usize]) -> Tensor<f64> {
        let mut t = Tensor::zeros(shape);
        let mut next = 0.0;
        for x in t.iter_mut() {
            *x = next;
            next += 1.0;
        }
        t
    }

    #[test]
    fn element_row_major() {
        let t = sequential(&[2, 3, 2]);
        assert_eq!(*t.element(&[0, 0, 0]).unwrap(), 0.0);
        assert_eq!(*t.element(&[0, 0, 1]).unwrap(), 1.0);
        assert_eq!(*t.element(&[0, 1, 0]).unwrap(), 2.0);
        assert_eq!(*t.element(&[1, 0, 0]).unwrap(), 6.0);
        assert_eq!(*t.element(&[1, 2, 1]).unwrap(), 11.0);
    }

    #[test]
    fn element_rejects_wrong_rank() {
        let t = sequential(&[2, 3]);
        assert_eq!(
            t.element(&[1]).unwrap_err(),
            LinalgError::RankMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(
            t.element(&[0, 0, 0]).unwrap_err(),
            LinalgError::RankMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn element_reports_offending_axis() {
        let t = sequential(&[2, 3]);
        assert_eq!(
            t.element(&[0, 3]).unwrap_err(),
            LinalgError::IndexOutOfBounds {
                axis: 1,
                index: 3,
                extent: 3
            }
        );
    }

    #[test]
    fn element_mut_writes_through() {
        let mut t = sequential(&[2, 2]);
        *t.element_mut(&[1, 1]).unwrap() = 42.0;
        assert_eq!(*t.element(&[1, 1]).unwrap(), 42.0);
    }

    #[test]
    fn rank0_empty_index() {
        let s = Tensor::scalar(7.0f64);
        assert_eq!(*s.element(&[]).unwrap(), 7.0);
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let t = sequential(&[2, 2]);
        assert_eq!(t.get(&[0, 1]), Some(&1.0));
        assert_eq!(t.get(&[0, 2]), None);
    }

    #[test]
    fn index_operator_array_and_slice() {
        let t = sequential(&[2, 3]);
        assert_eq!(t[&[1, 2]], 5.0);
        let idx = vec![1usize, 2];
        assert_eq!(t[idx.as_slice()], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_operator_panics_out_of_bounds() {
        let t = sequential(&[2, 3]);
        let _ = t[&[2, 0]];
    }

    #[test]
    fn subtensor_copies_slice() {
        let t = sequential(&[2, 3, 2]);
        let sub = t.subtensor(1).unwrap();
        assert_eq!(sub.shape(), &[3, 2]);
        assert_eq!(sub.to_vec(), vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn subtensor_is_independent() {
        let t = sequential(&[2, 2]);
        let mut sub = t.subtensor(0).unwrap();
        *sub.element_mut(&[0]).unwrap() = 99.0;
        assert_eq!(*t.element(&[0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn subtensor_bounds_and_rank0() {
        let t = sequential(&[2, 2]);
        assert_eq!(
            t.subtensor(2).unwrap_err(),
            LinalgError::IndexOutOfBounds {
                axis: 0,
                index: 2,
                extent: 2
            }
        );
        let s = Tensor::scalar(1.0f64);
        assert_eq!(s.subtensor(0).unwrap_err(), LinalgError::EmptyShape);
    }

    #[test]
    fn subtensor_of_rank1_is_scalar() {
        let t = sequential(&[3]);
        let s = t.subtensor(2).unwrap();
        assert_eq!(s.rank(), 0);
        assert_eq!(*s.element(&[]).unwrap(), 2.0);
    }
}
