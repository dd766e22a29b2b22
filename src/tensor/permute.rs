//! Two-axis permutation over the full index space.
//!
//! The engine enumerates every multi-index of the input in odometer order
//! (last axis fastest, carry leftward) and writes each element to the
//! position with axes `a` and `b` exchanged. One pass, one index buffer,
//! O(element count) time for any rank.

use smallvec::smallvec;

use crate::error::Result;
use crate::shape;
use crate::tensor::Tensor;
use crate::types::{Axis, MultiIndex};

/// Advance `indices` to the next multi-index of `shape` in row-major order.
///
/// The last coordinate moves fastest; reaching an extent resets that
/// coordinate to 0 and carries one axis to the left. Returns `false` once the
/// most significant coordinate overflows, i.e. after the final index.
pub(crate) fn increment(indices: &mut [usize], shape: &[usize]) -> bool {
    for axis in (0..shape.len()).rev() {
        indices[axis] += 1;
        if indices[axis] < shape[axis] {
            return true;
        }
        indices[axis] = 0;
    }
    false
}

fn row_major_offset(shape: &[usize], indices: &[usize]) -> usize {
    indices
        .iter()
        .zip(shape.iter())
        .fold(0, |acc, (&index, &extent)| acc * extent + index)
}

impl<T: Clone> Tensor<T> {
    /// Exchange axes `a` and `b`, producing a new tensor.
    ///
    /// The result has the two extents swapped, and
    /// `result[..., i_b, ..., i_a, ...] == self[..., i_a, ..., i_b, ...]`
    /// for every multi-index. Applying the same permutation twice returns
    /// the original tensor. For a rank-2 tensor, `permute(0, 1)` is the
    /// transpose.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::AxisOutOfBounds`](crate::LinalgError::AxisOutOfBounds)
    ///   if either axis is `>= rank` (any axis on a rank-0 tensor).
    /// - [`LinalgError::EqualAxes`](crate::LinalgError::EqualAxes) if
    ///   `a == b`.
    ///
    /// # Complexity
    ///
    /// O(element count) time, one output allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let mut t = Tensor::<f64>::zeros(&[2, 3]);
    /// t.fill_with(|idx| (idx[0] * 3 + idx[1]) as f64);
    /// let p = t.permute(0, 1).unwrap();
    /// assert_eq!(p.shape(), &[3, 2]);
    /// assert_eq!(p[&[2, 1]], t[&[1, 2]]);
    /// ```
    pub fn permute(&self, a: Axis, b: Axis) -> Result<Self> {
        let out_shape = shape::swapped(&self.shape, a, b)?;
        let mut out = Tensor {
            data: self.data.clone(),
            shape: out_shape,
        };
        if self.is_empty() {
            return Ok(out);
        }

        let mut index: MultiIndex = smallvec![0; self.rank()];
        let mut flat = 0usize;
        loop {
            let mut target = index.clone();
            target.swap(a, b);
            out.data[row_major_offset(&out.shape, &target)] = self.data[flat].clone();
            flat += 1;
            if !increment(&mut index, &self.shape) {
                break;
            }
        }
        Ok(out)
    }
}
