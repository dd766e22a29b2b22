//! Pure operations on shape lists.
//!
//! A shape is an ordered list of non-negative axis extents. Every function
//! here is pure: inputs are borrowed slices, outputs are fresh [`Shape`]
//! values, so derived tensor shapes never alias their source. The
//! permutation engine and the tensor constructors are the main consumers.

use crate::error::{LinalgError, Result};
use crate::types::{Axis, Shape};

/// Get the extent at `position`.
///
/// # Errors
///
/// Returns [`LinalgError::AxisOutOfBounds`] if `position` is outside
/// `[0, rank)`.
///
/// # Examples
///
/// ```
/// use linrs::shape;
///
/// assert_eq!(shape::extent(&[2, 3, 4], 1).unwrap(), 3);
/// assert!(shape::extent(&[2, 3, 4], 3).is_err());
/// ```
pub fn extent(shape: &[usize], position: Axis) -> Result<usize> {
    shape
        .get(position)
        .copied()
        .ok_or(LinalgError::AxisOutOfBounds {
            axis: position,
            rank: shape.len(),
        })
}

/// Return a new shape identical to `shape` except at `position`.
///
/// # Errors
///
/// Returns [`LinalgError::AxisOutOfBounds`] if `position` is outside
/// `[0, rank)`.
///
/// # Examples
///
/// ```
/// use linrs::shape;
///
/// let updated = shape::with_extent(&[2, 3], 0, 5).unwrap();
/// assert_eq!(&updated[..], &[5, 3]);
/// ```
pub fn with_extent(shape: &[usize], position: Axis, value: usize) -> Result<Shape> {
    if position >= shape.len() {
        return Err(LinalgError::AxisOutOfBounds {
            axis: position,
            rank: shape.len(),
        });
    }
    let mut out: Shape = shape.iter().copied().collect();
    out[position] = value;
    Ok(out)
}

/// Return a new shape with the extents at positions `a` and `b` exchanged.
///
/// This is the shape half of a two-axis permutation, so equal axes are
/// rejected rather than silently returning the input unchanged.
///
/// # Errors
///
/// - [`LinalgError::AxisOutOfBounds`] if either position is outside
///   `[0, rank)`.
/// - [`LinalgError::EqualAxes`] if `a == b`.
///
/// # Examples
///
/// ```
/// use linrs::shape;
///
/// let swapped = shape::swapped(&[2, 3, 4], 1, 2).unwrap();
/// assert_eq!(&swapped[..], &[2, 4, 3]);
/// assert!(shape::swapped(&[2, 3, 4], 1, 1).is_err());
/// ```
pub fn swapped(shape: &[usize], a: Axis, b: Axis) -> Result<Shape> {
    let rank = shape.len();
    for axis in [a, b] {
        if axis >= rank {
            return Err(LinalgError::AxisOutOfBounds { axis, rank });
        }
    }
    if a == b {
        return Err(LinalgError::EqualAxes { axis: a });
    }
    let mut out: Shape = shape.iter().copied().collect();
    out.swap(a, b);
    Ok(out)
}

/// Return a new shape omitting the final extent.
///
/// # Errors
///
/// Returns [`LinalgError::EmptyShape`] when `shape` has rank 0.
///
/// # Examples
///
/// ```
/// use linrs::shape;
///
/// let dropped = shape::drop_last(&[2, 3, 4]).unwrap();
/// assert_eq!(&dropped[..], &[2, 3]);
/// assert!(shape::drop_last(&[]).is_err());
/// ```
pub fn drop_last(shape: &[usize]) -> Result<Shape> {
    if shape.is_empty() {
        return Err(LinalgError::EmptyShape);
    }
    Ok(shape[..shape.len() - 1].iter().copied().collect())
}

/// Total number of elements a shape holds: the product of its extents.
///
/// A rank-0 shape holds exactly one element (the empty product).
///
/// # Examples
///
/// ```
/// use linrs::shape;
///
/// assert_eq!(shape::element_count(&[2, 3, 4]), 24);
/// assert_eq!(shape::element_count(&[]), 1);
/// assert_eq!(shape::element_count(&[2, 0, 4]), 0);
/// ```
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}
