//! Core type definitions shared across the crate.
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - The ephemeral [`MultiIndex`] used during index-space traversal

use smallvec::SmallVec;

/// Type alias for a tensor axis position.
///
/// Zero-indexed (0 is the first axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of axes).
///
/// 0 is a scalar, 1 a vector, 2 a matrix.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 axes; falls back to heap allocation
/// for higher ranks.
///
/// # Examples
///
/// ```
/// use linrs::{Shape, Tensor};
///
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]);
/// let shape: Shape = tensor.shape_list();
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;

/// A full coordinate tuple, one component per axis, identifying a single
/// scalar element.
///
/// Only used transiently during traversal (permutation, cofactor
/// expansion); never stored on a tensor.
pub type MultiIndex = SmallVec<[usize; 6]>;
