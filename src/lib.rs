//! # linrs
//!
//! Fixed-shape tensor, vector, and matrix arithmetic with a generalized
//! two-axis permutation engine.
//!
//! The central type is [`Tensor`], a dense N-dimensional container with
//! value semantics: copies are deep, arithmetic never aliases, and every
//! shape obligation is checked at construction or call time. On top of it
//! sit the rank-1 [`Vector`] (dot, length, normalize, lerp, cross) and the
//! rank-2 [`Matrix`] (transpose, cofactor determinant, adjugate, inverse,
//! products).
//!
//! ## Quick Start
//!
//! ```
//! use linrs::{Matrix, Tensor};
//!
//! // A 2x3x2 tensor filled from its multi-index.
//! let mut t = Tensor::<f64>::zeros(&[2, 3, 2]);
//! t.fill_with(|idx| (idx[0] * 6 + idx[1] * 2 + idx[2]) as f64);
//!
//! // Exchange the last two axes; every element lands at its swapped index.
//! let p = t.permute(1, 2).unwrap();
//! assert_eq!(p.shape(), &[2, 2, 3]);
//! assert_eq!(p[&[0, 1, 2]], t[&[0, 2, 1]]);
//!
//! // Rank-2 algebra.
//! let m = Matrix::from_vec(2, 2, vec![4.0f64, 7.0, 2.0, 6.0]).unwrap();
//! let inv = m.inverse().unwrap();
//! let eye = m.matmul(&inv).unwrap();
//! assert!((eye.get(0, 0) - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return the crate-level [`Result`] with a
//! [`LinalgError`] describing exactly which obligation failed. The operator
//! sugar (`+`, `[..]`, `*`) panics with the same diagnostics; every
//! operator has a checked named counterpart.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Tensor`], [`Vector`], and
//!   [`Matrix`].

#![warn(missing_docs)]

pub mod error;
pub mod matrix;
pub mod shape;
pub mod tensor;
pub mod types;
pub mod vector;


pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use tensor::Tensor;
pub use types::{Axis, MultiIndex, Rank, Shape};
pub use vector::Vector;
