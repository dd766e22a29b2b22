//! Error types for linrs operations.
//!
//! Every fallible operation in the crate returns [`LinalgError`] through the
//! crate-level [`Result`] alias. The variants form a closed taxonomy: index
//! violations, construction arity/shape violations, operations invoked on
//! shapes they are not defined for, and singular-matrix inversion.

use thiserror::Error;

/// Main error type for linrs operations.
///
/// # Examples
///
/// ```
/// use linrs::{LinalgError, Tensor};
///
/// let t = Tensor::<f32>::zeros(&[2, 3]);
/// let err = t.element(&[2, 0]).unwrap_err();
/// assert_eq!(
///     err,
///     LinalgError::IndexOutOfBounds { axis: 0, index: 2, extent: 2 }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// A multi-index component (or axis-0 position) is outside its extent.
    #[error("index {index} out of bounds for axis {axis} with extent {extent}")]
    IndexOutOfBounds {
        /// Axis on which the violation occurred
        axis: usize,
        /// Offending index value
        index: usize,
        /// Extent of that axis
        extent: usize,
    },

    /// An axis position is outside `[0, rank)`.
    #[error("axis {axis} out of bounds for rank {rank}")]
    AxisOutOfBounds {
        /// Offending axis position
        axis: usize,
        /// Rank of the shape
        rank: usize,
    },

    /// A multi-index has the wrong number of components for the tensor rank.
    #[error("multi-index has {actual} components but the tensor has rank {expected}")]
    RankMismatch {
        /// Tensor rank
        expected: usize,
        /// Components supplied
        actual: usize,
    },

    /// Nested construction supplied the wrong number of subtensors for the
    /// implied axis-0 extent.
    #[error("expected {expected} subtensors along axis 0, got {actual}")]
    ArityMismatch {
        /// Implied axis-0 extent
        expected: usize,
        /// Subtensors supplied
        actual: usize,
    },

    /// Two shapes that must be identical are not.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Left-hand shape
        left: Vec<usize>,
        /// Right-hand shape
        right: Vec<usize>,
    },

    /// Flat data length does not match the element count implied by a shape.
    #[error("shape {shape:?} requires {expected} elements, got {actual}")]
    ElementCountMismatch {
        /// Target shape
        shape: Vec<usize>,
        /// Element count implied by the shape
        expected: usize,
        /// Elements supplied
        actual: usize,
    },

    /// A two-axis permutation was requested with both axes equal.
    #[error("cannot permute axis {axis} with itself")]
    EqualAxes {
        /// The repeated axis
        axis: usize,
    },

    /// An axis cannot be dropped from a rank-0 shape.
    #[error("cannot drop an axis from a rank-0 shape")]
    EmptyShape,

    /// A square-matrix-only operation was invoked on a rectangular matrix.
    #[error("`{op}` requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Operation name
        op: &'static str,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// A fixed-length vector operation was invoked on the wrong length.
    #[error("`{op}` is only defined for vectors of length {expected}, got {actual}")]
    LengthNotSupported {
        /// Operation name
        op: &'static str,
        /// The only supported length
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Matrix-vector product dimensions do not line up.
    #[error("matrix with {cols} columns cannot multiply a vector of length {len}")]
    VectorLengthMismatch {
        /// Matrix column count
        cols: usize,
        /// Vector length
        len: usize,
    },

    /// Matrix-matrix product dimensions do not line up.
    #[error("cannot multiply {m1}x{n1} matrix by {m2}x{n2} matrix")]
    MatrixShapeMismatch {
        /// Left rows
        m1: usize,
        /// Left columns
        n1: usize,
        /// Right rows
        m2: usize,
        /// Right columns
        n2: usize,
    },

    /// Inverse requested on a matrix whose determinant is exactly zero.
    #[error("matrix is singular (determinant = {det}), cannot invert")]
    SingularMatrix {
        /// The determinant, rendered as text to keep the error type `Eq`
        det: String,
    },
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_bounds_display() {
        let err = LinalgError::IndexOutOfBounds {
            axis: 1,
            index: 5,
            extent: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("index 5"));
        assert!(msg.contains("axis 1"));
        assert!(msg.contains("extent 3"));
    }

    #[test]
    fn arity_mismatch_display() {
        let err = LinalgError::ArityMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(err.to_string().contains("expected 3 subtensors"));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn equal_axes_display() {
        let err = LinalgError::EqualAxes { axis: 2 };
        assert!(err.to_string().contains("axis 2 with itself"));
    }

    #[test]
    fn not_square_display() {
        let err = LinalgError::NotSquare {
            op: "determinant",
            rows: 2,
            cols: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("determinant"));
        assert!(msg.contains("2x3"));
    }

    #[test]
    fn singular_matrix_display() {
        let err = LinalgError::SingularMatrix {
            det: "0".to_string(),
        };
        assert!(err.to_string().contains("singular"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<LinalgError>();
        assert_sync::<LinalgError>();
    }
}
