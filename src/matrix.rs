//! Rank-2 specialization: square-matrix algebra atop [`Tensor`].
//!
//! [`Matrix`] wraps a rank-2 tensor (the invariant is established by every
//! constructor) and adds transpose, cofactor determinant, adjoint, inverse,
//! and the matrix products. Transpose delegates to the two-axis permutation
//! engine rather than reimplementing the index shuffle.
//!
//! The determinant uses Laplace expansion along the first row, which is
//! O(n!) in the matrix size. It is intended for small geometry matrices
//! (2..4), not as an LU path for large n.

use std::fmt;

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::tensor::Tensor;
use crate::vector::Vector;

/// Dense row-major matrix.
///
/// # Examples
///
/// ```
/// use linrs::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.determinant().unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    tensor: Tensor<T>,
}

impl<T> Matrix<T> {
    /// Matrix shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.tensor.shape[0], self.tensor.shape[1])
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.tensor.shape[0]
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.tensor.shape[1]
    }

    /// Check whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.n_rows() == self.n_cols()
    }

    /// View the underlying rank-2 tensor.
    pub fn as_tensor(&self) -> &Tensor<T> {
        &self.tensor
    }

    /// Consume the matrix and return the underlying tensor.
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }

    fn require_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                op,
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.n_rows())
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ElementCountMismatch`] if
    /// `data.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::from_vec(2, 3, vec![1.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Ok(Self {
            tensor: Tensor::from_vec(data, &[rows, cols])?,
        })
    }

    /// Create a matrix with every element set to `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self {
            tensor: Tensor::from_elem(&[rows, cols], value),
        }
    }

    /// Extract row `i` as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if `i >= n_rows`.
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        Ok(Vector::from_vec(self.tensor.subtensor(i)?.into_vec()))
    }

    /// Extract column `j` as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if `j >= n_cols`.
    pub fn column(&self, j: usize) -> Result<Vector<T>> {
        let (rows, cols) = self.shape();
        if j >= cols {
            return Err(LinalgError::IndexOutOfBounds {
                axis: 1,
                index: j,
                extent: cols,
            });
        }
        let data = (0..rows)
            .map(|i| self.tensor.data[i * cols + j].clone())
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Transpose, also defined for rectangular shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.get(2, 0), 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        // The rank-2 invariant makes the axis swap infallible.
        match self.tensor.permute(0, 1) {
            Ok(tensor) => Self { tensor },
            Err(_) => unreachable!("matrix tensors are rank 2"),
        }
    }

    /// Delete row `row` and column `col`, yielding the (rows-1)×(cols-1)
    /// submatrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either position is out
    /// of range.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        let (rows, cols) = self.shape();
        if row >= rows {
            return Err(LinalgError::IndexOutOfBounds {
                axis: 0,
                index: row,
                extent: rows,
            });
        }
        if col >= cols {
            return Err(LinalgError::IndexOutOfBounds {
                axis: 1,
                index: col,
                extent: cols,
            });
        }
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in (0..rows).filter(|&i| i != row) {
            for j in (0..cols).filter(|&j| j != col) {
                data.push(self.tensor.data[i * cols + j].clone());
            }
        }
        Self::from_vec(rows - 1, cols - 1, data)
    }
}

impl<T: Float> Matrix<T> {
    /// Create a zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    /// Create the n×n identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Matrix;
    ///
    /// let eye = Matrix::<f64>::identity(3);
    /// assert_eq!(eye.get(1, 1), 1.0);
    /// assert_eq!(eye.get(1, 2), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, T::one());
        }
        m
    }

    /// Get the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.tensor[&[row, col]]
    }

    /// Set the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.tensor[&[row, col]] = value;
    }

    /// Determinant via Laplace expansion along the first row.
    ///
    /// The 0×0 determinant is 1 (empty product); the 1×1 determinant is the
    /// single element.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices.
    ///
    /// # Complexity
    ///
    /// O(n!), intended for the small geometry sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Matrix;
    ///
    /// let m = Matrix::from_vec(3, 3, vec![
    ///     2.0, 0.0, 0.0,
    ///     0.0, 3.0, 0.0,
    ///     0.0, 0.0, 4.0,
    /// ]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 24.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        let n = self.require_square("determinant")?;
        match n {
            0 => Ok(T::one()),
            1 => Ok(self.get(0, 0)),
            _ => {
                let mut det = T::zero();
                let mut sign = T::one();
                for j in 0..n {
                    det = det + sign * self.get(0, j) * self.minor(0, j)?.determinant()?;
                    sign = -sign;
                }
                Ok(det)
            }
        }
    }

    /// Adjugate: the transposed cofactor matrix.
    ///
    /// Element `(j, i)` holds `(-1)^(i+j) * det(minor(i, j))`. The 1×1
    /// adjugate is `[[1]]`, so `adjoint * self == det * identity` holds at
    /// every size.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices.
    pub fn adjoint(&self) -> Result<Self> {
        let n = self.require_square("adjoint")?;
        if n == 0 {
            return Ok(Self::zeros(0, 0));
        }
        if n == 1 {
            return Ok(Self::identity(1));
        }
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
                out.set(j, i, sign * self.minor(i, j)?.determinant()?);
            }
        }
        Ok(out)
    }

    /// Matrix-vector product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::VectorLengthMismatch`] if
    /// `vector.len() != n_cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 2, vec![0.0, -1.0, 1.0, 0.0]).unwrap();
    /// let v = Vector::from_vec(vec![1.0, 0.0]);
    /// assert_eq!(m.mul_vector(&v).unwrap().as_slice(), &[0.0, 1.0]);
    /// ```
    pub fn mul_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        let (rows, cols) = self.shape();
        if vector.len() != cols {
            return Err(LinalgError::VectorLengthMismatch {
                cols,
                len: vector.len(),
            });
        }
        let mut out = Vector::zeros(rows);
        for i in 0..rows {
            let mut acc = T::zero();
            for j in 0..cols {
                acc = acc + self.get(i, j) * vector[j];
            }
            out[i] = acc;
        }
        Ok(out)
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::MatrixShapeMismatch`] if
    /// `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let (m, k) = self.shape();
        let (k2, n) = other.shape();
        if k != k2 {
            return Err(LinalgError::MatrixShapeMismatch {
                m1: m,
                n1: k,
                m2: k2,
                n2: n,
            });
        }
        let mut out = Self::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + self.get(i, p) * other.get(p, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    /// Multiply every element by a scalar.
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            tensor: self.tensor.map(|&x| x * scalar),
        }
    }

    /// Divide every element by a scalar (IEEE-754, never an error).
    pub fn div_scalar(&self, scalar: T) -> Self {
        Self {
            tensor: self.tensor.map(|&x| x / scalar),
        }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            tensor: self.tensor.zip_with(&other.tensor, |&a, &b| a + b)?,
        })
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            tensor: self.tensor.zip_with(&other.tensor, |&a, &b| a - b)?,
        })
    }
}

impl<T: Float + fmt::Display> Matrix<T> {
    /// Inverse via the adjugate, `adjoint / determinant`.
    ///
    /// Singularity is an **exact** zero-determinant test; a numerically
    /// near-singular matrix still inverts (into large or infinite
    /// components per IEEE-754).
    ///
    /// # Errors
    ///
    /// - [`LinalgError::NotSquare`] for rectangular matrices.
    /// - [`LinalgError::SingularMatrix`] when the determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::{LinalgError, Matrix};
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.get(0, 0), 0.6);
    ///
    /// let singular = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    /// assert!(matches!(
    ///     singular.inverse(),
    ///     Err(LinalgError::SingularMatrix { .. })
    /// ));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(LinalgError::SingularMatrix {
                det: det.to_string(),
            });
        }
        Ok(self.adjoint()?.div_scalar(det))
    }
}

impl<T: Clone> TryFrom<Tensor<T>> for Matrix<T> {
    type Error = LinalgError;

    /// Convert a rank-2 tensor into a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RankMismatch`] for any other rank.
    fn try_from(tensor: Tensor<T>) -> Result<Self> {
        if tensor.rank() != 2 {
            return Err(LinalgError::RankMismatch {
                expected: 2,
                actual: tensor.rank(),
            });
        }
        Ok(Self { tensor })
    }
}

impl<T> From<Matrix<T>> for Tensor<T> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.tensor
    }
}

impl<T: Float> std::ops::Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// Panics on a column/length mismatch; use [`Matrix::mul_vector`] for
    /// checked multiplication.
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        match self.mul_vector(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Float> std::ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics on an inner-dimension mismatch; use [`Matrix::matmul`] for
    /// checked multiplication.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}
