//! Rank-1 specialization with the geometric operation set.
//!
//! [`Vector`] owns a flat buffer and adds the operations that only make
//! sense on rank 1: dot product, Euclidean length, normalization, linear
//! interpolation, plus the fixed-length specials (2-D `determinant`,
//! 3-D `cross`). It converts losslessly to and from a rank-1 [`Tensor`].
//!
//! Like the tensor operators, vector⊕vector operators require equal lengths
//! and panic otherwise; geometric methods that are only defined at a fixed
//! length return `Result` instead.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::tensor::Tensor;

/// Dense vector with owned storage.
///
/// # Examples
///
/// ```
/// use linrs::Vector;
///
/// let v = Vector::from_vec(vec![3.0, 4.0]);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.dot(&v), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

impl<T> Vector<T> {
    /// Create a vector from its components.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the vector has zero components.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the components as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get a reference to component `i`, or `None` past the length.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Iterate over the components.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over the components.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector by copying a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Return a copy one component longer, with `value` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let v2 = Vector::from_vec(vec![1.0, 2.0]);
    /// let v3 = v2.extend(3.0);
    /// assert_eq!(v3.as_slice(), &[1.0, 2.0, 3.0]);
    /// assert_eq!(v2.len(), 2);
    /// ```
    pub fn extend(&self, value: T) -> Self {
        let mut data = self.data.clone();
        data.push(value);
        Self { data }
    }

    /// Copy the components into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Convert into a rank-1 tensor of the same length.
    pub fn to_tensor(&self) -> Tensor<T> {
        Tensor {
            data: self.data.clone(),
            shape: [self.data.len()].iter().copied().collect(),
        }
    }

    fn zip_map<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(&T, &T) -> T,
    {
        if self.len() != other.len() {
            panic!(
                "{}",
                LinalgError::ShapeMismatch {
                    left: vec![self.len()],
                    right: vec![other.len()],
                }
            );
        }
        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self {
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Float> Vector<T> {
    /// Create a zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    /// Dot product.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// let b = Vector::from_vec(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> T {
        assert_eq!(
            self.len(),
            other.len(),
            "dot product requires equal lengths"
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Sum of the components. Zero for an empty vector.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Squared Euclidean length, `self · self`.
    pub fn squared_length(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Follows IEEE-754 division: normalizing a zero vector yields NaN
    /// components rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let v = Vector::from_vec(vec![3.0f64, 0.0, 4.0]);
    /// let unit = v.normalize();
    /// assert!((unit.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        let len = self.length();
        self.map(|&x| x / len)
    }

    /// Unclamped linear interpolation toward `to`.
    ///
    /// Computes `self*(1-t) + to*t` per component, so `t = 0` returns
    /// `self` and `t = 1` returns `to` exactly, at any magnitude; values
    /// outside `[0, 1]` extrapolate.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let a = Vector::from_vec(vec![0.0, 10.0]);
    /// let b = Vector::from_vec(vec![4.0, 20.0]);
    /// assert_eq!(a.lerp(&b, 0.5).as_slice(), &[2.0, 15.0]);
    /// assert_eq!(a.lerp(&b, 2.0).as_slice(), &[8.0, 30.0]);
    /// ```
    pub fn lerp(&self, to: &Self, t: T) -> Self {
        let one = T::one();
        self.zip_map(to, |&a, &b| a * (one - t) + b * t)
    }

    /// Z-component of the 2-D cross product, `x0*y1 - y0*x1`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthNotSupported`] unless both vectors have
    /// length exactly 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let a = Vector::from_vec(vec![1.0, 2.0]);
    /// let b = Vector::from_vec(vec![3.0, 4.0]);
    /// assert_eq!(a.determinant(&b).unwrap(), -2.0);
    /// ```
    pub fn determinant(&self, other: &Self) -> Result<T> {
        for v in [self, other] {
            if v.len() != 2 {
                return Err(LinalgError::LengthNotSupported {
                    op: "determinant",
                    expected: 2,
                    actual: v.len(),
                });
            }
        }
        Ok(self.data[0] * other.data[1] - self.data[1] * other.data[0])
    }

    /// 3-D cross product.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthNotSupported`] unless both vectors have
    /// length exactly 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Vector;
    ///
    /// let x = Vector::from_vec(vec![1.0, 0.0, 0.0]);
    /// let y = Vector::from_vec(vec![0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.len() != 3 {
                return Err(LinalgError::LengthNotSupported {
                    op: "cross",
                    expected: 3,
                    actual: v.len(),
                });
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self {
            data: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// First component.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 2.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 3.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Fourth component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 4.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Set the first component.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn set_x(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Set the second component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 2.
    pub fn set_y(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Set the third component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 3.
    pub fn set_z(&mut self, value: T) {
        self.data[2] = value;
    }

    /// Set the fourth component.
    ///
    /// # Panics
    ///
    /// Panics if the length is below 4.
    pub fn set_w(&mut self, value: T) {
        self.data[3] = value;
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vector<T>> for Tensor<T> {
    fn from(vector: Vector<T>) -> Self {
        let len = vector.data.len();
        Tensor {
            data: vector.data,
            shape: [len].iter().copied().collect(),
        }
    }
}

impl<T> TryFrom<Tensor<T>> for Vector<T> {
    type Error = LinalgError;

    /// Convert a rank-1 tensor into a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RankMismatch`] for any other rank.
    fn try_from(tensor: Tensor<T>) -> Result<Self> {
        if tensor.rank() != 1 {
            return Err(LinalgError::RankMismatch {
                expected: 1,
                actual: tensor.rank(),
            });
        }
        Ok(Self { data: tensor.data })
    }
}

/// Renders `"(v0, v1, …, vN)"` with fixed six-decimal components.
///
/// # Examples
///
/// ```
/// use linrs::Vector;
///
/// let v = Vector::from_vec(vec![1.0, -0.5]);
/// assert_eq!(v.to_string(), "(1.000000, -0.500000)");
/// ```
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.6}")?;
        }
        write!(f, ")")
    }
}

macro_rules! vector_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<&Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                self.zip_map(rhs, |&a, &b| a $op b)
            }
        }

        impl<T: Float> $trait for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Float> $trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.map(|&a| a $op rhs)
            }
        }

        impl<T: Float> $trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                (&self).$method(rhs)
            }
        }
    };
}

vector_binop!(Add, add, +);
vector_binop!(Sub, sub, -);
vector_binop!(Mul, mul, *);
vector_binop!(Div, div, /);

// Scalar on the left computes `scalar op element`.
macro_rules! scalar_vector_binop {
    ($scalar:ty, $trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn $method(self, rhs: &Vector<$scalar>) -> Vector<$scalar> {
                rhs.map(|&a| self $op a)
            }
        }

        impl $trait<Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            fn $method(self, rhs: Vector<$scalar>) -> Vector<$scalar> {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! scalar_vector_ops {
    ($scalar:ty) => {
        scalar_vector_binop!($scalar, Add, add, +);
        scalar_vector_binop!($scalar, Sub, sub, -);
        scalar_vector_binop!($scalar, Mul, mul, *);
        scalar_vector_binop!($scalar, Div, div, /);
    };
}

scalar_vector_ops!(f32);
scalar_vector_ops!(f64);

macro_rules! vector_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<&Vector<T>> for Vector<T> {
            fn $method(&mut self, rhs: &Vector<T>) {
                *self = (&*self).zip_map(rhs, |&a, &b| a $op b);
            }
        }

        impl<T: Float> $trait for Vector<T> {
            fn $method(&mut self, rhs: Vector<T>) {
                self.$method(&rhs);
            }
        }

        impl<T: Float> $trait<T> for Vector<T> {
            fn $method(&mut self, rhs: T) {
                for a in self.data.iter_mut() {
                    *a = *a $op rhs;
                }
            }
        }
    };
}

vector_assign_op!(AddAssign, add_assign, +);
vector_assign_op!(SubAssign, sub_assign, -);
vector_assign_op!(MulAssign, mul_assign, *);
vector_assign_op!(DivAssign, div_assign, /);

impl<T: Float> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|&a| -a)
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        (&self).neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_orthogonal_is_zero() {
        let x = Vector::from_vec(vec![1.0, 0.0, 0.0]);
        let y = Vector::from_vec(vec![0.0, 1.0, 0.0]);
        assert_eq!(x.dot(&y), 0.0);
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn dot_panics_on_length_mismatch() {
        let a = Vector::from_vec(vec![1.0, 2.0]);
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let _ = a.dot(&b);
    }

    #[test]
    fn length_of_345_triangle() {
        let v = Vector::from_vec(vec![3.0f64, 4.0]);
        assert_eq!(v.squared_length(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vector::from_vec(vec![0.0f64, 0.0, 10.0]);
        let unit = v.normalize();
        assert_eq!(unit.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn normalize_zero_vector_is_nan() {
        let unit = Vector::from_vec(vec![0.0f64, 0.0]).normalize();
        assert!(unit.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vector::from_vec(vec![1.0, 2.0]);
        let b = Vector::from_vec(vec![5.0, 6.0]);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_endpoints_exact_at_mismatched_magnitudes() {
        // a*(1-t) + b*t keeps the endpoints exact even where the
        // one-subtraction form would cancel catastrophically.
        let a = Vector::from_vec(vec![1.0e16, 0.3]);
        let b = Vector::from_vec(vec![1.0, 0.1]);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.0), a);
    }

    #[test]
    fn lerp_is_unclamped() {
        let a = Vector::from_vec(vec![0.0]);
        let b = Vector::from_vec(vec![1.0]);
        assert_eq!(a.lerp(&b, -1.0).as_slice(), &[-1.0]);
    }

    #[test]
    fn determinant_antisymmetric() {
        let a = Vector::from_vec(vec![2.0, 3.0]);
        let b = Vector::from_vec(vec![5.0, 7.0]);
        assert_eq!(a.determinant(&b).unwrap(), -(b.determinant(&a).unwrap()));
        assert_eq!(a.determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn determinant_rejects_other_lengths() {
        let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            a.determinant(&b).unwrap_err(),
            LinalgError::LengthNotSupported {
                op: "determinant",
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector::from_vec(vec![1.0, 0.0, 0.0]);
        let y = Vector::from_vec(vec![0.0, 1.0, 0.0]);
        let z = x.cross(&y).unwrap();
        assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
        assert_eq!(y.cross(&x).unwrap().as_slice(), &[0.0, 0.0, -1.0]);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vector::from_vec(vec![1.0f64, 2.0, 3.0]);
        let b = Vector::from_vec(vec![4.0, 5.0, 6.0]);
        let c = a.cross(&b).unwrap();
        assert!(a.dot(&c).abs() < 1e-12);
        assert!(b.dot(&c).abs() < 1e-12);
    }

    #[test]
    fn cross_rejects_other_lengths() {
        let a = Vector::from_vec(vec![1.0, 2.0]);
        let b = Vector::from_vec(vec![3.0, 4.0]);
        assert!(matches!(
            a.cross(&b),
            Err(LinalgError::LengthNotSupported {
                op: "cross",
                expected: 3,
                ..
            })
        ));
    }

    #[test]
    fn named_accessors() {
        let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        v.set_y(20.0);
        assert_eq!(v.y(), 20.0);
    }

    #[test]
    #[should_panic]
    fn accessor_past_length_panics() {
        let v = Vector::from_vec(vec![1.0, 2.0]);
        let _ = v.z();
    }

    #[test]
    fn extend_appends_one_component() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let w = v.extend(4.0);
        assert_eq!(w.len(), 4);
        assert_eq!(w.w(), 4.0);
    }

    #[test]
    fn display_six_decimals() {
        let v = Vector::from_vec(vec![1.0, -2.5, 0.0]);
        assert_eq!(v.to_string(), "(1.000000, -2.500000, 0.000000)");
    }

    #[test]
    fn display_empty() {
        let v = Vector::<f64>::from_vec(vec![]);
        assert_eq!(v.to_string(), "()");
    }

    #[test]
    fn operators_elementwise() {
        let a = Vector::from_vec(vec![1.0f64, 2.0]);
        let b = Vector::from_vec(vec![10.0f64, 20.0]);
        assert_eq!((&a + &b).as_slice(), &[11.0, 22.0]);
        assert_eq!((&b - &a).as_slice(), &[9.0, 18.0]);
        assert_eq!((&a * 3.0).as_slice(), &[3.0, 6.0]);
        assert_eq!((10.0 / &a).as_slice(), &[10.0, 5.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0]);
    }

    #[test]
    fn compound_assign() {
        let mut v = Vector::from_vec(vec![1.0, 2.0]);
        v += &Vector::from_vec(vec![1.0, 1.0]);
        v *= 2.0;
        assert_eq!(v.as_slice(), &[4.0, 6.0]);
    }

    #[test]
    fn tensor_round_trip() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let t: Tensor<f64> = v.clone().into();
        assert_eq!(t.shape(), &[3]);
        let back = Vector::try_from(t).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn try_from_rejects_other_ranks() {
        let t = Tensor::<f64>::zeros(&[2, 2]);
        assert_eq!(
            Vector::try_from(t).unwrap_err(),
            LinalgError::RankMismatch {
                expected: 1,
                actual: 2
            }
        );
    }
}
