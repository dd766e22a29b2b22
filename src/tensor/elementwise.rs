//! Elementwise combinators and the arithmetic operator surface.
//!
//! The closures are the single source of truth: every `+ - * /` operator,
//! scalar broadcast, and compound assignment is a thin delegate over
//! [`Tensor::map`] / [`Tensor::zip_with`]. Tensor⊕tensor operators require
//! identical shapes and **panic** with the shape-mismatch diagnostic (the
//! operator traits cannot return `Result`); use [`Tensor::zip_with`] directly
//! for checked combination. Division is IEEE-754 throughout: dividing by
//! zero yields infinities or NaN, never an error.
//!
//! Scalar-on-the-left forms (`2.0 - &t`) compute `scalar op element` for
//! every element and are provided for `f32` and `f64`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::tensor::Tensor;

impl<T> Tensor<T> {
    /// Apply a function to every element, producing a new tensor of the same
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let doubled = t.map(|&x| x * 2.0);
    /// assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Tensor<U>
    where
        F: FnMut(&T) -> U,
    {
        Tensor {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Apply a function to every element in place.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.data.iter_mut().for_each(f);
    }

    /// Combine two same-shape tensors elementwise.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let b = Tensor::from_vec(vec![10.0, 20.0], &[2]).unwrap();
    /// let s = a.zip_with(&b, |&x, &y| x + y).unwrap();
    /// assert_eq!(s.to_vec(), vec![11.0, 22.0]);
    /// ```
    pub fn zip_with<U, V, F>(&self, other: &Tensor<U>, mut f: F) -> Result<Tensor<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        if self.shape != other.shape {
            return Err(LinalgError::ShapeMismatch {
                left: self.shape.to_vec(),
                right: other.shape.to_vec(),
            });
        }
        Ok(Tensor {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            shape: self.shape.clone(),
        })
    }

    /// Combine with another same-shape tensor, updating `self` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if the shapes differ.
    pub fn zip_inplace<U, F>(&mut self, other: &Tensor<U>, mut f: F) -> Result<()>
    where
        F: FnMut(&mut T, &U),
    {
        if self.shape != other.shape {
            return Err(LinalgError::ShapeMismatch {
                left: self.shape.to_vec(),
                right: other.shape.to_vec(),
            });
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            f(a, b);
        }
        Ok(())
    }
}

impl<T: Float> Tensor<T> {
    /// Sum of all elements. Zero for an empty tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linrs::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// assert_eq!(t.sum(), 6.0);
    /// ```
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }
}

macro_rules! tensor_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<&Tensor<T>> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                match self.zip_with(rhs, |&a, &b| a $op b) {
                    Ok(out) => out,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T: Float> $trait for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                (&self).$method(&rhs)
            }
        }
    };
}

tensor_binop!(Add, add, +);
tensor_binop!(Sub, sub, -);
tensor_binop!(Mul, mul, *);
tensor_binop!(Div, div, /);

macro_rules! tensor_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.map(|&a| a $op rhs)
            }
        }

        impl<T: Float> $trait<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                (&self).$method(rhs)
            }
        }
    };
}

tensor_scalar_binop!(Add, add, +);
tensor_scalar_binop!(Sub, sub, -);
tensor_scalar_binop!(Mul, mul, *);
tensor_scalar_binop!(Div, div, /);

// Scalar on the left computes `scalar op element`, so `2.0 - t` and
// `2.0 / t` are the flipped forms, not sugar for the tensor-lhs ones.
macro_rules! scalar_tensor_binop {
    ($scalar:ty, $trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Tensor<$scalar>> for $scalar {
            type Output = Tensor<$scalar>;

            fn $method(self, rhs: &Tensor<$scalar>) -> Tensor<$scalar> {
                rhs.map(|&a| self $op a)
            }
        }

        impl $trait<Tensor<$scalar>> for $scalar {
            type Output = Tensor<$scalar>;

            fn $method(self, rhs: Tensor<$scalar>) -> Tensor<$scalar> {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! scalar_tensor_ops {
    ($scalar:ty) => {
        scalar_tensor_binop!($scalar, Add, add, +);
        scalar_tensor_binop!($scalar, Sub, sub, -);
        scalar_tensor_binop!($scalar, Mul, mul, *);
        scalar_tensor_binop!($scalar, Div, div, /);
    };
}

scalar_tensor_ops!(f32);
scalar_tensor_ops!(f64);

macro_rules! tensor_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Float> $trait<&Tensor<T>> for Tensor<T> {
            fn $method(&mut self, rhs: &Tensor<T>) {
                if let Err(err) = self.zip_inplace(rhs, |a, &b| *a = *a $op b) {
                    panic!("{err}");
                }
            }
        }

        impl<T: Float> $trait for Tensor<T> {
            fn $method(&mut self, rhs: Tensor<T>) {
                self.$method(&rhs);
            }
        }

        impl<T: Float> $trait<T> for Tensor<T> {
            fn $method(&mut self, rhs: T) {
                self.map_inplace(|a| *a = *a $op rhs);
            }
        }
    };
}

tensor_assign_op!(AddAssign, add_assign, +);
tensor_assign_op!(SubAssign, sub_assign, -);
tensor_assign_op!(MulAssign, mul_assign, *);
tensor_assign_op!(DivAssign, div_assign, /);

impl<T: Float> Neg for &Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Tensor<T> {
        self.map(|&a| -a)
    }
}

impl<T: Float> Neg for Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Tensor<T> {
        (&self).neg()
    }
}
