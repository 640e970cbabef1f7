// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Operator overloads for [`Vector`].
//!
//! `+` and `-` accept vectors and coordinate pairs on either side. `*`
//! dispatches on its operand: a scalar scales the vector, a vector-like
//! yields the dot product. Division is fallible and lives in
//! [`Vector::divide_by`].

use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use crate::vector::Vector;

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl Mul for Vector {
    type Output = f64;
    fn mul(self, rhs: Self) -> f64 {
        self.dot(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale_by(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale_by(self)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale_by(-1.0)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// Coordinate pairs on either side of `+`, `-` and the dot-product `*`.
macro_rules! pair_operand_ops {
    ($pair:ty) => {
        impl Add<$pair> for Vector {
            type Output = Vector;
            fn add(self, rhs: $pair) -> Vector {
                self + Vector::from(rhs)
            }
        }

        impl Add<Vector> for $pair {
            type Output = Vector;
            fn add(self, rhs: Vector) -> Vector {
                Vector::from(self) + rhs
            }
        }

        impl Sub<$pair> for Vector {
            type Output = Vector;
            fn sub(self, rhs: $pair) -> Vector {
                self - Vector::from(rhs)
            }
        }

        impl Sub<Vector> for $pair {
            type Output = Vector;
            fn sub(self, rhs: Vector) -> Vector {
                Vector::from(self) - rhs
            }
        }

        impl Mul<$pair> for Vector {
            type Output = f64;
            fn mul(self, rhs: $pair) -> f64 {
                self.dot(rhs)
            }
        }

        impl Mul<Vector> for $pair {
            type Output = f64;
            fn mul(self, rhs: Vector) -> f64 {
                rhs.dot(self)
            }
        }
    };
}

pair_operand_ops!((f64, f64));
pair_operand_ops!([f64; 2]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_dispatches_on_operand_shape() {
        let v = Vector::new(1.0, 1.0);
        assert_eq!(v * 3.0, Vector::new(3.0, 3.0));
        assert_eq!(3.0 * v, v.scale_by(3.0));
        assert_eq!(v * (-1.0, -1.0), -2.0);
        assert_eq!((-1.0, -1.0) * v, v.dot((-1.0, -1.0)));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        assert_eq!(core::iter::empty::<Vector>().sum::<Vector>(), Vector::ZERO);
    }
}
