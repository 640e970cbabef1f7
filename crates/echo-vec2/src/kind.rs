// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector subtypes: types that carry a [`Vector`] plus extra fields.
//!
//! A subtype implements [`VectorType`] and invokes [`vector_ops!`] to get the
//! operator set. Operations on a subtype return the subtype, with its extra
//! fields copied from the operand that supplied them:
//! - `S op S` keeps the left operand's fields;
//! - `S op Vector` and `Vector op S` keep the subtype's fields.
//!
//! When two *different* subtypes meet, [`promote`] decides the result type
//! from each type's declared [`VectorType::SPECIFICITY`] through the explicit
//! [`precedence`] rule.
//!
//! [`vector_ops!`]: crate::vector_ops

use crate::error::VectorError;
use crate::vector::Vector;

/// A value that is a [`Vector`] with optional extra fields.
pub trait VectorType: Clone {
    /// Precedence of this type when mixed with another subtype.
    ///
    /// [`Vector`] is `0`; a subtype declares a larger value, typically its
    /// depth below `Vector`.
    const SPECIFICITY: u32;

    /// Returns the coordinates.
    fn coords(&self) -> Vector;

    /// Returns a copy of `self` with its coordinates replaced.
    fn with_coords(&self, coords: Vector) -> Self;

    /// [`Vector::scale_by`], keeping extra fields.
    fn scale_by(&self, scalar: f64) -> Self {
        self.with_coords(self.coords().scale_by(scalar))
    }

    /// [`Vector::divide_by`], keeping extra fields.
    fn divide_by(&self, divisor: f64) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().divide_by(divisor)?))
    }

    /// [`Vector::rotate`], keeping extra fields.
    fn rotate(&self, angle: f64) -> Self {
        self.with_coords(self.coords().rotate(angle))
    }

    /// [`Vector::scale_to`], keeping extra fields.
    fn scale_to(&self, length: f64) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().scale_to(length)?))
    }

    /// [`Vector::normalize`], keeping extra fields.
    fn normalize(&self) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().normalize()?))
    }

    /// [`Vector::truncate`], keeping extra fields.
    fn truncate(&self, max_length: f64) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().truncate(max_length)?))
    }

    /// [`Vector::reflect`], keeping extra fields.
    fn reflect(&self, surface_normal: impl Into<Vector>) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().reflect(surface_normal)?))
    }

    /// [`Vector::project`], keeping extra fields.
    fn project(&self, direction: impl Into<Vector>) -> Result<Self, VectorError> {
        Ok(self.with_coords(self.coords().project(direction)?))
    }

    /// [`Vector::update`], keeping extra fields.
    fn update(&self, x: Option<f64>, y: Option<f64>) -> Self {
        self.with_coords(self.coords().update(x, y))
    }

    /// Sum with another vector type; the result type follows [`precedence`].
    fn add_promoted<R: VectorType>(&self, rhs: &R) -> Promoted<Self, R> {
        promote(self, rhs, self.coords() + rhs.coords())
    }

    /// Difference with another vector type; the result type follows [`precedence`].
    fn sub_promoted<R: VectorType>(&self, rhs: &R) -> Promoted<Self, R> {
        promote(self, rhs, self.coords() - rhs.coords())
    }
}

impl VectorType for Vector {
    const SPECIFICITY: u32 = 0;

    fn coords(&self) -> Vector {
        *self
    }

    fn with_coords(&self, coords: Vector) -> Self {
        coords
    }
}

/// Which operand of a binary operation supplies the result type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    /// The left operand.
    Left,
    /// The right operand.
    Right,
}

/// The result-type rule for binary operations on vector types.
///
/// The strictly more specific operand wins; ties go to the left operand.
pub const fn precedence(lhs: u32, rhs: u32) -> Side {
    if rhs > lhs {
        Side::Right
    } else {
        Side::Left
    }
}

/// Result of a binary operation between two vector types.
#[derive(Debug, Clone, PartialEq)]
pub enum Promoted<L, R> {
    /// Built from the left operand.
    Left(L),
    /// Built from the right operand.
    Right(R),
}

impl<L: VectorType, R: VectorType> Promoted<L, R> {
    /// Coordinates of the result, whichever type it took.
    pub fn coords(&self) -> Vector {
        match self {
            Self::Left(l) => l.coords(),
            Self::Right(r) => r.coords(),
        }
    }

    /// The result, if it took the left operand's type.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The result, if it took the right operand's type.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }
}

/// Builds `coords` as whichever operand type [`precedence`] selects.
pub fn promote<L: VectorType, R: VectorType>(lhs: &L, rhs: &R, coords: Vector) -> Promoted<L, R> {
    match precedence(L::SPECIFICITY, R::SPECIFICITY) {
        Side::Left => Promoted::Left(lhs.with_coords(coords)),
        Side::Right => Promoted::Right(rhs.with_coords(coords)),
    }
}

/// Implements conversions and operators for a [`VectorType`] subtype.
///
/// Generates `From<T>`/`From<&T>` for [`Vector`], [`VectorLike`], `+`/`-`
/// against `T`, [`Vector`], `(f64, f64)` and `[f64; 2]` on either side,
/// scalar and dot-product `*`, and unary `-`.
///
/// ```
/// use echo_vec2::{vector_ops, Vector, VectorType};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tagged {
///     v: Vector,
///     tag: u8,
/// }
///
/// impl VectorType for Tagged {
///     const SPECIFICITY: u32 = 1;
///     fn coords(&self) -> Vector {
///         self.v
///     }
///     fn with_coords(&self, coords: Vector) -> Self {
///         Self { v: coords, tag: self.tag }
///     }
/// }
///
/// vector_ops!(Tagged);
///
/// let t = Tagged { v: Vector::new(1.0, 2.0), tag: 7 };
/// let sum = Vector::new(1.0, 1.0) + t.clone();
/// assert_eq!(sum.tag, 7);
/// assert_eq!(sum.v, Vector::new(2.0, 3.0));
/// assert_eq!(t.clone() * Vector::UNIT_Y, 2.0);
/// assert_eq!((t.clone() - (1.0, 1.0)).v, Vector::new(0.0, 1.0));
/// ```
///
/// [`VectorLike`]: crate::VectorLike
#[macro_export]
macro_rules! vector_ops {
    (@pair $t:ty, $pair:ty) => {
        impl ::core::ops::Add<$pair> for $t {
            type Output = $t;
            fn add(self, rhs: $pair) -> $t {
                let coords = $crate::VectorType::coords(&self) + rhs;
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Add<$t> for $pair {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                let coords = self + $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&rhs, coords)
            }
        }

        impl ::core::ops::Sub<$pair> for $t {
            type Output = $t;
            fn sub(self, rhs: $pair) -> $t {
                let coords = $crate::VectorType::coords(&self) - rhs;
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Sub<$t> for $pair {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                let coords = self - $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&rhs, coords)
            }
        }

        impl ::core::ops::Mul<$pair> for $t {
            type Output = f64;
            fn mul(self, rhs: $pair) -> f64 {
                $crate::VectorType::coords(&self) * rhs
            }
        }

        impl ::core::ops::Mul<$t> for $pair {
            type Output = f64;
            fn mul(self, rhs: $t) -> f64 {
                self * $crate::VectorType::coords(&rhs)
            }
        }
    };
    ($t:ty) => {
        $crate::vector_ops!(@pair $t, (f64, f64));
        $crate::vector_ops!(@pair $t, [f64; 2]);

        impl ::core::convert::From<$t> for $crate::Vector {
            fn from(value: $t) -> Self {
                $crate::VectorType::coords(&value)
            }
        }

        impl ::core::convert::From<&$t> for $crate::Vector {
            fn from(value: &$t) -> Self {
                $crate::VectorType::coords(value)
            }
        }

        impl $crate::VectorLike for $t {
            fn to_vector(&self) -> ::core::result::Result<$crate::Vector, $crate::VectorError> {
                ::core::result::Result::Ok($crate::VectorType::coords(self))
            }
        }

        impl ::core::ops::Add for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                let coords = $crate::VectorType::coords(&self) + $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Add<$crate::Vector> for $t {
            type Output = $t;
            fn add(self, rhs: $crate::Vector) -> $t {
                let coords = $crate::VectorType::coords(&self) + rhs;
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Add<$t> for $crate::Vector {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                let coords = self + $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&rhs, coords)
            }
        }

        impl ::core::ops::Sub for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                let coords = $crate::VectorType::coords(&self) - $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Sub<$crate::Vector> for $t {
            type Output = $t;
            fn sub(self, rhs: $crate::Vector) -> $t {
                let coords = $crate::VectorType::coords(&self) - rhs;
                $crate::VectorType::with_coords(&self, coords)
            }
        }

        impl ::core::ops::Sub<$t> for $crate::Vector {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                let coords = self - $crate::VectorType::coords(&rhs);
                $crate::VectorType::with_coords(&rhs, coords)
            }
        }

        impl ::core::ops::Mul<f64> for $t {
            type Output = $t;
            fn mul(self, rhs: f64) -> $t {
                $crate::VectorType::scale_by(&self, rhs)
            }
        }

        impl ::core::ops::Mul<$t> for f64 {
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                $crate::VectorType::scale_by(&rhs, self)
            }
        }

        impl ::core::ops::Mul for $t {
            type Output = f64;
            fn mul(self, rhs: $t) -> f64 {
                $crate::VectorType::coords(&self).dot($crate::VectorType::coords(&rhs))
            }
        }

        impl ::core::ops::Mul<$crate::Vector> for $t {
            type Output = f64;
            fn mul(self, rhs: $crate::Vector) -> f64 {
                $crate::VectorType::coords(&self).dot(rhs)
            }
        }

        impl ::core::ops::Mul<$t> for $crate::Vector {
            type Output = f64;
            fn mul(self, rhs: $t) -> f64 {
                self.dot($crate::VectorType::coords(&rhs))
            }
        }

        impl ::core::ops::Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                $crate::VectorType::scale_by(&self, -1.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_prefers_more_specific_then_left() {
        assert_eq!(precedence(0, 1), Side::Right);
        assert_eq!(precedence(2, 1), Side::Left);
        assert_eq!(precedence(1, 1), Side::Left);
        assert_eq!(precedence(0, 0), Side::Left);
    }

    #[test]
    fn plain_vectors_promote_to_left() {
        let sum = Vector::UNIT_X.add_promoted(&Vector::UNIT_Y);
        assert_eq!(sum, Promoted::Left(Vector::new(1.0, 1.0)));
    }
}
