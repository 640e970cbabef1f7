// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::VectorError;
use crate::like::VectorLike;
use crate::tolerance::Tolerance;
use crate::trig;

/// Immutable 2D vector used by game and simulation code.
///
/// * Components are `f64` and never change after construction; every
///   operation returns a new value.
/// * Equality is exact on both coordinates. Use [`Vector::isclose`] for
///   numerical comparisons.
/// * Positive angles are counter-clockwise and expressed in degrees.
///
/// Coordinates are expected to be finite. A vector holding NaN is not equal
/// to itself, which breaks the `Eq` contract for that value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts any vector-like value, including dynamically shaped ones.
    ///
    /// Sequences must hold exactly two coordinates and mappings exactly the
    /// keys `x` and `y`; anything else is [`VectorError::InvalidVectorLike`].
    /// Coordinates without a float conversion are
    /// [`VectorError::NotConvertible`].
    pub fn convert<V: VectorLike + ?Sized>(value: &V) -> Result<Self, VectorError> {
        value.to_vector()
    }

    /// Horizontal coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns the keyed form `{"x": x, "y": y}`.
    ///
    /// Converting the map back with [`Vector::convert`] yields an equal vector.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([("x", self.x), ("y", self.y)])
    }

    /// Returns a vector with the given coordinates replaced.
    pub fn update(self, x: Option<f64>, y: Option<f64>) -> Self {
        Self::new(x.unwrap_or(self.x), y.unwrap_or(self.y))
    }

    /// Number of coordinates, always 2.
    pub const fn len(&self) -> usize {
        2
    }

    /// Always `false`; a vector has exactly two coordinates.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Positional access: `0` is `x`, `1` is `y`.
    pub fn get(&self, index: usize) -> Result<f64, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(VectorError::IndexOutOfRange { index }),
        }
    }

    /// Keyed access: `"x"` or `"y"`.
    pub fn get_key(&self, key: &str) -> Result<f64, VectorError> {
        match key {
            "x" => Ok(self.x),
            "y" => Ok(self.y),
            _ => Err(VectorError::KeyNotFound {
                key: key.to_owned(),
            }),
        }
    }

    /// Iterates `x` then `y`.
    pub fn iter(&self) -> core::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    /// Returns `true` for the zero vector, the only "falsy" vector.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Vector length (magnitude), recomputed on every call.
    pub fn length(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: impl Into<Vector>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y
    }

    /// Magnitude of the cross product, `x·other.y - y·other.x`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: impl Into<Vector>) -> f64 {
        let other = other.into();
        self.x * other.y - self.y * other.x
    }

    /// Scales both components by `scalar`.
    pub fn scale_by(&self, scalar: f64) -> Self {
        Self::new(scalar * self.x, scalar * self.y)
    }

    /// Divides both components by `divisor`.
    #[allow(clippy::float_cmp)]
    pub fn divide_by(&self, divisor: f64) -> Result<Self, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self::new(self.x / divisor, self.y / divisor))
    }

    /// Rotates counter-clockwise about the origin by `angle` degrees.
    ///
    /// Uses [`trig::cos_sin_deg`], so repeated rotation preserves length and
    /// quarter turns of axis-aligned vectors are exact.
    pub fn rotate(&self, angle: f64) -> Self {
        let (c, s) = trig::cos_sin_deg(angle);
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Signed angle in degrees from `self` to `other`, within `(-180, 180]`.
    ///
    /// Antisymmetric except at the boundary: a half turn is `180` both ways.
    pub fn angle(&self, other: impl Into<Vector>) -> f64 {
        let other = other.into();
        let rv = trig::rad_to_deg(
            libm::atan2(other.x, -other.y) - libm::atan2(self.x, -self.y),
        );
        trig::fold_half_turn(rv)
    }

    /// Approximate comparison with the default [`Tolerance`].
    pub fn isclose(&self, other: impl Into<Vector>) -> bool {
        let other = other.into();
        Tolerance::DEFAULT.accepts((*self - other).length(), self.length().max(other.length()))
    }

    /// Approximate comparison with explicit tolerances.
    ///
    /// The relative term is measured against the longest of `self`, `other`,
    /// and every vector in `rel_to`; the latter widens the baseline for
    /// computations whose error compounds from larger intermediate values.
    pub fn isclose_with(
        &self,
        other: impl Into<Vector>,
        tolerance: Tolerance,
        rel_to: &[Vector],
    ) -> Result<bool, VectorError> {
        let tolerance = tolerance.validated()?;
        let other = other.into();
        let reference = rel_to
            .iter()
            .map(Vector::length)
            .fold(self.length().max(other.length()), f64::max);
        Ok(tolerance.accepts((*self - other).length(), reference))
    }

    /// Returns a colinear vector of the given `length`.
    ///
    /// A zero target returns [`Vector::ZERO`] directly. Scaling a zero vector
    /// to a nonzero length is [`VectorError::DivisionByZero`].
    #[allow(clippy::float_cmp)]
    pub fn scale_to(&self, length: f64) -> Result<Self, VectorError> {
        if length < 0.0 {
            debug!(length, "rejected negative target length");
            return Err(VectorError::InvalidLength { length });
        }
        if length == 0.0 {
            return Ok(Self::ZERO);
        }
        self.scale_by(length).divide_by(self.length())
    }

    /// Same direction, unit length.
    pub fn normalize(&self) -> Result<Self, VectorError> {
        self.scale_to(1.0)
    }

    /// Scales down to `max_length` if longer, otherwise returns `self`.
    ///
    /// The result may exceed `max_length` by a rounding error.
    pub fn truncate(&self, max_length: f64) -> Result<Self, VectorError> {
        if self.length() <= max_length {
            return Ok(*self);
        }
        self.scale_to(max_length)
    }

    /// Component of `self` parallel to `direction`.
    ///
    /// Scaling `direction` by any nonzero factor does not change the result.
    #[allow(clippy::float_cmp)]
    pub fn project(&self, direction: impl Into<Vector>) -> Result<Self, VectorError> {
        let direction = direction.into();
        let norm_sq = direction.dot(direction);
        if norm_sq == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(direction.scale_by(self.dot(direction) / norm_sq))
    }

    /// Splits `self` into components parallel and orthogonal to `basis`.
    ///
    /// The two components sum back to `self`.
    pub fn decompose(&self, basis: impl Into<Vector>) -> Result<(Self, Self), VectorError> {
        let parallel = self.project(basis)?;
        Ok((parallel, *self - parallel))
    }

    /// Reflects against a surface through the origin with unit `surface_normal`.
    ///
    /// Computes `v - 2 (v · n) n`. The normal must have length 1 within a
    /// relative tolerance of `1e-9`; anything else is
    /// [`VectorError::NotNormalized`].
    pub fn reflect(&self, surface_normal: impl Into<Vector>) -> Result<Self, VectorError> {
        let normal = surface_normal.into();
        let length = normal.length();
        if !is_unit_length(length) {
            debug!(length, "rejected non-unit surface normal");
            return Err(VectorError::NotNormalized { length });
        }
        Ok(*self - normal.scale_by(2.0 * self.dot(normal)))
    }
}

fn is_unit_length(length: f64) -> bool {
    (length - 1.0).abs() <= 1e-9 * length.max(1.0)
}

// `-0.0 == 0.0`, so both must hash alike.
fn canonical_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?}, {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<&Vector> for Vector {
    fn from(value: &Vector) -> Self {
        *value
    }
}

impl From<Vector> for (f64, f64) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(value: Vector) -> Self {
        value.to_array()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vector {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_length_check_is_relative() {
        assert!(is_unit_length(1.0));
        assert!(is_unit_length(1.0 + 5e-10));
        assert!(!is_unit_length(1.0 + 5e-9));
        assert!(!is_unit_length(0.0));
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        assert_eq!(canonical_bits(-0.0), canonical_bits(0.0));
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    }
}
