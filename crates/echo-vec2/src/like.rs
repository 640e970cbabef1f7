// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversion of "vector-like" values into [`Vector`].
//!
//! A vector-like is one of:
//! - a [`Vector`] or subtype (see [`crate::VectorType`]);
//! - an ordered pair of coordinates: `(a, b)`, `[a, b]`, or a slice/`Vec`
//!   holding exactly two;
//! - a mapping with exactly the two keys `"x"` and `"y"`.
//!
//! Coordinates go through [`Coordinate`], which accepts numbers and numeric
//! text. Shapes known at compile time to be valid (`(f64, f64)`, `[f64; 2]`,
//! vectors) also convert infallibly with `From`.
//!
//! [`Value`] and [`Arguments`] model dynamically typed input, e.g. from a
//! scripting layer or data files, including the positional/keyword
//! construction protocol with its arity rules.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::VectorError;
use crate::vector::Vector;

/// A value with a conversion to an `f64` coordinate.
pub trait Coordinate {
    /// Converts to `f64`, or fails with [`VectorError::NotConvertible`].
    fn to_coordinate(&self) -> Result<f64, VectorError>;
}

/// A value that can be interpreted as a [`Vector`].
pub trait VectorLike {
    /// Converts to a [`Vector`].
    fn to_vector(&self) -> Result<Vector, VectorError>;
}

macro_rules! lossless_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn to_coordinate(&self) -> Result<f64, VectorError> {
                Ok(f64::from(*self))
            }
        }
    )*};
}

// Wide integers round to the nearest representable float.
macro_rules! rounding_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            #[allow(clippy::cast_precision_loss)]
            fn to_coordinate(&self) -> Result<f64, VectorError> {
                Ok(*self as f64)
            }
        }
    )*};
}

lossless_coordinate!(f64, f32, i8, i16, i32, u8, u16, u32);
rounding_coordinate!(i64, u64, i128, u128, isize, usize);

impl Coordinate for str {
    fn to_coordinate(&self) -> Result<f64, VectorError> {
        self.trim().parse::<f64>().map_err(|_| {
            debug!(value = self, "coordinate text is not a float");
            VectorError::NotConvertible {
                value: format!("text {self:?}"),
            }
        })
    }
}

impl Coordinate for String {
    fn to_coordinate(&self) -> Result<f64, VectorError> {
        self.as_str().to_coordinate()
    }
}

impl<T: Coordinate + ?Sized> Coordinate for &T {
    fn to_coordinate(&self) -> Result<f64, VectorError> {
        (**self).to_coordinate()
    }
}

fn invalid(reason: String) -> VectorError {
    debug!(%reason, "rejected vector-like");
    VectorError::InvalidVectorLike { reason }
}

fn from_pair(x: &impl Coordinate, y: &impl Coordinate) -> Result<Vector, VectorError> {
    Ok(Vector::new(x.to_coordinate()?, y.to_coordinate()?))
}

fn from_entries<'a, K, V>(
    len: usize,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> Result<Vector, VectorError>
where
    K: AsRef<str> + ?Sized + 'a,
    V: Coordinate + 'a,
{
    if len != 2 {
        return Err(invalid(format!("a mapping with {len} entries")));
    }
    let (mut x, mut y) = (None, None);
    for (key, value) in entries {
        match key.as_ref() {
            "x" => x = Some(value),
            "y" => y = Some(value),
            other => return Err(invalid(format!("a mapping with key {other:?}"))),
        }
    }
    match (x, y) {
        (Some(x), Some(y)) => from_pair(x, y),
        _ => Err(invalid("a mapping without both \"x\" and \"y\"".to_owned())),
    }
}

impl VectorLike for Vector {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        Ok(*self)
    }
}

impl<T: VectorLike + ?Sized> VectorLike for &T {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        (**self).to_vector()
    }
}

impl<A: Coordinate, B: Coordinate> VectorLike for (A, B) {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        from_pair(&self.0, &self.1)
    }
}

impl<A: Coordinate> VectorLike for [A; 2] {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        from_pair(&self[0], &self[1])
    }
}

impl<A: Coordinate> VectorLike for [A] {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        match self {
            [x, y] => from_pair(x, y),
            _ => Err(invalid(format!("a sequence of length {}", self.len()))),
        }
    }
}

impl<A: Coordinate> VectorLike for Vec<A> {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        self.as_slice().to_vector()
    }
}

impl<K: AsRef<str>, V: Coordinate, S> VectorLike for HashMap<K, V, S> {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        from_entries(self.len(), self.iter())
    }
}

impl<K: AsRef<str>, V: Coordinate> VectorLike for BTreeMap<K, V> {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        from_entries(self.len(), self.iter())
    }
}

/// Dynamically typed input for vector construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A float.
    Float(f64),
    /// An integer.
    Int(i64),
    /// Text, convertible when it parses as a float.
    Text(String),
    /// An ordered sequence.
    Seq(Vec<Value>),
    /// A string-keyed mapping.
    Map(BTreeMap<String, Value>),
    /// An existing vector.
    Vector(Vector),
}

impl Value {
    fn describe(&self) -> String {
        match self {
            Self::Float(v) => format!("float {v:?}"),
            Self::Int(v) => format!("int {v}"),
            Self::Text(s) => format!("text {s:?}"),
            Self::Seq(items) => format!("a sequence of length {}", items.len()),
            Self::Map(entries) => format!("a mapping with {} entries", entries.len()),
            Self::Vector(v) => v.to_string(),
        }
    }
}

impl Coordinate for Value {
    fn to_coordinate(&self) -> Result<f64, VectorError> {
        match self {
            Self::Float(v) => Ok(*v),
            Self::Int(v) => v.to_coordinate(),
            Self::Text(s) => s.to_coordinate(),
            Self::Seq(_) | Self::Map(_) | Self::Vector(_) => {
                let value = self.describe();
                debug!(%value, "coordinate has no float conversion");
                Err(VectorError::NotConvertible { value })
            }
        }
    }
}

impl VectorLike for Value {
    fn to_vector(&self) -> Result<Vector, VectorError> {
        match self {
            Self::Vector(v) => Ok(*v),
            Self::Seq(items) => items.to_vector(),
            Self::Map(entries) => entries.to_vector(),
            Self::Float(_) | Self::Int(_) | Self::Text(_) => Err(invalid(self.describe())),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vector> for Value {
    fn from(value: Vector) -> Self {
        Self::Vector(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Seq(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

/// Positional and keyword arguments for [`Vector::from_arguments`].
///
/// ```
/// use echo_vec2::{Arguments, Vector};
///
/// let v = Vector::from_arguments(&Arguments::new().kwarg("x", 3).kwarg("y", 4.0))?;
/// assert_eq!(v, Vector::new(3.0, 4.0));
/// # Ok::<(), echo_vec2::VectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keywords: BTreeMap<String, Value>,
}

impl Arguments {
    /// An empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument, replacing any earlier value for `name`.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// Positional arguments in order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments by name.
    pub fn keywords(&self) -> &BTreeMap<String, Value> {
        &self.keywords
    }
}

impl Vector {
    /// Builds a vector from one vector-like or two coordinates, passed either
    /// positionally or as the keywords `x` and `y`.
    ///
    /// Errors:
    /// - [`VectorError::ArgumentConflict`] when positional and keyword
    ///   arguments are mixed;
    /// - [`VectorError::Arity`] for no arguments, more than two positional
    ///   arguments, or keywords other than exactly `x` and `y`;
    /// - conversion errors of [`Vector::convert`] and [`Coordinate`].
    pub fn from_arguments(args: &Arguments) -> Result<Self, VectorError> {
        let positional = args.positional.len();
        let keywords = args.keywords.len();

        if positional > 0 && keywords > 0 {
            debug!(positional, keywords, "mixed positional and keyword arguments");
            return Err(VectorError::ArgumentConflict {
                positional,
                keywords,
            });
        }

        if keywords > 0 {
            return match (args.keywords.get("x"), args.keywords.get("y")) {
                (Some(x), Some(y)) if keywords == 2 => from_pair(x, y),
                _ => {
                    let names: Vec<&str> = args.keywords.keys().map(String::as_str).collect();
                    debug!(?names, "unexpected keyword arguments");
                    Err(VectorError::Arity {
                        reason: format!(
                            "expected keyword arguments x and y, got: {}",
                            names.join(", ")
                        ),
                    })
                }
            };
        }

        match args.positional.as_slice() {
            [value] => value.to_vector(),
            [x, y] => from_pair(x, y),
            other => {
                let got = other.len();
                debug!(got, "wrong construction arity");
                Err(VectorError::Arity {
                    reason: format!("expected 1 vector-like or 2 float-like arguments, got {got}"),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coordinates_parse_with_whitespace() {
        assert_eq!(" 2.5 ".to_coordinate(), Ok(2.5));
        assert!(matches!(
            "two".to_coordinate(),
            Err(VectorError::NotConvertible { .. })
        ));
    }

    #[test]
    fn wide_integers_round() {
        assert_eq!(u64::MAX.to_coordinate(), Ok(18_446_744_073_709_551_616.0));
        assert_eq!((-3_i64).to_coordinate(), Ok(-3.0));
    }

    #[test]
    fn mapping_requires_exact_keys() {
        let extra = BTreeMap::from([("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        assert!(matches!(
            extra.to_vector(),
            Err(VectorError::InvalidVectorLike { .. })
        ));
        let wrong = BTreeMap::from([("x", 1.0), ("z", 3.0)]);
        assert!(matches!(
            wrong.to_vector(),
            Err(VectorError::InvalidVectorLike { .. })
        ));
    }

    #[test]
    fn value_descriptions_name_the_shape() {
        assert_eq!(Value::Int(3).describe(), "int 3");
        assert_eq!(
            Value::Seq(vec![Value::Int(1)]).describe(),
            "a sequence of length 1"
        );
        assert_eq!(Value::Vector(Vector::UNIT_X).describe(), "Vector(1.0, 0.0)");
    }
}
