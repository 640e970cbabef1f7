// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r#"Immutable 2D vector for Echo game and simulation code.

This crate provides:
- [`Vector`]: an `f64` coordinate pair with arithmetic (`+`, `-`, scalar and
  dot-product `*`, unary `-`), rotation, angles, projection, reflection,
  scaling and truncation.
- Tolerance-based comparison ([`Vector::isclose`], [`Tolerance`]).
- Conversion of vector-likes ([`VectorLike`], [`Value`], [`Arguments`]):
  pairs, two-element sequences, and `{"x", "y"}` mappings.
- Vector subtypes ([`VectorType`], [`vector_ops!`]) whose extra fields
  survive arithmetic.

Design notes:
- Values never change after construction; every operation returns a new one.
- Angles are degrees, positive counter-clockwise.
- Rotation rebuilds the smaller of `cos`/`sin` from the larger so that
  `cos² + sin² = 1` and repeated rotation preserves length.
- Transcendentals go through `libm` for platform-stable results.

```
use echo_vec2::Vector;

let v = Vector::new(1.0, 0.0) + (0.0, 1.0);
assert_eq!(v, Vector::new(1.0, 1.0));
assert_eq!(Vector::new(45.0, 60.0).length(), 75.0);
assert!(Vector::UNIT_X.rotate(90.0).isclose(Vector::UNIT_Y));
assert_eq!(Vector::UNIT_X.angle((0.0, 1.0)), 90.0);
```
"#]

/// Error type shared by all fallible operations.
pub mod error;
mod kind;
mod like;
mod ops;
#[cfg(feature = "serde")]
mod serde_support;
/// Approximate-comparison settings.
pub mod tolerance;
/// Degree-based trigonometry with `cos² + sin² = 1`.
pub mod trig;
mod vector;

pub use error::VectorError;
pub use kind::{precedence, promote, Promoted, Side, VectorType};
pub use like::{Arguments, Coordinate, Value, VectorLike};
pub use tolerance::Tolerance;
pub use vector::Vector;
