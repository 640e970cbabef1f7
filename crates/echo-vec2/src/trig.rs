// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Degree-based trigonometry for planar rotation.
//!
//! Rotating by independently evaluated `cos`/`sin` values lets `cos² + sin²`
//! drift away from 1, so a vector rotated repeatedly slowly changes length.
//! [`cos_sin_deg`] evaluates both, keeps the one with the larger magnitude,
//! and rebuilds the smaller one from the Pythagorean identity:
//! - `|cos| > |sin|`: `sin = ±√(1 - cos²)` (sign of the evaluated `sin`)
//! - otherwise: `cos = ±√(1 - sin²)` (sign of the evaluated `cos`)
//!
//! Transcendentals go through `libm` so results do not depend on the host's
//! system math library.

use core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(value: f64) -> f64 {
    value * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(value: f64) -> f64 {
    value * (180.0 / PI)
}

/// Returns `(cos, sin)` of `angle` degrees with `cos² + sin²` pinned to 1.
pub fn cos_sin_deg(angle: f64) -> (f64, f64) {
    let r = deg_to_rad(angle);
    let (mut c, mut s) = (libm::cos(r), libm::sin(r));

    if c.abs() > s.abs() {
        s = (1.0 - c * c).sqrt().copysign(s);
    } else {
        c = (1.0 - s * s).sqrt().copysign(c);
    }

    (c, s)
}

/// Folds a degree value into `(-180, 180]`.
///
/// Only a single turn is added or removed; callers pass differences of two
/// `atan2` results, which already lie within `(-360, 360)`.
pub(crate) fn fold_half_turn(degrees: f64) -> f64 {
    if degrees <= -180.0 {
        degrees + 360.0
    } else if degrees > 180.0 {
        degrees - 360.0
    } else {
        degrees
    }
}
