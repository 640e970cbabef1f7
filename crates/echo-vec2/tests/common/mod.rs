// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared strategies and helpers for integration tests.
#![allow(dead_code)]

use echo_vec2::Vector;
use proptest::prelude::*;

/// Largest coordinate magnitude produced by [`vectors`].
pub const MAX_MAGNITUDE: f64 = 1e75;

/// Finite floats with `|f| <= max`.
pub fn floats(max: f64) -> impl Strategy<Value = f64> {
    -max..=max
}

/// Vectors with both coordinates within `±MAX_MAGNITUDE`.
pub fn vectors() -> impl Strategy<Value = Vector> {
    vectors_within(MAX_MAGNITUDE)
}

/// Vectors with both coordinates within `±max`.
pub fn vectors_within(max: f64) -> impl Strategy<Value = Vector> {
    (floats(max), floats(max)).prop_map(|(x, y)| Vector::new(x, y))
}

/// Unit vectors at arbitrary angles.
pub fn units() -> impl Strategy<Value = Vector> {
    angles().prop_map(|a| Vector::UNIT_X.rotate(a))
}

/// Angles in degrees within `±360`.
pub fn angles() -> impl Strategy<Value = f64> {
    -360.0..=360.0_f64
}

/// Non-negative lengths up to `max`.
pub fn lengths(max: f64) -> impl Strategy<Value = f64> {
    0.0..=max
}

/// Compares angles modulo 360 degrees.
pub fn angle_isclose(x: f64, y: f64, epsilon: f64) -> bool {
    angle_isclose_modulo(x, y, epsilon, 360.0)
}

/// Compares angles modulo `modulus` degrees.
pub fn angle_isclose_modulo(x: f64, y: f64, epsilon: f64, modulus: f64) -> bool {
    let d = (x - y).rem_euclid(modulus);
    d < epsilon || d > modulus - epsilon
}

/// Scalar analogue of the default vector comparison.
pub fn isclose(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    let diff = (a - b).abs();
    diff <= rel_tol * a.abs().max(b.abs()) || diff <= abs_tol
}
