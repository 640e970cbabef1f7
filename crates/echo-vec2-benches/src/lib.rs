// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared operands for the `echo-vec2` microbenchmarks.
//!
//! Every benchmark runs against the same fixed inputs so that results are
//! comparable across operations and across runs.

use echo_vec2::Vector;

/// Left operand for binary operations and the input to unary ones.
pub const X: Vector = Vector::new(1.0, 1.0);

/// Right operand for binary operations; unit length so it is a valid normal.
pub const Y: Vector = Vector::new(0.0, 1.0);

/// Scalar operand (lengths, angles, factors).
pub const LAMBDA: f64 = 123.0;
