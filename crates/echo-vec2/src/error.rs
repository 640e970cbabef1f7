// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for vector construction and geometry.

use thiserror::Error;

/// Failures reported by [`crate::Vector`] construction and operations.
///
/// Every variant carries enough context to identify the offending operand.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Wrong number or shape of construction arguments.
    #[error("arity error: {reason}")]
    Arity {
        /// What was wrong with the argument list.
        reason: String,
    },
    /// Positional and keyword construction arguments were mixed.
    #[error("got a mix of {positional} positional and {keywords} keyword arguments")]
    ArgumentConflict {
        /// Number of positional arguments supplied.
        positional: usize,
        /// Number of keyword arguments supplied.
        keywords: usize,
    },
    /// Value cannot be interpreted as a two-component coordinate source.
    #[error("cannot use {reason} as a vector-like")]
    InvalidVectorLike {
        /// Description of the rejected value.
        reason: String,
    },
    /// A coordinate value has no conversion to `f64`.
    #[error("{value} is not convertible to a float")]
    NotConvertible {
        /// Description of the rejected coordinate.
        value: String,
    },
    /// Division by zero, including scaling a zero-length vector to a nonzero length.
    #[error("division by zero")]
    DivisionByZero,
    /// Negative target length passed to a scaling operation.
    #[error("scale_to takes non-negative lengths, got {length}")]
    InvalidLength {
        /// The rejected length.
        length: f64,
    },
    /// Negative tolerance passed to an approximate comparison.
    #[error("isclose takes non-negative tolerances, got abs_tol={abs_tol}, rel_tol={rel_tol}")]
    InvalidTolerance {
        /// Absolute tolerance supplied.
        abs_tol: f64,
        /// Relative tolerance supplied.
        rel_tol: f64,
    },
    /// Reflection normal is not unit length.
    #[error("reflection requires a normalized surface normal, got length {length}")]
    NotNormalized {
        /// Length of the rejected normal.
        length: f64,
    },
    /// Positional access outside `0..2`.
    #[error("index {index} out of range for a 2D vector")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Keyed access with a key other than `x` or `y`.
    #[error("key {key:?} not found, expected \"x\" or \"y\"")]
    KeyNotFound {
        /// The rejected key.
        key: String,
    },
}
