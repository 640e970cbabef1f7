// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tolerance settings for approximate vector comparison.

use tracing::debug;

use crate::error::VectorError;

/// Absolute and relative tolerances used by [`crate::Vector::isclose_with`].
///
/// Two vectors are close when the length of their difference is within
/// `abs_tol`, **or** within `rel_tol` times the largest reference length.
/// The two tests are independent; near-zero vectors are typically compared
/// through `abs_tol` alone.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerance {
    /// Difference length under which inputs are close regardless of magnitude.
    pub abs_tol: f64,
    /// Fraction of the largest reference length under which inputs are close.
    pub rel_tol: f64,
}

impl Tolerance {
    /// `abs_tol = 1e-9`, `rel_tol = 1e-9`.
    pub const DEFAULT: Self = Self {
        abs_tol: 1e-9,
        rel_tol: 1e-9,
    };

    /// Creates a tolerance, rejecting negative values.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, VectorError> {
        Self { abs_tol, rel_tol }.validated()
    }

    /// Replaces the absolute tolerance.
    pub fn with_abs_tol(self, abs_tol: f64) -> Self {
        Self { abs_tol, ..self }
    }

    /// Replaces the relative tolerance.
    pub fn with_rel_tol(self, rel_tol: f64) -> Self {
        Self { rel_tol, ..self }
    }

    /// Returns `self` if both tolerances are non-negative.
    pub fn validated(self) -> Result<Self, VectorError> {
        if self.abs_tol < 0.0 || self.rel_tol < 0.0 {
            debug!(
                abs_tol = self.abs_tol,
                rel_tol = self.rel_tol,
                "rejected negative tolerance"
            );
            return Err(VectorError::InvalidTolerance {
                abs_tol: self.abs_tol,
                rel_tol: self.rel_tol,
            });
        }
        Ok(self)
    }

    /// Applies the two-term rule to a difference length and reference length.
    pub(crate) fn accepts(&self, diff: f64, reference: f64) -> bool {
        diff <= self.rel_tol * reference || diff <= self.abs_tol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
