use std::cmp::Ordering;

use thiserror::Error;

use crate::equation::Evaluation;

/// Reasons a starting interval cannot be used as a false-position bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints must differ")]
    ZeroWidth,

    #[error("residuals at the bracket endpoints have the same sign")]
    NoSignChange,
}

/// A bracket endpoint and the residual evaluated there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub x: f64,
    pub residual: f64,
}

impl<I, O> From<&Evaluation<I, O>> for Endpoint {
    fn from(eval: &Evaluation<I, O>) -> Self {
        Self {
            x: eval.x,
            residual: eval.residual,
        }
    }
}

/// Current bracket endpoints with residuals of opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Endpoint,
    right: Endpoint,
}

impl Bracket {
    /// Pairs two evaluated endpoints, which must straddle a sign change.
    pub(super) fn new(left: Endpoint, right: Endpoint) -> Result<Self, BracketError> {
        if same_side(left.residual, right.residual) {
            Err(BracketError::NoSignChange)
        } else {
            Ok(Self { left, right })
        }
    }

    /// Endpoint positions as `[left, right]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> Endpoint {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> Endpoint {
        self.right
    }

    /// Returns true if the endpoint residuals have opposite signs.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.left.residual * self.right.residual < 0.0
    }

    /// Returns where the chord between the endpoints crosses zero.
    #[must_use]
    pub fn chord_root(&self) -> f64 {
        let Endpoint { x: x0, residual: f0 } = self.left;
        let Endpoint { x: x1, residual: f1 } = self.right;
        x1 - f1 * (x1 - x0) / (f1 - f0)
    }

    /// Replaces the endpoint whose residual shares the new point's sign.
    pub(super) fn shrink(&mut self, point: Endpoint) {
        if same_side(self.left.residual, point.residual) {
            self.left = point;
        } else {
            self.right = point;
        }
    }
}

/// Sign comparison that treats zero as positive.
fn same_side(a: f64, b: f64) -> bool {
    (a < 0.0) == (b < 0.0)
}

/// Checks a user-supplied interval and sorts it as `[left, right]`.
pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
    match (a.is_finite() && b.is_finite(), a.partial_cmp(&b)) {
        (false, _) => Err(BracketError::NonFinite),
        (true, Some(Ordering::Less)) => Ok([a, b]),
        (true, Some(Ordering::Greater)) => Ok([b, a]),
        (true, _) => Err(BracketError::ZeroWidth),
    }
}
