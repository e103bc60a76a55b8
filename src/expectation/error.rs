//! Errors produced while reading probability tokens.

use thiserror::Error;

/// Why a token could not be turned into a probability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a decimal, fraction (`n/m`) or odds (`n:m`).
    #[error("unrecognized probability `{0}`")]
    Unrecognized(String),
    /// A fraction or odds whose denominator is zero, e.g. `1/0` or `0:0`.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

/// Why the trial-count formula has no answer for the given inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// `1 - p` or `1 - c` is zero or negative, so its logarithm is undefined.
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLog(f64),
    /// `ln(1 - p)` is zero, i.e. the event never happens.
    #[error("event probability is zero")]
    ZeroBase,
    /// The result is NaN or infinite.
    #[error("trial count is not finite")]
    NonFinite,
}
