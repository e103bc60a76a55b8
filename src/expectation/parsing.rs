//! Probability parsing for expectation queries.
//!
//! Accepts plain decimals (`0.05`), fractions (`1/20`) and odds in favor
//! (`1:19`). Patterns are matched from the start of the token only, so any
//! trailing text after a fraction or odds pair is ignored.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::error::ParseError;

lazy_static! {
    /// Matches `numerator/denominator` with non-negative decimal parts.
    static ref FRACTION: Regex = Regex::new(
        r"^(\d+(?:\.\d+)?)/(\d+(?:\.\d+)?)"
    ).unwrap();

    /// Matches odds in favor, `a:b`, with non-negative decimal parts.
    static ref ODDS: Regex = Regex::new(
        r"^(\d+(?:\.\d+)?):(\d+(?:\.\d+)?)"
    ).unwrap();
}

/// Parse a token into a probability.
///
/// No bounds are enforced: `1`, `0` and values outside `[0, 1]` are
/// returned as-is and left to the calculator.
pub fn parse_probability(token: &str) -> Result<f64, ParseError> {
    if let Ok(value) = token.parse::<f64>() {
        return Ok(value);
    }

    if let Some(caps) = FRACTION.captures(token) {
        let (numerator, denominator) = captured_pair(token, &caps)?;
        if denominator == 0.0 {
            return Err(ParseError::ZeroDenominator(token.to_string()));
        }
        return Ok(numerator / denominator);
    }

    if let Some(caps) = ODDS.captures(token) {
        let (favorable, unfavorable) = captured_pair(token, &caps)?;
        let total = favorable + unfavorable;
        if total == 0.0 {
            return Err(ParseError::ZeroDenominator(token.to_string()));
        }
        return Ok(favorable / total);
    }

    Err(ParseError::Unrecognized(token.to_string()))
}

/// Parse a token, falling back to `0.0` when it is not a probability.
///
/// `0.0` is also a legitimate probability, so callers that need to tell the
/// two apart should use [`parse_probability`].
pub fn parse(token: &str) -> f64 {
    parse_probability(token).unwrap_or_else(|err| {
        debug!(%err, "falling back to zero probability");
        0.0
    })
}

/// Read both numeric groups of a fraction or odds match.
fn captured_pair(token: &str, caps: &Captures<'_>) -> Result<(f64, f64), ParseError> {
    let number = |idx: usize| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(|| ParseError::Unrecognized(token.to_string()))
    };
    Ok((number(1)?, number(2)?))
}
