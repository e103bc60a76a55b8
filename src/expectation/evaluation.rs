//! Expected-trials evaluation and formatting.
//!
//! The number of trials `n` needed for an event with probability `p` to
//! occur at least once with confidence `c` is the smallest `n` with
//! `1 - (1 - p)^n >= c`, i.e. `ln(1 - c) / ln(1 - p)`.

use tracing::debug;

use super::error::DomainError;
use super::parsing::parse_probability;

/// Confidence used when the query only names a probability.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Instructional text shown for an empty query.
pub const PROMPT: &str = "Enter a probability (n/m) or odds (n:m) and optionally how sure \
                          you want to be that it occurs (default: 0.5)!";

/// Shown when the query has more than two tokens.
pub const TOO_MANY_INPUTS: &str = "Too many inputs!";

/// Shown when a token is unreadable or the formula has no answer.
pub const INVALID_INPUT: &str = "Invalid input(s)!";

/// Outcome of evaluating one query.
#[derive(Clone, Debug, PartialEq)]
pub enum Expectation {
    /// Empty query; ask the user for input.
    Prompt,
    /// More than a probability and a confidence were given.
    TooManyInputs,
    /// A token could not be parsed or the formula is undefined.
    Invalid,
    /// The trial count was computed.
    Success {
        /// Requested confidence level.
        confidence: f64,
        /// Trial count rounded to two decimals.
        trials_precise: f64,
        /// Whole number of trials to report.
        trials: f64,
    },
}

impl Expectation {
    /// The sentence shown to the user.
    pub fn title(&self) -> String {
        match self {
            Self::Prompt => PROMPT.to_string(),
            Self::TooManyInputs => TOO_MANY_INPUTS.to_string(),
            Self::Invalid => INVALID_INPUT.to_string(),
            Self::Success {
                confidence,
                trials_precise,
                trials,
            } => {
                let trials_text = format_number(*trials);
                let precise_text = format_number(*trials_precise);
                let precise = if precise_text != trials_text {
                    format!(" ({})", precise_text)
                } else {
                    String::new()
                };
                let tries = if *trials_precise == 1.0 { "try" } else { "tries" };

                format!(
                    "Event is expected with a probability of {} % after {}{} {}.",
                    format_percentage(*confidence),
                    trials_text,
                    precise,
                    tries
                )
            }
        }
    }
}

/// Evaluate a raw query of the form `p [c]`.
pub fn evaluate_query(query: &str) -> Expectation {
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let outcome = match tokens[..] {
        [] => Expectation::Prompt,
        [probability] => evaluate_tokens(probability, None),
        [probability, confidence] => evaluate_tokens(probability, Some(confidence)),
        _ => Expectation::TooManyInputs,
    };

    debug!(query, ?outcome, "evaluated expectation query");
    outcome
}

fn evaluate_tokens(probability: &str, confidence: Option<&str>) -> Expectation {
    let probability = match parse_probability(probability) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "unusable probability");
            return Expectation::Invalid;
        }
    };
    let confidence = match confidence.map(parse_probability) {
        None => DEFAULT_CONFIDENCE,
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            debug!(%err, "unusable confidence");
            return Expectation::Invalid;
        }
    };

    match expected_trials(probability, confidence) {
        Ok(trials_precise) => Expectation::Success {
            confidence,
            trials_precise,
            trials: normalize_zero(trials_precise.ceil()),
        },
        Err(err) => {
            debug!(%err, probability, confidence, "no trial count");
            Expectation::Invalid
        }
    }
}

/// Number of trials, rounded to two decimals, for an event of probability
/// `probability` to have happened with confidence `confidence`.
pub fn expected_trials(probability: f64, confidence: f64) -> Result<f64, DomainError> {
    let miss = 1.0 - probability;
    let remaining = 1.0 - confidence;

    if miss <= 0.0 {
        return Err(DomainError::NonPositiveLog(miss));
    }
    if remaining <= 0.0 {
        return Err(DomainError::NonPositiveLog(remaining));
    }

    let base = miss.ln();
    if base == 0.0 {
        return Err(DomainError::ZeroBase);
    }

    let trials = round_to_hundredths(remaining.ln() / base);
    if !trials.is_finite() {
        return Err(DomainError::NonFinite);
    }

    Ok(normalize_zero(trials))
}

/// Round to two decimals from the exact binary value, without the error
/// that scaling by 100 first would add.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Turn `-0.0` into `0.0` so it never prints with a sign.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Format a trial count: integral values without a fraction, others with
/// their shortest representation.
fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

/// Format a confidence as a percentage with up to two decimals, always
/// keeping one fractional digit (`95.0`, `33.33`).
fn format_percentage(confidence: f64) -> String {
    let percentage = round_to_hundredths(confidence * 100.0);
    if percentage.fract() == 0.0 && percentage.abs() < 1e16 {
        format!("{:.1}", percentage)
    } else {
        format!("{}", percentage)
    }
}
