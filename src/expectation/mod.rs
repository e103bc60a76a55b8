//! Expectation module for "how many tries until it happens" queries.
//!
//! This module provides functionality to:
//! - Parse probabilities given as decimals, fractions or odds
//! - Compute the number of trials needed for a target confidence
//! - Format the outcome as a human-readable sentence

mod error;
mod evaluation;
mod parsing;

pub use error::{DomainError, ParseError};
pub use evaluation::{
    DEFAULT_CONFIDENCE, Expectation, INVALID_INPUT, PROMPT, TOO_MANY_INPUTS, evaluate_query,
    expected_trials,
};
pub use parsing::{parse, parse_probability};
