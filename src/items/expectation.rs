//! Result items built from expectation outcomes.

use super::{DEFAULT_ICON, ResultItem};
use crate::expectation::Expectation;

impl ResultItem {
    /// Create a result item from an expectation outcome.
    pub fn from_expectation(outcome: &Expectation, ico_path: &str) -> Self {
        Self::new(outcome.title(), ico_path)
    }
}

impl From<Expectation> for ResultItem {
    fn from(outcome: Expectation) -> Self {
        Self::from_expectation(&outcome, DEFAULT_ICON)
    }
}
