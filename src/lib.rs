//! Expected number of tries for an event to happen, as a launcher plugin.
//!
//! Give a probability (`0.05`, `1/20`) or odds (`1:19`) and optionally a
//! confidence level, and get back how many independent tries it takes for
//! the event to have happened at least once with that confidence.

pub mod config;
pub mod expectation;
pub mod items;
pub mod plugin;

pub use config::PluginConfig;
pub use expectation::{Expectation, ParseError, evaluate_query, parse, parse_probability};
pub use items::ResultItem;
pub use plugin::{WhenToExpect, compute};
