//! Launcher plugin adapter.
//!
//! Turns a raw query into the single result item the launcher displays,
//! and speaks the launcher's JSON-RPC protocol.

mod rpc;

pub use rpc::{RpcError, RpcRequest, RpcResponse};

use crate::config::PluginConfig;
use crate::expectation::evaluate_query;
use crate::items::ResultItem;

/// Evaluate a query using the default icon.
///
/// Always returns exactly one item.
pub fn compute(query: &str) -> Vec<ResultItem> {
    vec![evaluate_query(query).into()]
}

/// The plugin, holding its presentation settings.
#[derive(Clone, Debug, Default)]
pub struct WhenToExpect {
    config: PluginConfig,
}

impl WhenToExpect {
    /// Create the plugin with resolved settings.
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Evaluate a query; always returns exactly one item.
    pub fn query(&self, query: &str) -> Vec<ResultItem> {
        let outcome = evaluate_query(query);
        vec![ResultItem::from_expectation(&outcome, &self.config.icon_path)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::{INVALID_INPUT, PROMPT, TOO_MANY_INPUTS};

    #[test]
    fn test_compute_returns_one_item() {
        for query in ["", "0.5", "1/6 0.95", "1 2 3", "1 0.5", "garbage"] {
            assert_eq!(compute(query).len(), 1, "{query}");
        }
    }

    #[test]
    fn test_compute_titles() {
        assert_eq!(compute("")[0].title, PROMPT);
        assert_eq!(compute("1 2 3")[0].title, TOO_MANY_INPUTS);
        assert_eq!(compute("1 0.5")[0].title, INVALID_INPUT);

        let dice = &compute("1/6 0.95")[0].title;
        assert!(dice.contains("after 17 "), "{dice}");
        assert!(dice.contains("95.0 %"), "{dice}");
    }

    #[test]
    fn test_configured_icon() {
        let plugin = WhenToExpect::new(PluginConfig {
            icon_path: "icon/dice.png".to_string(),
        });
        let items = plugin.query("0.5");
        assert_eq!(items[0].ico_path, "icon/dice.png");
        assert_eq!(items[0].title, compute("0.5")[0].title);
    }

    #[test]
    fn test_compute_uses_default_icon() {
        assert_eq!(compute("1/6 0.95")[0].ico_path, crate::items::DEFAULT_ICON);
    }

    #[test]
    fn test_query_is_idempotent() {
        let plugin = WhenToExpect::default();
        assert_eq!(plugin.query("1:19 0.99"), plugin.query("1:19 0.99"));
    }
}
