//! JSON-RPC messages exchanged with the launcher.
//!
//! The launcher starts the plugin with one JSON argument such as
//! `{"method": "query", "parameters": ["1/6 0.95"]}` and reads
//! `{"result": [{"Title": ..., "IcoPath": ...}]}` back from stdout.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::WhenToExpect;
use crate::items::ResultItem;

/// Errors raised while handling a launcher request.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("malformed request: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("query parameter must be a string, got {0}")]
    NonStringQuery(Value),
}

/// A request sent by the launcher.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

/// The response written back to the launcher.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RpcResponse {
    pub result: Vec<ResultItem>,
}

impl WhenToExpect {
    /// Dispatch a parsed request.
    ///
    /// Methods other than `query` get an empty result list.
    pub fn dispatch(&self, request: &RpcRequest) -> Result<RpcResponse, RpcError> {
        let result = match request.method.as_str() {
            "query" => {
                let query = match request.parameters.first() {
                    None => "",
                    Some(Value::String(query)) => query.as_str(),
                    Some(other) => return Err(RpcError::NonStringQuery(other.clone())),
                };
                self.query(query)
            }
            method => {
                warn!(method, "ignoring unsupported method");
                Vec::new()
            }
        };
        Ok(RpcResponse { result })
    }

    /// Handle a raw JSON request and produce the JSON response.
    pub fn handle_request(&self, raw: &str) -> Result<String, RpcError> {
        let request: RpcRequest = serde_json::from_str(raw).map_err(RpcError::Malformed)?;
        debug!(?request, "received request");
        let response = self.dispatch(&request)?;
        serde_json::to_string(&response).map_err(RpcError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_round_trip() {
        let plugin = WhenToExpect::default();
        let raw = json!({ "method": "query", "parameters": ["0.5"] }).to_string();

        let response: Value = serde_json::from_str(&plugin.handle_request(&raw).unwrap()).unwrap();
        assert_eq!(
            response,
            json!({
                "result": [{
                    "Title": "Event is expected with a probability of 50.0 % after 1 try.",
                    "IcoPath": "icon/expect.png"
                }]
            })
        );
    }

    #[test]
    fn test_missing_parameters_is_empty_query() {
        let plugin = WhenToExpect::default();
        let request = RpcRequest {
            method: "query".to_string(),
            parameters: Vec::new(),
        };
        let response = plugin.dispatch(&request).unwrap();
        assert_eq!(response.result, plugin.query(""));
    }

    #[test]
    fn test_unknown_method_returns_no_items() {
        let plugin = WhenToExpect::default();
        let raw = r#"{"method": "context_menu", "parameters": [{}]}"#;
        assert_eq!(plugin.handle_request(raw).unwrap(), r#"{"result":[]}"#);
    }

    #[test]
    fn test_non_string_query_rejected() {
        let plugin = WhenToExpect::default();
        let raw = r#"{"method": "query", "parameters": [42]}"#;
        assert!(matches!(
            plugin.handle_request(raw),
            Err(RpcError::NonStringQuery(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let plugin = WhenToExpect::default();
        assert!(matches!(
            plugin.handle_request("{not json"),
            Err(RpcError::Malformed(_))
        ));
    }

    #[test]
    fn test_encode_failure_is_not_reported_as_bad_request() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = RpcError::Encode(source);
        assert!(err.to_string().starts_with("failed to encode response"));
    }
}
