//! Output envelope returned to the invoking host.

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::claims::Claims;

/// Basic request metadata copied from the inbound event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = require_all_properties)]
pub struct RequestInfo {
    #[schemars(description = "HTTP method of the request, null when the event has none")]
    pub method: Option<String>,
    #[schemars(description = "Resource path of the request, null when the event has none")]
    pub path: Option<String>,
    #[schemars(description = "Request headers as delivered by the gateway")]
    pub headers: Map<String, Value>,
}

impl RequestInfo {
    /// Case-insensitive header lookup. Non-string header values are skipped.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .find_map(|(_, v)| v.as_str())
    }
}

// `method` and `path` serialize as null rather than being skipped, so every
// key is present in the output.
fn require_all_properties(schema: &mut Schema) {
    if let Some(obj) = schema.as_object_mut() {
        let keys: Vec<Value> = obj
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().cloned().map(Value::String).collect())
            .unwrap_or_default();
        obj.insert("required".to_string(), Value::Array(keys));
    }
}

/// `{claims, requestInfo}` derived from a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputEnvelope {
    #[schemars(description = "Authorizer claims, passed through unchanged")]
    pub claims: Claims,
    #[schemars(description = "Method, path and headers of the request")]
    pub request_info: RequestInfo,
}
