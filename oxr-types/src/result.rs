//! The normalized result returned by every data call.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which failures carry the upstream error body.
pub const ERROR_KEY: &str = "error";

/// Decoded JSON returned to callers.
///
/// On success this is the upstream body verbatim. On failure it is
/// `{"error": <decoded error body or null>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResult(Value);

impl ApiResult {
    pub fn success(body: Value) -> Self {
        Self(body)
    }

    /// Wraps an error body; `None` becomes `null`.
    pub fn failure(body: Option<Value>) -> Self {
        let mut map = Map::with_capacity(1);
        map.insert(ERROR_KEY.to_string(), body.unwrap_or(Value::Null));
        Self(Value::Object(map))
    }

    /// True when the top-level value is a mapping with an `"error"` key.
    pub fn is_error(&self) -> bool {
        self.0
            .as_object()
            .is_some_and(|map| map.contains_key(ERROR_KEY))
    }

    /// The error body, if this is an error result.
    pub fn error(&self) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(ERROR_KEY))
    }

}

impl From<Result<Value, Option<Value>>> for ApiResult {
    fn from(outcome: Result<Value, Option<Value>>) -> Self {
        match outcome {
            Ok(body) => ApiResult::success(body),
            Err(body) => ApiResult::failure(body),
        }
    }
}

impl PartialEq<Value> for ApiResult {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

impl Index<&str> for ApiResult {
    type Output = Value;

    /// Returns `Value::Null` for missing keys, like `serde_json::Value`.
    fn index(&self, key: &str) -> &Value {
        &self.0[key]
    }
}
