//! The schema-less response body.

use serde_json::Value;

/// The parsed body of the most recent successful upload.
///
/// No schema is assumed. The value is kept exactly as received and only ever
/// rendered as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct LastResponse(Value);

impl LastResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Pretty-print with two-space indentation.
    pub fn pretty(&self) -> String {
        // Serializing a `Value` to a String cannot fail: keys are always strings.
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for LastResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
