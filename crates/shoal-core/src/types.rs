//! Opaque pipeline value types.
//!
//! This module owns the opaque token formats passed between the plan layer,
//! the source adapters, and the update executor. It intentionally contains
//! no validation or naming semantics beyond token rendering.

use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered sequence of record representations fetched together for indexing.
///
/// No homogeneity is assumed beyond "array-like"; records are opaque JSON
/// values owned by the caller's serializer.
pub type Batch = Vec<Value>;

/// Lazy producer output consumed by the plan layer.
///
/// Each element is expected to be array-like; validation happens on pull,
/// never at construction.
pub type RawBatchIter = Box<dyn Iterator<Item = Value>>;

///
/// PartitionToken
///
/// Opaque unit-of-work label produced by a model's partitions producer.
/// Passed unchanged to hooks and fetch; no structure is assumed.
///

#[derive(Clone, Debug, Deref, Deserialize, From, PartialEq, Serialize)]
pub struct PartitionToken(Value);

impl PartitionToken {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Render the token for collection naming.
    ///
    /// Strings render verbatim, other scalars via their display form, and
    /// compound values as compact JSON.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => other.to_string(),
        }
    }
}

///
/// Cursor
///
/// Opaque, adapter-specific resumption token enabling partial-run
/// continuation. The pipeline never inspects its contents.
///

#[derive(Clone, Debug, Deref, Deserialize, From, PartialEq, Serialize)]
pub struct Cursor(Value);

impl Cursor {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Human-readable JSON shape name used in validation diagnostics.
#[must_use]
pub const fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_renders_strings_verbatim() {
        assert_eq!(PartitionToken::new("eu_west").label(), "eu_west");
    }

    #[test]
    fn label_renders_scalars_via_display() {
        assert_eq!(PartitionToken::new(42).label(), "42");
        assert_eq!(PartitionToken::new(true).label(), "true");
    }

    #[test]
    fn label_renders_compound_values_as_compact_json() {
        let token = PartitionToken::new(json!({"region": "eu", "shard": 3}));
        assert_eq!(token.label(), r#"{"region":"eu","shard":3}"#);
    }

    #[test]
    fn value_shape_names_every_json_shape() {
        assert_eq!(value_shape(&json!(null)), "null");
        assert_eq!(value_shape(&json!(false)), "boolean");
        assert_eq!(value_shape(&json!(1.5)), "number");
        assert_eq!(value_shape(&json!("bad")), "string");
        assert_eq!(value_shape(&json!([1, 2])), "array");
        assert_eq!(value_shape(&json!({})), "object");
    }

    #[test]
    fn cursor_round_trips_through_serde() {
        let cursor = Cursor::new(json!({"offset": 1000}));
        let encoded = serde_json::to_string(&cursor).expect("cursor should encode");
        let decoded: Cursor = serde_json::from_str(&encoded).expect("cursor should decode");
        assert_eq!(decoded, cursor);
    }
}
