//! Filter compilation for bulk update/delete operations.
//!
//! Callers supply either a raw filter string in the store's native syntax or
//! a field→value map that compiles to it. Both absent is rejected so an
//! unintentional collection-wide update/delete is impossible.

use crate::error::PipelineError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Compile caller filter inputs into the store's wire filter syntax.
///
/// A non-empty filter string wins verbatim. Otherwise a non-empty field map
/// compiles to `field:=value` clauses joined by ` && `, in deterministic
/// field order. Array values compile to `field:=[v1,v2]` membership clauses.
pub fn build_filter(
    filter: Option<&str>,
    fields: Option<&BTreeMap<String, Value>>,
) -> Result<String, PipelineError> {
    if let Some(raw) = filter {
        if !raw.trim().is_empty() {
            return Ok(raw.to_string());
        }
    }

    if let Some(map) = fields {
        if !map.is_empty() {
            let clauses: Vec<String> = map
                .iter()
                .map(|(field, value)| render_clause(field, value))
                .collect();
            return Ok(clauses.join(" && "));
        }
    }

    Err(PipelineError::invalid_params(
        "filter is required: provide a non-empty filter string or field map",
    ))
}

fn render_clause(field: &str, value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("{field}:=[{}]", rendered.join(","))
        }
        other => format!("{field}:={}", render_value(other)),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
