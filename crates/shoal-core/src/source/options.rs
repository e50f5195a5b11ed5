use crate::{
    source::relational::RelationalSource,
    types::{Cursor, PartitionToken, RawBatchIter},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Caller-supplied batch producer wrapped by the custom-callback adapter.
pub type BatchCallbackFn =
    Arc<dyn Fn(&PartitionToken, Option<&Cursor>) -> RawBatchIter + Send + Sync>;

///
/// RowShape
/// Row-shape hint passed through uninterpreted to the raw-query layer.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowShape {
    Tuples,
    Maps,
}

///
/// SourceOptions
///
/// Construction options consumed by the adapter factory. Fields irrelevant
/// to the chosen tag are ignored; required fields are validated at build
/// time with errors naming the violated requirement.
///

#[derive(Clone, Default)]
pub struct SourceOptions {
    /// Relational layer reference (required for `relational_bulk`).
    pub model: Option<Arc<dyn RelationalSource>>,
    /// Scope predicate, passed through uninterpreted.
    pub scope: Option<String>,
    pub batch_size: Option<usize>,
    pub use_transaction: bool,
    pub readonly: bool,

    /// Query text (required, non-empty, for `raw_query`).
    pub sql: Option<String>,
    pub binds: Vec<Value>,
    pub fetch_size: Option<usize>,
    pub row_shape: Option<RowShape>,
    pub statement_timeout_ms: Option<u64>,

    /// Fallback callable for `custom_callback` when no callback argument is
    /// supplied.
    pub callable: Option<BatchCallbackFn>,
}
