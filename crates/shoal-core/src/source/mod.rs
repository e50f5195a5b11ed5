//! Source adapters: uniform lazy batch producers over heterogeneous data
//! sources.
//!
//! The factory dispatches a type tag plus options (or a callback) to one of
//! three adapter variants. All variants share one contract: construction
//! never fetches, and `each_batch(partition, cursor)` returns a lazy
//! iterator the caller pulls. Adapters are built fresh per indexing
//! invocation and never cached.

pub mod callback;
pub mod options;
pub mod raw_query;
pub mod relational;

pub use callback::CallbackAdapter;
pub use options::{BatchCallbackFn, RowShape, SourceOptions};
pub use raw_query::{QueryExecutor, RawQueryAdapter, RawQuerySpec};
pub use relational::{RelationalBulkAdapter, RelationalSource, RelationalSpec};

use crate::{
    error::PipelineError,
    types::{Cursor, PartitionToken, RawBatchIter},
};
use std::{fmt, sync::Arc};

///
/// SourceTag
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceTag {
    RelationalBulk,
    RawQuery,
    CustomCallback,
}

impl SourceTag {
    pub const SUPPORTED: [&'static str; 3] = ["relational_bulk", "raw_query", "custom_callback"];

    /// Parse a caller-supplied tag; unknown tags name the supported set.
    pub fn parse(tag: &str) -> Result<Self, PipelineError> {
        match tag {
            "relational_bulk" => Ok(Self::RelationalBulk),
            "raw_query" => Ok(Self::RawQuery),
            "custom_callback" => Ok(Self::CustomCallback),
            other => Err(PipelineError::invalid_params(format!(
                "unknown source tag '{other}': supported tags are {}",
                Self::SUPPORTED.join(", ")
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RelationalBulk => "relational_bulk",
            Self::RawQuery => "raw_query",
            Self::CustomCallback => "custom_callback",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// SourceAdapter
///
/// Polymorphic lazy batch producer. Every variant exposes the same
/// `each_batch(partition, cursor)` contract; `cursor` is an opaque,
/// adapter-specific resumption token enabling partial-run continuation.
///

pub enum SourceAdapter {
    RelationalBulk(RelationalBulkAdapter),
    RawQuery(RawQueryAdapter),
    CustomCallback(CallbackAdapter),
}

impl std::fmt::Debug for SourceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SourceAdapter").field(&self.tag()).finish()
    }
}

impl SourceAdapter {
    #[must_use]
    pub const fn tag(&self) -> SourceTag {
        match self {
            Self::RelationalBulk(_) => SourceTag::RelationalBulk,
            Self::RawQuery(_) => SourceTag::RawQuery,
            Self::CustomCallback(_) => SourceTag::CustomCallback,
        }
    }

    /// Stream batches for one partition. No batches are materialized until
    /// the returned iterator is pulled.
    pub fn each_batch(&self, partition: &PartitionToken, cursor: Option<&Cursor>) -> RawBatchIter {
        match self {
            Self::RelationalBulk(adapter) => adapter.each_batch(partition, cursor),
            Self::RawQuery(adapter) => adapter.each_batch(partition, cursor),
            Self::CustomCallback(adapter) => adapter.each_batch(partition, cursor),
        }
    }
}

///
/// SourceAdapterFactory
///
/// Dispatches a type tag + options (or callback) to one of the three
/// adapter variants. The raw-query execution layer is injected once at
/// factory construction; the relational layer is referenced per build via
/// `options.model`.
///

#[derive(Default)]
pub struct SourceAdapterFactory {
    query_executor: Option<Arc<dyn QueryExecutor>>,
}

impl SourceAdapterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query_executor(executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            query_executor: Some(executor),
        }
    }

    /// Build an adapter for `tag`. Construction validates required options
    /// and performs no fetching.
    pub fn build(
        &self,
        tag: &str,
        options: SourceOptions,
        callback: Option<BatchCallbackFn>,
    ) -> Result<SourceAdapter, PipelineError> {
        match SourceTag::parse(tag)? {
            SourceTag::RelationalBulk => {
                let model = options.model.ok_or_else(|| {
                    PipelineError::invalid_params(
                        "relational_bulk source requires options.model to reference the relational layer",
                    )
                })?;
                let spec = RelationalSpec {
                    scope: options.scope,
                    batch_size: options.batch_size,
                    use_transaction: options.use_transaction,
                    readonly: options.readonly,
                };
                Ok(SourceAdapter::RelationalBulk(RelationalBulkAdapter::new(
                    model, spec,
                )))
            }
            SourceTag::RawQuery => {
                let sql = options
                    .sql
                    .filter(|sql| !sql.trim().is_empty())
                    .ok_or_else(|| {
                        PipelineError::invalid_params(
                            "raw_query source requires options.sql to be a non-empty string",
                        )
                    })?;
                let executor = self.query_executor.clone().ok_or_else(|| {
                    PipelineError::invalid_params(
                        "raw_query source requires a query executor on the adapter factory",
                    )
                })?;
                let spec = RawQuerySpec {
                    sql,
                    binds: options.binds,
                    fetch_size: options.fetch_size,
                    row_shape: options.row_shape,
                    statement_timeout_ms: options.statement_timeout_ms,
                };
                Ok(SourceAdapter::RawQuery(RawQueryAdapter::new(executor, spec)))
            }
            SourceTag::CustomCallback => {
                let callback = callback.or(options.callable).ok_or_else(|| {
                    PipelineError::invalid_params(
                        "custom_callback source requires a callback argument or options.callable",
                    )
                })?;
                Ok(SourceAdapter::CustomCallback(CallbackAdapter::new(callback)))
            }
        }
    }
}
