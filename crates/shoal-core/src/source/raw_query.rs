use crate::{
    source::options::RowShape,
    types::{Cursor, PartitionToken, RawBatchIter},
};
use serde_json::Value;
use std::sync::Arc;

///
/// RawQuerySpec
/// Options passed through uninterpreted to the raw-query execution layer.
///

#[derive(Clone, Debug)]
pub struct RawQuerySpec {
    pub sql: String,
    pub binds: Vec<Value>,
    pub fetch_size: Option<usize>,
    pub row_shape: Option<RowShape>,
    pub statement_timeout_ms: Option<u64>,
}

///
/// QueryExecutor
///
/// Boundary into the raw-query execution layer. Injected into the adapter
/// factory once, like a connection pool; the pipeline never interprets the
/// spec it forwards.
///

pub trait QueryExecutor: Send + Sync {
    /// Stream raw batches for one partition, resuming from `cursor` when
    /// supplied. Must not materialize batches eagerly.
    fn each_batch(
        &self,
        spec: &RawQuerySpec,
        partition: &PartitionToken,
        cursor: Option<&Cursor>,
    ) -> RawBatchIter;
}

///
/// RawQueryAdapter
///

pub struct RawQueryAdapter {
    executor: Arc<dyn QueryExecutor>,
    spec: RawQuerySpec,
}

impl RawQueryAdapter {
    pub(crate) const fn new(executor: Arc<dyn QueryExecutor>, spec: RawQuerySpec) -> Self {
        Self { executor, spec }
    }

    #[must_use]
    pub const fn spec(&self) -> &RawQuerySpec {
        &self.spec
    }

    pub fn each_batch(&self, partition: &PartitionToken, cursor: Option<&Cursor>) -> RawBatchIter {
        self.executor.each_batch(&self.spec, partition, cursor)
    }
}
