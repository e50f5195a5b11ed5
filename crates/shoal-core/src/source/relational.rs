use crate::types::{Cursor, PartitionToken, RawBatchIter};
use std::sync::Arc;

///
/// RelationalSpec
/// Options passed through uninterpreted to the relational mapping layer.
///

#[derive(Clone, Debug, Default)]
pub struct RelationalSpec {
    pub scope: Option<String>,
    pub batch_size: Option<usize>,
    pub use_transaction: bool,
    pub readonly: bool,
}

///
/// RelationalSource
///
/// Boundary into the relational mapping layer. Implementations own query
/// construction, batching, and transaction handling; the pipeline treats
/// the spec as opaque configuration.
///

pub trait RelationalSource: Send + Sync {
    /// Stream raw batches for one partition, resuming from `cursor` when
    /// supplied. Must not materialize batches eagerly.
    fn each_batch(
        &self,
        spec: &RelationalSpec,
        partition: &PartitionToken,
        cursor: Option<&Cursor>,
    ) -> RawBatchIter;
}

///
/// RelationalBulkAdapter
///

pub struct RelationalBulkAdapter {
    model: Arc<dyn RelationalSource>,
    spec: RelationalSpec,
}

impl RelationalBulkAdapter {
    pub(crate) const fn new(model: Arc<dyn RelationalSource>, spec: RelationalSpec) -> Self {
        Self { model, spec }
    }

    #[must_use]
    pub const fn spec(&self) -> &RelationalSpec {
        &self.spec
    }

    pub fn each_batch(&self, partition: &PartitionToken, cursor: Option<&Cursor>) -> RawBatchIter {
        self.model.each_batch(&self.spec, partition, cursor)
    }
}
