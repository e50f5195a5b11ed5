//! Directive compilation and compiled partition plans.
//!
//! Models declare partitioning directives; the [`DirectiveCompiler`] resolves
//! them into one immutable [`CompiledPartitionPlan`] per model, memoized for
//! process lifetime. Batch fetch is lazy and validated while yielding.

pub mod compile;
pub mod fetch;

pub use compile::DirectiveCompiler;
pub use fetch::ValidatedBatchIter;

use crate::{
    error::PipelineError,
    model::descriptor::PartitionDirectives,
    obs::{self, PipelineEvent},
    types::{Batch, PartitionToken},
};

///
/// CompiledPartitionPlan
///
/// Immutable per-model execution plan: partition enumeration, lazy validated
/// batch fetch, and before/after hooks. Hooks are validated by their
/// function signatures at compile time and never re-checked.
///

pub struct CompiledPartitionPlan {
    model: &'static str,
    directives: PartitionDirectives,
}

impl CompiledPartitionPlan {
    pub(crate) const fn new(model: &'static str, directives: PartitionDirectives) -> Self {
        Self { model, directives }
    }

    /// Model name this plan was compiled for.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        self.model
    }

    /// Enumerate partition tokens in producer order.
    ///
    /// A plan without a partitions producer yields an empty sequence; this
    /// never fails. Distinct from an absent plan (no directives at all).
    #[must_use]
    pub fn partitions(&self) -> Vec<PartitionToken> {
        self.directives
            .partitions
            .as_ref()
            .map_or_else(Vec::new, |producer| producer())
    }

    #[must_use]
    pub const fn has_partition_fetch(&self) -> bool {
        self.directives.partition_fetch.is_some()
    }

    /// Return the lazy validated batch enumeration for one partition.
    ///
    /// Fails with a contract error when no fetch directive is configured.
    /// Each element is validated immediately before being yielded, so
    /// validation and consumption interleave with at most one batch of
    /// lookahead.
    pub fn partition_fetch_enum(
        &self,
        partition: &PartitionToken,
    ) -> Result<ValidatedBatchIter, PipelineError> {
        let fetch = self.directives.partition_fetch.as_ref().ok_or_else(|| {
            PipelineError::contract(format!(
                "partition fetch requested for model '{}' but no partition_fetch directive is configured",
                self.model
            ))
        })?;

        Ok(ValidatedBatchIter::new(fetch(partition)))
    }

    /// Invoke the before-partition hook; absent hook is a no-op.
    pub fn before_hook(&self, partition: &PartitionToken) -> Result<(), PipelineError> {
        match &self.directives.before_partition {
            Some(hook) => hook(partition),
            None => Ok(()),
        }
    }

    /// Invoke the after-partition hook; absent hook is a no-op.
    pub fn after_hook(&self, partition: &PartitionToken) -> Result<(), PipelineError> {
        match &self.directives.after_partition {
            Some(hook) => hook(partition),
            None => Ok(()),
        }
    }

    /// Drive one partition end to end.
    ///
    /// The before-hook completes before the first batch is fetched; the
    /// after-hook runs only once the batch sequence is exhausted. Any hook,
    /// validation, or consumer failure propagates immediately and terminates
    /// this partition's loop; continuation policy belongs to the caller.
    /// Returns the number of batches consumed.
    pub fn run_partition(
        &self,
        partition: &PartitionToken,
        mut consumer: impl FnMut(Batch) -> Result<(), PipelineError>,
    ) -> Result<u64, PipelineError> {
        obs::record(&PipelineEvent::PartitionStarted { model: self.model });

        self.before_hook(partition)?;

        let mut batches = 0u64;
        for batch in self.partition_fetch_enum(partition)? {
            consumer(batch?)?;
            batches += 1;
        }

        self.after_hook(partition)?;

        obs::record(&PipelineEvent::PartitionFinished {
            model: self.model,
            batches,
        });
        Ok(batches)
    }
}
