use crate::{
    error::PipelineError,
    plan::CompiledPartitionPlan,
    types::{PartitionToken, RawBatchIter},
};
use std::sync::{Arc, OnceLock};

/// Produces the partition tokens an indexing run iterates. Invoked with no
/// arguments; order is preserved as yielded.
pub type PartitionsFn = Arc<dyn Fn() -> Vec<PartitionToken> + Send + Sync>;

/// Produces the raw batch sequence for one partition. The result is pulled
/// lazily and validated element by element.
pub type PartitionFetchFn = Arc<dyn Fn(&PartitionToken) -> RawBatchIter + Send + Sync>;

/// Before/after partition hook. Accepts the partition token and nothing
/// more; the signature is the compile-time replacement for runtime arity
/// validation.
pub type PartitionHookFn = Arc<dyn Fn(&PartitionToken) -> Result<(), PipelineError> + Send + Sync>;

///
/// PartitionDirectives
///
/// Up to four optional callables attached to a model descriptor at
/// declaration time. All slots are independent; an empty set is
/// distinguishable from a set with only some slots filled.
///

#[derive(Clone, Default)]
pub struct PartitionDirectives {
    pub partitions: Option<PartitionsFn>,
    pub partition_fetch: Option<PartitionFetchFn>,
    pub before_partition: Option<PartitionHookFn>,
    pub after_partition: Option<PartitionHookFn>,
}

impl PartitionDirectives {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when none of the four directive slots is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_none()
            && self.partition_fetch.is_none()
            && self.before_partition.is_none()
            && self.after_partition.is_none()
    }

    #[must_use]
    pub fn with_partitions(
        mut self,
        producer: impl Fn() -> Vec<PartitionToken> + Send + Sync + 'static,
    ) -> Self {
        self.partitions = Some(Arc::new(producer));
        self
    }

    #[must_use]
    pub fn with_partition_fetch(
        mut self,
        producer: impl Fn(&PartitionToken) -> RawBatchIter + Send + Sync + 'static,
    ) -> Self {
        self.partition_fetch = Some(Arc::new(producer));
        self
    }

    #[must_use]
    pub fn with_before_partition(
        mut self,
        hook: impl Fn(&PartitionToken) -> Result<(), PipelineError> + Send + Sync + 'static,
    ) -> Self {
        self.before_partition = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn with_after_partition(
        mut self,
        hook: impl Fn(&PartitionToken) -> Result<(), PipelineError> + Send + Sync + 'static,
    ) -> Self {
        self.after_partition = Some(Arc::new(hook));
        self
    }
}

///
/// ModelDescriptor
///
/// Explicit per-model-type metadata: stable model name, base collection
/// name, declared partitioning directives, and the memoized plan slot.
/// Directives are captured at construction and never mutated afterwards.
///

pub struct ModelDescriptor {
    name: &'static str,
    collection: &'static str,
    directives: PartitionDirectives,
    plan: OnceLock<Arc<CompiledPartitionPlan>>,
}

impl std::fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("name", &self.name)
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl ModelDescriptor {
    #[must_use]
    pub fn new(
        name: &'static str,
        collection: &'static str,
        directives: PartitionDirectives,
    ) -> Self {
        Self {
            name,
            collection,
            directives,
            plan: OnceLock::new(),
        }
    }

    /// Stable model name used in diagnostics and obs events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Base collection name shared by indexing and bulk updates.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        self.collection
    }

    #[must_use]
    pub const fn directives(&self) -> &PartitionDirectives {
        &self.directives
    }

    /// Memoized plan slot. Written once by the directive compiler; the
    /// single atomic write makes concurrent first-build races harmless.
    pub(crate) const fn plan_slot(&self) -> &OnceLock<Arc<CompiledPartitionPlan>> {
        &self.plan
    }
}
