use crate::{
    model::descriptor::ModelDescriptor,
    obs::{self, PipelineEvent},
    plan::CompiledPartitionPlan,
};
use std::sync::Arc;

///
/// DirectiveCompiler
///
/// Resolves and memoizes a validated plan per model descriptor. Compilation
/// is pure and idempotent; the memoized slot is written with a single atomic
/// `OnceLock` initialization, so concurrent first-access races cost at most
/// duplicate construction work and never corruption.
///

pub struct DirectiveCompiler;

impl DirectiveCompiler {
    /// Resolve the compiled plan for a model.
    ///
    /// Returns `None` exactly when none of the four directive slots is set.
    /// A model with directives but no partitions producer still gets a plan;
    /// its `partitions()` is simply empty. The two cases stay distinct.
    #[must_use]
    pub fn for_model(model: &ModelDescriptor) -> Option<Arc<CompiledPartitionPlan>> {
        if model.directives().is_empty() {
            return None;
        }

        let plan = model.plan_slot().get_or_init(|| {
            obs::record(&PipelineEvent::PlanCompiled {
                model: model.name(),
            });
            Arc::new(CompiledPartitionPlan::new(
                model.name(),
                model.directives().clone(),
            ))
        });

        Some(Arc::clone(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::descriptor::PartitionDirectives;

    #[test]
    fn model_without_directives_has_no_plan() {
        let model = ModelDescriptor::new("Product", "products", PartitionDirectives::new());
        assert!(DirectiveCompiler::for_model(&model).is_none());
    }

    #[test]
    fn repeated_resolution_returns_the_identical_cached_plan() {
        let model = ModelDescriptor::new(
            "Product",
            "products",
            PartitionDirectives::new().with_partitions(Vec::new),
        );

        let first = DirectiveCompiler::for_model(&model).expect("directives should yield a plan");
        let second = DirectiveCompiler::for_model(&model).expect("directives should yield a plan");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn directives_without_partitions_producer_still_compile() {
        // Distinct from "no directives declared": the plan exists but its
        // partition enumeration is empty.
        let model = ModelDescriptor::new(
            "Product",
            "products",
            PartitionDirectives::new().with_before_partition(|_| Ok(())),
        );

        let plan = DirectiveCompiler::for_model(&model).expect("hook-only directives should compile");
        assert!(plan.partitions().is_empty());
        assert!(!plan.has_partition_fetch());
    }
}
