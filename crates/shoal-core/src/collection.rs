//! Physical collection naming.
//!
//! Indexing and bulk updates share one deterministic naming scheme, so an
//! update always targets the collection the latest indexing run wrote.

use crate::{model::descriptor::ModelDescriptor, types::PartitionToken};

/// Derive the physical collection name for a model, optionally scoped to a
/// partition.
#[must_use]
pub fn collection_for(model: &ModelDescriptor, partition: Option<&PartitionToken>) -> String {
    match partition {
        Some(token) => format!("{}_{}", model.collection(), token.label()),
        None => model.collection().to_string(),
    }
}

/// Resolve the collection a bulk update/delete targets.
///
/// A non-blank explicit override wins; otherwise the shared naming scheme
/// applies.
#[must_use]
pub fn resolve_into(
    model: &ModelDescriptor,
    partition: Option<&PartitionToken>,
    explicit: Option<&str>,
) -> String {
    match explicit {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => collection_for(model, partition),
    }
}
