//! Runtime model metadata.
//!
//! Models declare their partitioning directives on an explicit
//! [`ModelDescriptor`] at declaration time; the descriptor also memoizes the
//! compiled partition plan. The [`ModelRegistry`] is the explicit side-table
//! keyed by type identity that replaces hidden per-type directive storage.

pub mod descriptor;
pub mod registry;

pub use descriptor::{
    ModelDescriptor, PartitionDirectives, PartitionFetchFn, PartitionHookFn, PartitionsFn,
};
pub use registry::{ModelRegistry, ModelRegistryError};
