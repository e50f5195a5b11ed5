//! Core runtime for Shoal: model descriptors, compiled partition plans,
//! lazy source adapters, and the bulk update/delete executor.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod client;
pub mod collection;
pub mod error;
pub mod filter;
pub mod model;
pub mod obs;
pub mod plan;
pub mod source;
pub mod types;
pub mod update;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, clients, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{ModelDescriptor, ModelRegistry, PartitionDirectives},
        plan::{CompiledPartitionPlan, DirectiveCompiler},
        source::{SourceAdapter, SourceOptions, SourceTag},
        types::{Batch, Cursor, PartitionToken},
    };
}
