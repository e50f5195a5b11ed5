//! Bulk update/delete execution.
//!
//! The executor orchestrates filter compilation, collection resolution, and
//! exactly one remote call per operation. No retries happen here; the
//! caller's timeout override passes through unchanged.

use crate::{
    client::{AttributeMap, DocumentClient},
    collection::resolve_into,
    error::PipelineError,
    filter::build_filter,
    model::descriptor::ModelDescriptor,
    obs::{self, PipelineEvent},
    types::PartitionToken,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Updated-count key spellings observed across store versions.
const UPDATED_COUNT_KEYS: [&str; 4] = [
    "num_updated",
    "numUpdated",
    "num_docs_updated",
    "updated_count",
];

/// Deleted-count key spellings observed across store versions.
const DELETED_COUNT_KEYS: [&str; 4] = [
    "num_deleted",
    "numDeleted",
    "num_docs_deleted",
    "deleted_count",
];

///
/// UpdateByRequest
///

#[derive(Clone, Default)]
pub struct UpdateByRequest {
    /// Attributes applied to every matching document; must be non-empty.
    pub attributes: AttributeMap,
    /// Raw filter in the store's native syntax; wins when non-empty.
    pub filter: Option<String>,
    /// Field→value map compiled to wire syntax when no raw filter is given.
    pub filter_fields: Option<BTreeMap<String, Value>>,
    /// Explicit target collection override.
    pub into: Option<String>,
    /// Partition whose physical collection the operation targets.
    pub partition: Option<PartitionToken>,
    /// Per-call timeout override forwarded to the client.
    pub timeout_ms: Option<u64>,
}

///
/// DeleteByRequest
///

#[derive(Clone, Default)]
pub struct DeleteByRequest {
    pub filter: Option<String>,
    pub filter_fields: Option<BTreeMap<String, Value>>,
    pub into: Option<String>,
    pub partition: Option<PartitionToken>,
    pub timeout_ms: Option<u64>,
}

///
/// UpdateExecutor
///

pub struct UpdateExecutor<'a> {
    client: &'a dyn DocumentClient,
}

impl<'a> UpdateExecutor<'a> {
    #[must_use]
    pub const fn new(client: &'a dyn DocumentClient) -> Self {
        Self { client }
    }

    /// Apply `request.attributes` to every document matching the compiled
    /// filter. Fails fast before any remote call when the attribute mapping
    /// is empty; returns the updated-document count reported by the store.
    pub fn update_by(
        &self,
        model: &ModelDescriptor,
        request: &UpdateByRequest,
    ) -> Result<u64, PipelineError> {
        if request.attributes.is_empty() {
            return Err(PipelineError::invalid_params(
                "update_by requires a non-empty attributes mapping: refusing to send an empty update",
            ));
        }

        let filter_by = build_filter(request.filter.as_deref(), request.filter_fields.as_ref())?;
        let collection = resolve_into(model, request.partition.as_ref(), request.into.as_deref());

        let response = self.client.update_documents_by_filter(
            &collection,
            &filter_by,
            &request.attributes,
            request.timeout_ms,
        )?;
        let documents = count_from(&response, &UPDATED_COUNT_KEYS);

        obs::record(&PipelineEvent::UpdateIssued {
            collection: &collection,
            documents,
        });
        Ok(documents)
    }

    /// Delete every document matching the compiled filter. Shares the filter
    /// and collection-resolution path with `update_by`.
    pub fn delete_by(
        &self,
        model: &ModelDescriptor,
        request: &DeleteByRequest,
    ) -> Result<u64, PipelineError> {
        let filter_by = build_filter(request.filter.as_deref(), request.filter_fields.as_ref())?;
        let collection = resolve_into(model, request.partition.as_ref(), request.into.as_deref());

        let response =
            self.client
                .delete_documents_by_filter(&collection, &filter_by, request.timeout_ms)?;
        let documents = count_from(&response, &DELETED_COUNT_KEYS);

        obs::record(&PipelineEvent::DeleteIssued {
            collection: &collection,
            documents,
        });
        Ok(documents)
    }
}

/// Extract an affected-document count from a store response, tolerating
/// several key spellings. Missing or non-numeric counts default to zero.
fn count_from(response: &Value, keys: &[&str]) -> u64 {
    keys.iter()
        .find_map(|key| response.get(key).and_then(Value::as_u64))
        .unwrap_or(0)
}
