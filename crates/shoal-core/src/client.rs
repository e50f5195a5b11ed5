//! Remote document-store boundary.

use crate::error::PipelineError;
use serde_json::{Map, Value};

/// Attribute mapping applied by a bulk update.
pub type AttributeMap = Map<String, Value>;

///
/// DocumentClient
///
/// Remote document-store client. Transport internals, retries, and the wire
/// protocol are owned by implementations; failures surface as Remote-class
/// errors. Responses may carry the affected-document count under one of
/// several key spellings; the update executor tolerates all of them.
///

pub trait DocumentClient {
    /// Apply `fields` to every document matching `filter_by` in
    /// `collection`, honoring the caller-supplied timeout override.
    fn update_documents_by_filter(
        &self,
        collection: &str,
        filter_by: &str,
        fields: &AttributeMap,
        timeout_ms: Option<u64>,
    ) -> Result<Value, PipelineError>;

    /// Delete every document matching `filter_by` in `collection`.
    fn delete_documents_by_filter(
        &self,
        collection: &str,
        filter_by: &str,
        timeout_ms: Option<u64>,
    ) -> Result<Value, PipelineError>;
}
