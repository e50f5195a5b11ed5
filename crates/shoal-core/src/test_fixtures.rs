//! Shared stubs for executor and adapter tests.

use crate::{
    client::{AttributeMap, DocumentClient},
    error::PipelineError,
    source::{QueryExecutor, RawQuerySpec, RelationalSource, RelationalSpec},
    types::{Cursor, PartitionToken, RawBatchIter},
};
use serde_json::Value;
use std::{
    cell::RefCell,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

///
/// RecordedCall
/// One remote call captured by the recording client. `fields` is empty for
/// deletes.
///

pub(crate) struct RecordedCall {
    pub collection: String,
    pub filter_by: String,
    pub fields: AttributeMap,
    pub timeout_ms: Option<u64>,
}

///
/// RecordingClient
///

pub(crate) struct RecordingClient {
    pub update_calls: RefCell<Vec<RecordedCall>>,
    pub delete_calls: RefCell<Vec<RecordedCall>>,
    response: Result<Value, PipelineError>,
}

impl RecordingClient {
    pub fn returning(response: Value) -> Self {
        Self {
            update_calls: RefCell::new(Vec::new()),
            delete_calls: RefCell::new(Vec::new()),
            response: Ok(response),
        }
    }

    pub fn failing_with(err: PipelineError) -> Self {
        Self {
            update_calls: RefCell::new(Vec::new()),
            delete_calls: RefCell::new(Vec::new()),
            response: Err(err),
        }
    }
}

impl DocumentClient for RecordingClient {
    fn update_documents_by_filter(
        &self,
        collection: &str,
        filter_by: &str,
        fields: &AttributeMap,
        timeout_ms: Option<u64>,
    ) -> Result<Value, PipelineError> {
        self.update_calls.borrow_mut().push(RecordedCall {
            collection: collection.to_string(),
            filter_by: filter_by.to_string(),
            fields: fields.clone(),
            timeout_ms,
        });
        self.response.clone()
    }

    fn delete_documents_by_filter(
        &self,
        collection: &str,
        filter_by: &str,
        timeout_ms: Option<u64>,
    ) -> Result<Value, PipelineError> {
        self.delete_calls.borrow_mut().push(RecordedCall {
            collection: collection.to_string(),
            filter_by: filter_by.to_string(),
            fields: AttributeMap::new(),
            timeout_ms,
        });
        self.response.clone()
    }
}

///
/// CountingRelationalSource
/// Records how often and with what spec/cursor it was invoked; streams a
/// fixed batch sequence.
///

pub(crate) struct CountingRelationalSource {
    batches: Vec<Value>,
    pub calls: AtomicUsize,
    pub last_spec: Mutex<Option<RelationalSpec>>,
    pub last_cursor: Mutex<Option<Cursor>>,
}

impl CountingRelationalSource {
    pub fn with_batches(batches: Vec<Value>) -> Self {
        Self {
            batches,
            calls: AtomicUsize::new(0),
            last_spec: Mutex::new(None),
            last_cursor: Mutex::new(None),
        }
    }
}

impl RelationalSource for CountingRelationalSource {
    fn each_batch(
        &self,
        spec: &RelationalSpec,
        _partition: &PartitionToken,
        cursor: Option<&Cursor>,
    ) -> RawBatchIter {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_spec
            .lock()
            .expect("test mutex should not be poisoned") = Some(spec.clone());
        *self
            .last_cursor
            .lock()
            .expect("test mutex should not be poisoned") = cursor.cloned();
        Box::new(self.batches.clone().into_iter())
    }
}

///
/// CountingQueryExecutor
///

pub(crate) struct CountingQueryExecutor {
    batches: Vec<Value>,
    pub calls: AtomicUsize,
    pub last_spec: Mutex<Option<RawQuerySpec>>,
    pub last_cursor: Mutex<Option<Cursor>>,
}

impl CountingQueryExecutor {
    pub fn with_batches(batches: Vec<Value>) -> Self {
        Self {
            batches,
            calls: AtomicUsize::new(0),
            last_spec: Mutex::new(None),
            last_cursor: Mutex::new(None),
        }
    }
}

impl QueryExecutor for CountingQueryExecutor {
    fn each_batch(
        &self,
        spec: &RawQuerySpec,
        _partition: &PartitionToken,
        cursor: Option<&Cursor>,
    ) -> RawBatchIter {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_spec
            .lock()
            .expect("test mutex should not be poisoned") = Some(spec.clone());
        *self
            .last_cursor
            .lock()
            .expect("test mutex should not be poisoned") = cursor.cloned();
        Box::new(self.batches.clone().into_iter())
    }
}
