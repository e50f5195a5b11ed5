use crate::{
    source::options::BatchCallbackFn,
    types::{Cursor, PartitionToken, RawBatchIter},
};

///
/// CallbackAdapter
///
/// Wraps a caller-supplied callback under the shared lazy-fetch contract.
/// The callback is invoked once per `each_batch` call and owns its own
/// cursor semantics.
///

pub struct CallbackAdapter {
    callback: BatchCallbackFn,
}

impl CallbackAdapter {
    pub(crate) const fn new(callback: BatchCallbackFn) -> Self {
        Self { callback }
    }

    pub fn each_batch(&self, partition: &PartitionToken, cursor: Option<&Cursor>) -> RawBatchIter {
        (self.callback)(partition, cursor)
    }
}
