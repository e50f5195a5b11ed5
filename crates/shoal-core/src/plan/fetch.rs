use crate::{
    error::PipelineError,
    types::{Batch, RawBatchIter, value_shape},
};
use serde_json::Value;

///
/// ValidatedBatchIter
///
/// Pull-based validate-while-yielding enumeration over a raw producer.
/// Each element is checked immediately before being yielded, so validation
/// and consumption interleave with at most one batch buffered ahead. The
/// first offending element yields an `InvalidParams` error naming its
/// zero-based index and observed shape; the iterator fuses afterwards.
///

pub struct ValidatedBatchIter {
    inner: RawBatchIter,
    index: usize,
    failed: bool,
}

impl ValidatedBatchIter {
    pub(crate) fn new(inner: RawBatchIter) -> Self {
        Self {
            inner,
            index: 0,
            failed: false,
        }
    }
}

impl Iterator for ValidatedBatchIter {
    type Item = Result<Batch, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let element = self.inner.next()?;
        let index = self.index;
        self.index += 1;

        match element {
            // Array-like to array is the only permitted coercion.
            Value::Array(records) => Some(Ok(records)),
            other => {
                self.failed = true;
                Some(Err(PipelineError::invalid_params(format!(
                    "partition_fetch result element at index {index} is not array-like: found {}",
                    value_shape(&other)
                ))))
            }
        }
    }
}
