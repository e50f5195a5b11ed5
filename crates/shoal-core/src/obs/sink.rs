//! Event sink boundary.
//!
//! The default sink is a no-op; tests and embedding hosts install a scoped
//! override via [`with_event_sink`]. The override is thread-local and is
//! restored on every exit path, including unwind.

use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn EventSink>>> = const { RefCell::new(None) };
}

///
/// PipelineEvent
///

#[derive(Clone, Copy, Debug)]
pub enum PipelineEvent<'a> {
    PlanCompiled {
        model: &'a str,
    },
    PartitionStarted {
        model: &'a str,
    },
    PartitionFinished {
        model: &'a str,
        batches: u64,
    },
    UpdateIssued {
        collection: &'a str,
        documents: u64,
    },
    DeleteIssued {
        collection: &'a str,
        documents: u64,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &PipelineEvent<'_>);
}

/// Record an event against the installed sink, if any.
///
/// The sink handle is cloned out of the slot before dispatch so a sink may
/// itself emit events without re-entrant borrows.
pub(crate) fn record(event: &PipelineEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    if let Some(sink) = sink {
        sink.record(event);
    }
}

/// Run a closure with a temporary event sink override.
pub fn with_event_sink<T>(sink: Rc<dyn EventSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn EventSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
