//! Observability: pipeline event capture and sink abstractions.
//!
//! Core pipeline logic never formats or stores telemetry directly; all
//! instrumentation flows through [`PipelineEvent`] and [`EventSink`].

pub(crate) mod sink;

pub use sink::{EventSink, PipelineEvent, with_event_sink};

pub(crate) use sink::record;
