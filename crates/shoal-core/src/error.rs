use std::fmt;
use thiserror::Error as ThisError;

///
/// PipelineError
///
/// Structured runtime error with a stable caller-facing classification.
/// `InvalidParams` covers caller-supplied shape/semantics violations,
/// `Contract` covers programmer misuse of the pipeline surface, and
/// `Remote` wraps opaque transport-layer failures.
///

#[derive(Clone, Debug, ThisError)]
#[error("{message}")]
pub struct PipelineError {
    pub class: ErrorClass,
    pub message: String,
}

impl PipelineError {
    /// Construct a classified pipeline error.
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    /// Construct a caller-contract violation (bad shapes, missing required
    /// options, empty/ambiguous filters, unknown tags).
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidParams, message)
    }

    /// Construct a programmer-contract violation (e.g. fetch requested with
    /// no fetch directive configured).
    pub fn contract(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Contract, message)
    }

    /// Construct a remote-transport failure.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Remote, message)
    }

    #[must_use]
    pub const fn is_invalid_params(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidParams)
    }

    #[must_use]
    pub const fn is_contract(&self) -> bool {
        matches!(self.class, ErrorClass::Contract)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {}", self.class, self.message)
    }
}

///
/// ErrorClass
/// Caller-facing error taxonomy used uniformly across the compiler, the
/// adapter factory, and the filter layer.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidParams,
    Contract,
    Remote,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidParams => "invalid_params",
            Self::Contract => "contract",
            Self::Remote => "remote",
        };
        write!(f, "{label}")
    }
}
