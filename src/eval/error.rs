//! Error taxonomy for evaluation requests.

use thiserror::Error;

/// Errors surfaced to the user when an evaluation cannot produce a result.
///
/// All three are non-fatal: they become a transient status-line message
/// and leave the expression buffer untouched so the user can correct and
/// retry. Values cross the worker channel, hence `Clone`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Evaluate was requested on an empty buffer. Local validation only;
    /// no request is sent.
    #[error("Nothing to evaluate")]
    EmptyInput,

    /// The service was unreachable or answered with a failure status.
    #[error("{0}")]
    Transport(String),

    /// The service answered successfully but supplied no usable value.
    #[error("No result returned")]
    NoResult,
}

impl EvalError {
    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::EmptyInput => "empty_input",
            EvalError::Transport(_) => "transport",
            EvalError::NoResult => "no_result",
        }
    }
}
