//! Handler failure types

use thiserror::Error;

/// Errors a step handler may raise
///
/// These are reserved for genuinely broken situations — a parameter the
/// handler cannot make sense of, or a collaborator it cannot reach.
/// Expected outcomes (dead ends, bad incoming directions) are expressed
/// as actions, not errors. The engine converts any `StepError` into a
/// fizzle; handlers never terminate the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    /// A parameter value is outside the shape the handler accepts
    #[error("invalid parameter '{key}': {detail}")]
    InvalidParam { key: String, detail: String },

    /// A collaborator the handler depends on is missing
    #[error("missing dependency: {0}")]
    MissingDependency(String),
}

impl StepError {
    /// Convenience constructor for parameter errors
    pub fn invalid_param(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidParam {
            key: key.into(),
            detail: detail.into(),
        }
    }
}
