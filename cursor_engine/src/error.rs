//! Engine error types

use thiserror::Error;

/// Errors surfaced by engine control operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `start` was called while a run is active or paused
    #[error("engine is already running")]
    AlreadyRunning,
}
