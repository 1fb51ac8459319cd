//! Error types for engine operations.

use thiserror::Error;

/// Errors surfaced by lookups and session calls. None of them are fatal:
/// the failing call has no effect and the engine stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown variable key '{key}' for definition '{definition_id}'")]
    UnknownVariableKey { definition_id: String, key: String },

    #[error("Definition not found: {id}")]
    NotFound { id: String },

    #[error("No simulation selected")]
    NoSelection,
}

pub type EngineResult<T> = Result<T, EngineError>;
