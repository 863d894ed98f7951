//! Core Errors
//!
//! Error type shared by the store, the persistence bridge and the context accessor.

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A serialized action carried a `type` this store does not know.
    #[error("unknown action kind: {0:?}")]
    UnknownAction(String),

    /// A serialized action of a known kind had no `type` tag or a bad payload.
    #[error("malformed action: {0}")]
    MalformedAction(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    /// Process-wide state was requested outside the scope that provides it.
    #[error("{0} is only available inside {1}")]
    MissingContext(&'static str, &'static str),
}
