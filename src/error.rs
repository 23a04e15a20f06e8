use thiserror::Error;

/// Convenience result type for the crate's fallible operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Error type for the crate's fallible surfaces.
///
/// [`crate::processing::collect()`] itself never returns an error: absent or
/// empty inputs degrade to an empty record, and unresolved back-references
/// fall back to defaults. Errors arise only from JSON interchange and typed
/// value extraction.
#[derive(Debug, Error)]
pub enum CollectError {
    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A [`crate::types::Value`] did not hold the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },
}
