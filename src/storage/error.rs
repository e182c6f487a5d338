use thiserror::Error;

/// Failures surfaced by the draft store. Callers convert each variant into a
/// single notification; nothing propagates past the triggering action.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no saved draft found")]
    NotFound,
    #[error("saved draft is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
