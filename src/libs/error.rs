use thiserror::Error;

/// Failure reading or writing the tasks file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tasks file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid task records: {0}")]
    InvalidRecords(String),
}
