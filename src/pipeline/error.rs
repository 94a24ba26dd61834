//! Error types for the ingestion pipeline.

use thiserror::Error;

use crate::models::ModelError;
use crate::registry::RegistryError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Internal lock error")]
    LockPoisoned,

    #[error("No tokio runtime available to schedule analysis")]
    NoRuntime,

    #[error("Session has been shut down")]
    SessionClosed,
}

/// Reasons an upload is refused by validated ingestion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("File name is empty")]
    EmptyName,

    #[error("File is empty")]
    EmptyFile,

    #[error("File too large: {size_mb:.1}MB exceeds {max_mb}MB limit")]
    FileTooLarge { size_mb: f64, max_mb: u64 },

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
}

/// Terminal failure of a single upload. Surfaced on the document as `failed`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
