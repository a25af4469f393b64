//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::GenerationRequestError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while requesting and normalizing generated questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("a generation request is already in flight")]
    Busy,
    #[error("invalid generation endpoint: {0}")]
    InvalidEndpoint(String),
    #[error(transparent)]
    InvalidRequest(#[from] GenerationRequestError),
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("generation response did not contain any questions")]
    UnrecognizedPayload,
}

/// Errors emitted by `ThemeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
