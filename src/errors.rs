use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage write failure: {0}")]
    StorageWriteFailure(String),
}

pub type AppResult<T> = Result<T, AppError>;
