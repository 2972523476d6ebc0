use blueprint_core::{ParamError, UploadError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("a conversion is already running")]
    Busy,
    #[error(transparent)]
    InvalidParameters(#[from] ParamError),
    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),
    #[error("failed to start conversion: {0}")]
    Runtime(String),
}
