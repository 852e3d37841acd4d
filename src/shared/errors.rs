use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Remote bookmark store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Bookmark operation attempted without a signed-in identity")]
    Unauthenticated,

    #[error("Sign out failed: {0}")]
    SignOutFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
