use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Navigation step failed: {0}")]
    NavigationStep(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
