use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashError {
    #[error("Flash type {0} not found")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, FlashError>;
