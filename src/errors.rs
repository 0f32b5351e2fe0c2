use thiserror::Error;

// * Unified error type for configuration loading and the inspector binary.
// * The engine entry points themselves never fail.
#[derive(Error, Debug)]
pub enum IntelError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IntelError>;
