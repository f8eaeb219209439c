use thiserror::Error;

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport failure (connection refused, DNS, ...) surfaced as-is.
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    /// Non-2xx reply. The body is never read.
    #[error("Ollama API error: {status} {status_text}")]
    ApiError { status: u16, status_text: String },

    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OllamaError {
    pub fn status(&self) -> Option<u16> {
        match self {
            OllamaError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OllamaError>;
