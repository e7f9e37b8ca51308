use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::net::AddrParseError> for BookshelfError {
    fn from(err: std::net::AddrParseError) -> Self {
        BookshelfError::InvalidRequest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
