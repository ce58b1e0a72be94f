// Wed Jan 21 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("rendered JSON is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
