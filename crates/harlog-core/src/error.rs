use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HAR file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse HAR document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write HAR document: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
