use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorklistError {
    // Input errors
    #[error("MISSING_INPUT_FILE: {} not found", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("READ_ERROR: failed to read {}: {reason}", path.display())]
    ReadError { path: PathBuf, reason: String },

    #[error("PARSE_ERROR: {0}")]
    ParseError(String),

    // Output errors
    #[error("WRITE_ERROR: failed to write {}: {reason}", path.display())]
    WriteError { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for WorklistError {
    fn from(err: serde_json::Error) -> Self {
        WorklistError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WorklistError>;
