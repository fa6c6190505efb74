use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file is not valid UTF-8: {}", .0.display())]
    Encoding(PathBuf),

    #[error("Section '{heading}' at line {line} has no body")]
    MissingSectionBody { heading: String, line: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
