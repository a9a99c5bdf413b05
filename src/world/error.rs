//! Error types for level loading.

use thiserror::Error;

/// Errors that can occur when loading level data.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// A record did not have the `<type> <x> <y>` shape. Parsing stops here.
    #[error("Malformed record on line {line}: '{content}'")]
    MalformedRecord { line: usize, content: String },
}
