//! Error types for the spec module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading evaluated state.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("State file not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Invalid state format in file {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("Unknown output flavor: {0}")]
    UnknownFlavor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
