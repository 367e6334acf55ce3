//! Error types for generation.

use std::path::PathBuf;

use launchpad_spec::Flavor;
use thiserror::Error;

/// Result type alias for generation operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur during generation.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Output flavor not implemented: {0}")]
    UnsupportedFlavor(Flavor),

    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to back up directory {path:?}: {source}")]
    DirectoryBackup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid project template id {0:?}: must be a single path segment")]
    InvalidTemplateId(String),

    #[error("Formatter failed: {0}")]
    FormatterFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
