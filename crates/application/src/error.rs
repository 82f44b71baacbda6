//! Application error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::{CodecError, FileSystemError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Reading or writing a file failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// Parsing or serializing a document failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A directory was expected.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
