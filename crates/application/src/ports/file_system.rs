//! File system port.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a [`FileSystem`].
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// The path does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Access to the path was refused.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Asynchronous access to files and directories.
pub trait FileSystem: Send + Sync {
    /// Reads a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::NotFound`] for a missing file.
    fn read_file_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, FileSystemError>> + Send;

    /// Writes a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    fn write_file(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> impl Future<Output = Result<(), FileSystemError>> + Send;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Lists the entries of a directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::NotFound`] for a missing directory.
    fn read_dir(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<PathBuf>, FileSystemError>> + Send;
}
