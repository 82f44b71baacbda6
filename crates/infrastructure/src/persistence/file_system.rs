//! Real file system implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use vellum_application::ports::{FileSystem, FileSystemError};

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn classify(path: &Path, error: std::io::Error) -> FileSystemError {
    match error.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        _ => FileSystemError::Io(error),
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| classify(path, e))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, contents)
            .await
            .map_err(|e| classify(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_dir())
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(path).await.map_err(|e| classify(path, e))?;

        while let Some(entry) = dir.next_entry().await? {
            entries.push(entry.path());
        }

        entries.sort(); // Deterministic ordering
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("users").join("create.vlm");
        let fs = TokioFileSystem::new();

        fs.write_file(&path, b"get {\n}\n").await.expect("write");

        assert!(fs.is_dir(&temp.path().join("users")).await);
        assert_eq!(
            fs.read_file_string(&path).await.expect("read"),
            "get {\n}\n"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp = TempDir::new().expect("temp dir");
        let result = TokioFileSystem::new()
            .read_file_string(&temp.path().join("absent.vlm"))
            .await;
        assert!(matches!(result, Err(FileSystemError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_dir_is_sorted() {
        let temp = TempDir::new().expect("temp dir");
        let fs = TokioFileSystem::new();
        for name in ["b.vlm", "a.vlm", "c.vlm"] {
            fs.write_file(&temp.path().join(name), b"").await.expect("write");
        }

        let entries = fs.read_dir(temp.path()).await.expect("list");
        let names: Vec<_> = entries
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["a.vlm", "b.vlm", "c.vlm"]);
        assert!(fs.exists(&temp.path().join("a.vlm")).await);
    }
}
