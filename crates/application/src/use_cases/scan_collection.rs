//! Scan a collection directory.
//!
//! Layout:
//!
//! ```text
//! my-collection/
//! ├── collection.vlm        # collection root
//! ├── environments/
//! │   └── dev.vlm           # environment
//! ├── users/
//! │   ├── folder.vlm        # folder root
//! │   └── create-user.vlm   # request
//! └── ping.vlm              # request
//! ```

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::debug;
use vellum_domain::{CollectionRoot, Environment, RequestItem};

use crate::ports::{DocumentCodec, FileSystem};
use crate::{ApplicationError, ApplicationResult};

/// Extension of every file the scanner reads.
pub const FILE_EXTENSION: &str = "vlm";
/// Root settings file at the top of a collection.
pub const COLLECTION_FILE: &str = "collection.vlm";
/// Root settings file of a folder.
pub const FOLDER_FILE: &str = "folder.vlm";
/// Directory holding environment files.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// What a file inside a collection holds, judged by its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `collection.vlm` at the collection root.
    Collection,
    /// A `folder.vlm` file.
    Folder,
    /// Any file below `environments/`.
    Environment,
    /// Every other file.
    Request,
}

impl FileKind {
    /// Classifies `path` relative to the collection `root`.
    #[must_use]
    pub fn classify(root: &Path, path: &Path) -> Self {
        let relative = path.strip_prefix(root).unwrap_or(path);
        if relative == Path::new(COLLECTION_FILE) {
            Self::Collection
        } else if relative.starts_with(ENVIRONMENTS_DIR) {
            Self::Environment
        } else if path.file_name().is_some_and(|name| name == FOLDER_FILE) {
            Self::Folder
        } else {
            Self::Request
        }
    }
}

/// A parsed file and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile<T> {
    /// File path.
    pub path: PathBuf,
    /// Parsed contents.
    pub value: T,
}

/// A file that could not be loaded.
#[derive(Debug)]
pub struct ScanFailure {
    /// File path.
    pub path: PathBuf,
    /// Why it failed.
    pub error: ApplicationError,
}

/// Everything found in a collection directory.
#[derive(Debug, Default)]
pub struct CollectionScan {
    /// Collection root settings, when `collection.vlm` exists.
    pub collection: Option<CollectionRoot>,
    /// Folder roots.
    pub folders: Vec<ScannedFile<CollectionRoot>>,
    /// Environments.
    pub environments: Vec<ScannedFile<Environment>>,
    /// Requests.
    pub requests: Vec<ScannedFile<RequestItem>>,
    /// Files that failed to load.
    pub failures: Vec<ScanFailure>,
}

impl CollectionScan {
    /// Whether every file loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files looked at.
    #[must_use]
    pub fn file_count(&self) -> usize {
        usize::from(self.collection.is_some())
            + self.folders.len()
            + self.environments.len()
            + self.requests.len()
            + self.failures.len()
    }
}

enum Loaded {
    Collection(CollectionRoot),
    Folder(CollectionRoot),
    Environment(Environment),
    Request(RequestItem),
}

/// Walks a collection directory and parses every file in it concurrently.
pub struct ScanCollection<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> ScanCollection<C, F> {
    /// Creates a new `ScanCollection` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Scans the collection at `root`.
    ///
    /// Files that fail to read or parse end up in
    /// [`CollectionScan::failures`]; the scan itself carries on.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory or cannot be listed.
    pub async fn execute(&self, root: &Path) -> ApplicationResult<CollectionScan> {
        if !self.fs.is_dir(root).await {
            return Err(ApplicationError::NotADirectory(root.to_path_buf()));
        }

        let files = self.collect_files(root).await?;
        let loads = files.into_iter().map(|path| {
            let kind = FileKind::classify(root, &path);
            self.load(kind, path)
        });

        let mut scan = CollectionScan::default();
        for (path, result) in join_all(loads).await {
            match result {
                Ok(Loaded::Collection(collection)) => scan.collection = Some(collection),
                Ok(Loaded::Folder(value)) => scan.folders.push(ScannedFile { path, value }),
                Ok(Loaded::Environment(value)) => {
                    scan.environments.push(ScannedFile { path, value });
                }
                Ok(Loaded::Request(value)) => scan.requests.push(ScannedFile { path, value }),
                Err(error) => scan.failures.push(ScanFailure { path, error }),
            }
        }

        debug!(
            root = %root.display(),
            files = scan.file_count(),
            failures = scan.failures.len(),
            "collection scanned"
        );
        Ok(scan)
    }

    async fn collect_files(&self, root: &Path) -> ApplicationResult<Vec<PathBuf>> {
        let mut pending = vec![root.to_path_buf()];
        let mut files = Vec::new();

        while let Some(dir) = pending.pop() {
            for entry in self.fs.read_dir(&dir).await? {
                if self.fs.is_dir(&entry).await {
                    pending.push(entry);
                } else if entry.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
                    files.push(entry);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    async fn load(&self, kind: FileKind, path: PathBuf) -> (PathBuf, ApplicationResult<Loaded>) {
        let result = self.load_file(kind, &path).await;
        (path, result)
    }

    async fn load_file(&self, kind: FileKind, path: &Path) -> ApplicationResult<Loaded> {
        let text = self.fs.read_file_string(path).await?;
        let loaded = match kind {
            FileKind::Collection => Loaded::Collection(self.codec.parse_collection(text).await?),
            FileKind::Folder => Loaded::Folder(self.codec.parse_collection(text).await?),
            FileKind::Environment => {
                Loaded::Environment(self.codec.parse_environment(text).await?)
            }
            FileKind::Request => Loaded::Request(self.codec.parse_request(text).await?),
        };
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CodecError;
    use crate::use_cases::testing::{MemoryFileSystem, StubCodec};
    use pretty_assertions::assert_eq;

    fn sample() -> MemoryFileSystem {
        MemoryFileSystem::with_files([
            ("/c/collection.vlm", "Collection docs"),
            ("/c/environments/dev.vlm", "host=localhost"),
            ("/c/users/folder.vlm", "Users"),
            ("/c/users/create.vlm", "Create user"),
            ("/c/users/broken.vlm", "!not valid"),
            ("/c/ping.vlm", "Ping"),
            ("/c/README.md", "ignored"),
        ])
    }

    #[test]
    fn test_classify() {
        let root = Path::new("/c");
        assert_eq!(
            FileKind::classify(root, Path::new("/c/collection.vlm")),
            FileKind::Collection
        );
        assert_eq!(
            FileKind::classify(root, Path::new("/c/a/collection.vlm")),
            FileKind::Request
        );
        assert_eq!(
            FileKind::classify(root, Path::new("/c/a/b/folder.vlm")),
            FileKind::Folder
        );
        assert_eq!(
            FileKind::classify(root, Path::new("/c/environments/prod.vlm")),
            FileKind::Environment
        );
        assert_eq!(
            FileKind::classify(root, Path::new("/c/ping.vlm")),
            FileKind::Request
        );
    }

    #[tokio::test]
    async fn test_scan_sorts_files_by_kind() {
        let scan = ScanCollection::new(StubCodec, sample())
            .execute(Path::new("/c"))
            .await
            .expect("should scan");

        assert_eq!(
            scan.collection.map(|c| c.docs).as_deref(),
            Some("Collection docs")
        );
        assert_eq!(scan.folders.len(), 1);
        assert_eq!(scan.folders[0].value.docs, "Users");
        assert_eq!(scan.environments.len(), 1);
        assert_eq!(scan.environments[0].value.variables[0].value, "localhost");

        let names: Vec<&str> = scan
            .requests
            .iter()
            .map(|file| file.value.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ping", "Create user"]);
    }

    #[tokio::test]
    async fn test_scan_collects_failures() {
        let scan = ScanCollection::new(StubCodec, sample())
            .execute(Path::new("/c"))
            .await
            .expect("should scan");

        assert!(!scan.is_clean());
        assert_eq!(scan.file_count(), 6);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].path, PathBuf::from("/c/users/broken.vlm"));
        assert!(matches!(
            scan.failures[0].error,
            ApplicationError::Codec(CodecError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_scan_rejects_missing_directory() {
        let result = ScanCollection::new(StubCodec, MemoryFileSystem::default())
            .execute(Path::new("/nowhere"))
            .await;
        assert!(matches!(result, Err(ApplicationError::NotADirectory(_))));
    }
}
