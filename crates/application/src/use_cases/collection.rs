//! Load and save collection and folder root files.

use std::path::Path;

use vellum_domain::CollectionRoot;

use crate::ApplicationResult;
use crate::ports::{DocumentCodec, FileSystem};

/// Reads a collection or folder root file and parses it.
pub struct LoadCollection<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> LoadCollection<C, F> {
    /// Creates a new `LoadCollection` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Loads the root stored at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn execute(&self, path: &Path) -> ApplicationResult<CollectionRoot> {
        let text = self.fs.read_file_string(path).await?;
        Ok(self.codec.parse_collection(text).await?)
    }
}

/// Input for saving a collection or folder root.
#[derive(Debug, Clone)]
pub struct SaveCollectionInput {
    /// Root settings to write.
    pub collection: CollectionRoot,
    /// Write as a folder root, without authentication.
    pub is_folder: bool,
}

/// Serializes a collection or folder root and writes it to disk.
pub struct SaveCollection<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> SaveCollection<C, F> {
    /// Creates a new `SaveCollection` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Writes the root to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn execute(&self, path: &Path, input: SaveCollectionInput) -> ApplicationResult<()> {
        let text = self
            .codec
            .serialize_collection(input.collection, input.is_folder)
            .await?;
        self.fs.write_file(path, text.as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{MemoryFileSystem, StubCodec};

    #[tokio::test]
    async fn test_load_collection_success() {
        let fs = MemoryFileSystem::with_files([("/c/collection.vlm", "Shared docs")]);
        let use_case = LoadCollection::new(StubCodec, fs);

        let root = use_case
            .execute(Path::new("/c/collection.vlm"))
            .await
            .expect("should load");
        assert_eq!(root.docs, "Shared docs");
    }

    #[tokio::test]
    async fn test_save_folder_passes_flag_to_codec() {
        let use_case = SaveCollection::new(StubCodec, MemoryFileSystem::default());
        let input = SaveCollectionInput {
            collection: CollectionRoot {
                docs: "Users".to_string(),
                ..CollectionRoot::default()
            },
            is_folder: true,
        };

        use_case
            .execute(Path::new("/c/users/folder.vlm"), input)
            .await
            .expect("should save");

        assert_eq!(
            use_case.fs.get("/c/users/folder.vlm").as_deref(),
            Some("folder:Users")
        );
    }
}
