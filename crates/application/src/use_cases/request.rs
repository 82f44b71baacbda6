//! Load and save request files.

use std::path::Path;

use vellum_domain::RequestItem;

use crate::ApplicationResult;
use crate::ports::{DocumentCodec, FileSystem};

/// Reads a request file and parses it.
pub struct LoadRequest<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> LoadRequest<C, F> {
    /// Creates a new `LoadRequest` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Loads the request stored at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn execute(&self, path: &Path) -> ApplicationResult<RequestItem> {
        let text = self.fs.read_file_string(path).await?;
        Ok(self.codec.parse_request(text).await?)
    }
}

/// Serializes a request and writes it to disk.
pub struct SaveRequest<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> SaveRequest<C, F> {
    /// Creates a new `SaveRequest` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Writes `item` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn execute(&self, path: &Path, item: RequestItem) -> ApplicationResult<()> {
        let text = self.codec.serialize_request(item).await?;
        self.fs.write_file(path, text.as_bytes()).await?;
        Ok(())
    }
}
