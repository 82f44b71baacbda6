//! Load and save environment files.

use std::path::Path;

use vellum_domain::Environment;

use crate::ApplicationResult;
use crate::ports::{DocumentCodec, FileSystem};

/// Reads an environment file and parses it.
pub struct LoadEnvironment<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> LoadEnvironment<C, F> {
    /// Creates a new `LoadEnvironment` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Loads the environment stored at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn execute(&self, path: &Path) -> ApplicationResult<Environment> {
        let text = self.fs.read_file_string(path).await?;
        Ok(self.codec.parse_environment(text).await?)
    }
}

/// Serializes an environment and writes it to disk.
pub struct SaveEnvironment<C: DocumentCodec, F: FileSystem> {
    codec: C,
    fs: F,
}

impl<C: DocumentCodec, F: FileSystem> SaveEnvironment<C, F> {
    /// Creates a new `SaveEnvironment` use case.
    #[must_use]
    pub const fn new(codec: C, fs: F) -> Self {
        Self { codec, fs }
    }

    /// Writes `environment` to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn execute(&self, path: &Path, environment: Environment) -> ApplicationResult<()> {
        let text = self.codec.serialize_environment(environment).await?;
        self.fs.write_file(path, text.as_bytes()).await?;
        Ok(())
    }
}
