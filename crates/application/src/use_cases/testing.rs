//! In-memory ports for use case tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vellum_domain::{CollectionRoot, Environment, ParseError, RequestItem};

use crate::ports::{CodecError, DocumentCodec, FileSystem, FileSystemError};

/// Files kept in a map; directories are implied by file paths.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fs = Self::default();
        for (path, text) in files {
            fs.insert(path, text);
        }
        fs
    }

    pub fn insert(&self, path: impl Into<PathBuf>, text: &str) {
        self.files
            .lock()
            .expect("lock")
            .insert(path.into(), text.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().expect("lock").get(Path::new(path)).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        self.files
            .lock()
            .expect("lock")
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        self.insert(path, &String::from_utf8_lossy(contents));
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        let is_file = self.files.lock().expect("lock").contains_key(path);
        is_file || self.is_dir(path).await
    }

    async fn is_dir(&self, path: &Path) -> bool {
        self.files
            .lock()
            .expect("lock")
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let children: BTreeSet<PathBuf> = self
            .files
            .lock()
            .expect("lock")
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|first| path.join(first))
            .collect();
        if children.is_empty() {
            return Err(FileSystemError::NotFound(path.to_path_buf()));
        }
        Ok(children.into_iter().collect())
    }
}

/// Line-based stand-in for the real text format.
///
/// Text starting with `!` fails to parse. Requests are their name,
/// environments are `name=value` lines, collections are their docs.
#[derive(Default)]
pub struct StubCodec;

fn check(text: &str) -> Result<(), CodecError> {
    if text.starts_with('!') {
        return Err(ParseError::new(1, 1, "block keyword").into());
    }
    Ok(())
}

impl DocumentCodec for StubCodec {
    async fn parse_request(&self, text: String) -> Result<RequestItem, CodecError> {
        check(&text)?;
        Ok(RequestItem::new(text.trim(), "GET", "/"))
    }

    async fn serialize_request(&self, item: RequestItem) -> Result<String, CodecError> {
        Ok(item.name)
    }

    async fn parse_environment(&self, text: String) -> Result<Environment, CodecError> {
        check(&text)?;
        let mut environment = Environment::new();
        for line in text.lines() {
            if let Some((name, value)) = line.split_once('=') {
                environment.add_variable(name, value);
            }
        }
        Ok(environment)
    }

    async fn serialize_environment(&self, environment: Environment) -> Result<String, CodecError> {
        Ok(environment
            .variables
            .iter()
            .map(|var| format!("{}={}\n", var.name, var.value))
            .collect())
    }

    async fn parse_collection(&self, text: String) -> Result<CollectionRoot, CodecError> {
        check(&text)?;
        Ok(CollectionRoot {
            docs: text,
            ..CollectionRoot::default()
        })
    }

    async fn serialize_collection(
        &self,
        collection: CollectionRoot,
        is_folder: bool,
    ) -> Result<String, CodecError> {
        if is_folder {
            Ok(format!("folder:{}", collection.docs))
        } else {
            Ok(collection.docs)
        }
    }
}
