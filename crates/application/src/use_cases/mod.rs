//! Application use cases (business logic orchestration).

mod collection;
mod environment;
mod request;
mod scan_collection;

#[cfg(test)]
mod testing;

pub use collection::{LoadCollection, SaveCollection, SaveCollectionInput};
pub use environment::{LoadEnvironment, SaveEnvironment};
pub use request::{LoadRequest, SaveRequest};
pub use scan_collection::{
    COLLECTION_FILE, CollectionScan, ENVIRONMENTS_DIR, FILE_EXTENSION, FOLDER_FILE, FileKind,
    ScanCollection, ScanFailure, ScannedFile,
};
