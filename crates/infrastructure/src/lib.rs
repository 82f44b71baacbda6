//! Vellum Infrastructure - Adapters and implementations
//!
//! This crate provides the text format, the dispatch queue that runs it on
//! worker threads, and concrete implementations of the ports defined in
//! the application layer.

pub mod dispatch;
pub mod format;
pub mod persistence;
pub mod serialization;

pub use dispatch::{
    DispatchConfig, DispatchError, Dispatcher, Job, JobError, JobOutput, Operation, QueuedCodec,
};
pub use format::{
    parse_collection, parse_document, parse_environment, parse_request, serialize_collection,
    serialize_document, serialize_environment, serialize_request,
};
pub use persistence::TokioFileSystem;
pub use serialization::{SerializationError, from_json, to_json_stable};
