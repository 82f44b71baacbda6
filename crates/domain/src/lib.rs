//! Vellum Domain - Core document types
//!
//! This crate defines the in-memory model of the Vellum text format:
//! the folded [`Document`] produced by the parser, and the field-renamed
//! application objects ([`RequestItem`], [`Environment`], [`CollectionRoot`])
//! built from it. All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod document;
pub mod environment;
pub mod error;
pub mod merge;
pub mod request;
pub mod sequence;

pub use collection::{CollectionRequest, CollectionRoot, FolderMeta};
pub use document::{
    ApiKeyAuth, Auth, AuthCredentials, AwsV4Auth, BasicAuth, BearerAuth, Body, DigestAuth,
    Document, GraphqlBody, HttpSection, Meta, NtlmAuth, Pair, WsseAuth,
};
pub use environment::{Environment, EnvironmentVariable};
pub use error::ParseError;
pub use merge::Merge;
pub use request::{Request, RequestAuth, RequestBody, RequestItem, RequestKind};
