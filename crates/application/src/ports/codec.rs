//! Document codec port.
//!
//! Converts between file text and the application objects. Implementations
//! may run the work elsewhere, so every call is asynchronous and takes
//! ownership of its input.

use std::future::Future;

use thiserror::Error;
use vellum_domain::{CollectionRoot, Environment, ParseError, RequestItem};

/// Errors raised by a [`DocumentCodec`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The work could not be carried out.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

/// Parses and serializes the three file variants.
pub trait DocumentCodec: Send + Sync {
    /// Parses a request file.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] for malformed text.
    fn parse_request(
        &self,
        text: String,
    ) -> impl Future<Output = Result<RequestItem, CodecError>> + Send;

    /// Serializes a request.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Dispatch`] when the work could not run.
    fn serialize_request(
        &self,
        item: RequestItem,
    ) -> impl Future<Output = Result<String, CodecError>> + Send;

    /// Parses an environment file.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] for malformed text.
    fn parse_environment(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Environment, CodecError>> + Send;

    /// Serializes an environment.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Dispatch`] when the work could not run.
    fn serialize_environment(
        &self,
        environment: Environment,
    ) -> impl Future<Output = Result<String, CodecError>> + Send;

    /// Parses a collection or folder root file.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] for malformed text.
    fn parse_collection(
        &self,
        text: String,
    ) -> impl Future<Output = Result<CollectionRoot, CodecError>> + Send;

    /// Serializes a collection root, or a folder root when `is_folder` is set.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Dispatch`] when the work could not run.
    fn serialize_collection(
        &self,
        collection: CollectionRoot,
        is_folder: bool,
    ) -> impl Future<Output = Result<String, CodecError>> + Send;
}
