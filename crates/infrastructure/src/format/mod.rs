//! The block-structured text format.
//!
//! Text is read in three steps: [`grammar`] turns it into a tree of blocks,
//! [`mapper`] folds the blocks into a [`Document`], and a variant
//! conversion from `vellum-domain` renames fields into the request,
//! environment or collection shape. Writing runs the same steps backwards
//! through [`serializer`]. Text-block content is shifted by a two-space
//! [`margin`] on the way out and back on the way in.

pub mod grammar;
pub mod keyword;
pub mod margin;
pub mod mapper;
pub mod serializer;

use vellum_domain::{CollectionRoot, Document, Environment, ParseError, RequestItem};

/// Parses text into the intermediate document.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the first character the grammar
/// cannot accept.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    grammar::parse(text).map(mapper::to_document)
}

/// Renders the intermediate document as text.
#[must_use]
pub fn serialize_document(doc: &Document) -> String {
    serializer::to_text(doc)
}

/// Parses a request file.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is malformed.
pub fn parse_request(text: &str) -> Result<RequestItem, ParseError> {
    parse_document(text).map(RequestItem::from)
}

/// Writes a request file.
#[must_use]
pub fn serialize_request(item: &RequestItem) -> String {
    serializer::to_text(&Document::from(item))
}

/// Parses an environment file.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is malformed.
pub fn parse_environment(text: &str) -> Result<Environment, ParseError> {
    parse_document(text).map(Environment::from)
}

/// Writes an environment file.
#[must_use]
pub fn serialize_environment(environment: &Environment) -> String {
    serializer::to_text(&Document::from(environment))
}

/// Parses a collection or folder root file.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is malformed.
pub fn parse_collection(text: &str) -> Result<CollectionRoot, ParseError> {
    parse_document(text).map(CollectionRoot::from)
}

/// Writes a collection root, or a folder root when `is_folder` is set.
#[must_use]
pub fn serialize_collection(root: &CollectionRoot, is_folder: bool) -> String {
    serializer::to_text(&root.to_document(is_folder))
}
