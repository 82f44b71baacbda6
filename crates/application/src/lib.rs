//! Vellum Application - Use cases and ports
//!
//! The use cases here load and store request, environment and collection
//! files. They reach the disk through [`ports::FileSystem`] and the text
//! format through [`ports::DocumentCodec`]; both are implemented in
//! `vellum-infrastructure`.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
