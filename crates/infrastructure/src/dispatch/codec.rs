//! The document codec port, served by the dispatch queue.

use vellum_application::ports::{CodecError, DocumentCodec};
use vellum_domain::{CollectionRoot, Environment, RequestItem};

use super::config::DispatchConfig;
use super::error::{DispatchError, JobError};
use super::Dispatcher;

/// Runs every codec call as a job on a [`Dispatcher`].
#[derive(Clone)]
pub struct QueuedCodec {
    dispatcher: Dispatcher,
}

impl QueuedCodec {
    /// Wraps an existing dispatcher.
    #[must_use]
    pub const fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Starts a dispatcher with `config` and wraps it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn start(config: DispatchConfig) -> Self {
        Self::new(Dispatcher::new(config))
    }

    /// The underlying dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl From<DispatchError> for CodecError {
    fn from(error: DispatchError) -> Self {
        match error {
            DispatchError::Job {
                source: JobError::Parse(parse),
                ..
            } => Self::Parse(parse),
            other => Self::Dispatch(other.to_string()),
        }
    }
}

impl DocumentCodec for QueuedCodec {
    async fn parse_request(&self, text: String) -> Result<RequestItem, CodecError> {
        Ok(self.dispatcher.parse_request(text).await?)
    }

    async fn serialize_request(&self, item: RequestItem) -> Result<String, CodecError> {
        Ok(self.dispatcher.serialize_request(item).await?)
    }

    async fn parse_environment(&self, text: String) -> Result<Environment, CodecError> {
        Ok(self.dispatcher.parse_environment(text).await?)
    }

    async fn serialize_environment(&self, environment: Environment) -> Result<String, CodecError> {
        Ok(self.dispatcher.serialize_environment(environment).await?)
    }

    async fn parse_collection(&self, text: String) -> Result<CollectionRoot, CodecError> {
        Ok(self.dispatcher.parse_collection(text).await?)
    }

    async fn serialize_collection(
        &self,
        collection: CollectionRoot,
        is_folder: bool,
    ) -> Result<String, CodecError> {
        Ok(self
            .dispatcher
            .serialize_collection(collection, is_folder)
            .await?)
    }
}
