//! Size-routed dispatch of codec work onto worker threads.
//!
//! A [`Dispatcher`] owns two [`Lane`]s. Tasks whose payload is smaller
//! than the configured threshold go to the `small` lane, the rest to the
//! `large` lane, so one big file never holds up a burst of small ones.
//! Each lane runs one task at a time, smallest payload first.

mod codec;
mod config;
mod error;
mod job;
mod lane;

use std::future::Future;

pub use codec::QueuedCodec;
pub use config::{DEFAULT_LANE_THRESHOLD_BYTES, DispatchConfig};
pub use error::{DispatchError, JobError};
pub use job::{Job, JobOutput, Operation};
pub use lane::{Lane, Task};

use vellum_domain::{CollectionRoot, Environment, RequestItem};

/// Routes tasks to the small or large lane by payload size.
pub struct Dispatcher<T: Task = Job> {
    small: Lane<T>,
    large: Lane<T>,
    threshold: usize,
}

impl<T: Task> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            small: self.small.clone(),
            large: self.large.clone(),
            threshold: self.threshold,
        }
    }
}

impl<T: Task> Dispatcher<T> {
    /// Starts both lanes on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            small: Lane::spawn("small"),
            large: Lane::spawn("large"),
            threshold: config.lane_threshold_bytes,
        }
    }

    /// Lane that serves payloads of `size` bytes.
    #[must_use]
    pub fn lane_for(&self, size: usize) -> &Lane<T> {
        if size < self.threshold {
            &self.small
        } else {
            &self.large
        }
    }

    /// Queues a task and returns a future for its result.
    pub fn enqueue(
        &self,
        task: T,
    ) -> impl Future<Output = Result<T::Output, DispatchError>> + Send + 'static {
        self.lane_for(task.payload_size()).submit(task)
    }
}

impl Dispatcher<Job> {
    /// Parses request text on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the job fails or its worker dies.
    pub async fn parse_request(&self, text: String) -> Result<RequestItem, DispatchError> {
        match self.enqueue(Job::ParseRequest(text)).await? {
            JobOutput::Request(item) => Ok(item),
            _ => Err(DispatchError::UnexpectedOutput),
        }
    }

    /// Serializes a request on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the worker dies.
    pub async fn serialize_request(&self, item: RequestItem) -> Result<String, DispatchError> {
        self.text(Job::SerializeRequest(item)).await
    }

    /// Parses environment text on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the job fails or its worker dies.
    pub async fn parse_environment(&self, text: String) -> Result<Environment, DispatchError> {
        match self.enqueue(Job::ParseEnvironment(text)).await? {
            JobOutput::Environment(environment) => Ok(environment),
            _ => Err(DispatchError::UnexpectedOutput),
        }
    }

    /// Serializes an environment on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the worker dies.
    pub async fn serialize_environment(
        &self,
        environment: Environment,
    ) -> Result<String, DispatchError> {
        self.text(Job::SerializeEnvironment(environment)).await
    }

    /// Parses collection or folder text on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the job fails or its worker dies.
    pub async fn parse_collection(&self, text: String) -> Result<CollectionRoot, DispatchError> {
        match self.enqueue(Job::ParseCollection(text)).await? {
            JobOutput::Collection(collection) => Ok(collection),
            _ => Err(DispatchError::UnexpectedOutput),
        }
    }

    /// Serializes a collection or folder root on a worker.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the worker dies.
    pub async fn serialize_collection(
        &self,
        collection: CollectionRoot,
        is_folder: bool,
    ) -> Result<String, DispatchError> {
        self.text(Job::SerializeCollection {
            collection,
            is_folder,
        })
        .await
    }

    async fn text(&self, job: Job) -> Result<String, DispatchError> {
        match self.enqueue(job).await? {
            JobOutput::Text(text) => Ok(text),
            _ => Err(DispatchError::UnexpectedOutput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tokio::sync::oneshot;

    struct Held {
        size: usize,
        started: Option<oneshot::Sender<()>>,
        gate: Option<mpsc::Receiver<()>>,
    }

    impl Task for Held {
        type Output = usize;

        fn operation(&self) -> Operation {
            Operation::ParseCollectionOrFolder
        }

        fn payload_size(&self) -> usize {
            self.size
        }

        fn run(self) -> Result<usize, JobError> {
            if let Some(started) = self.started {
                started.send(()).expect("test is waiting");
            }
            if let Some(gate) = self.gate {
                gate.recv().expect("gate opened");
            }
            Ok(self.size)
        }
    }

    #[tokio::test]
    async fn test_threshold_routes_to_lanes() {
        let dispatcher: Dispatcher = Dispatcher::new(DispatchConfig::with_threshold(10));
        assert_eq!(dispatcher.lane_for(9).name(), "small");
        assert_eq!(dispatcher.lane_for(10).name(), "large");
        assert_eq!(dispatcher.lane_for(1_000_000).name(), "large");
    }

    #[tokio::test]
    async fn test_large_lane_is_not_blocked_by_small_lane() {
        let dispatcher = Dispatcher::new(DispatchConfig::with_threshold(10));

        let (started_tx, started_rx) = oneshot::channel();
        let (gate_tx, gate_rx) = mpsc::channel();
        let blocked = dispatcher.enqueue(Held {
            size: 1,
            started: Some(started_tx),
            gate: Some(gate_rx),
        });
        started_rx.await.expect("small task started");

        let large = dispatcher.enqueue(Held {
            size: 500,
            started: None,
            gate: None,
        });
        assert_eq!(large.await.expect("large lane free"), 500);

        gate_tx.send(()).expect("small task waiting");
        assert_eq!(blocked.await.expect("small lane drains"), 1);
    }

    #[tokio::test]
    async fn test_typed_helpers() {
        let dispatcher: Dispatcher = Dispatcher::new(DispatchConfig::default());

        let item = dispatcher
            .parse_request("meta {\n  name: Ping\n}\n\nget {\n  url: /ping\n}".to_string())
            .await
            .expect("valid request");
        assert_eq!(item.name, "Ping");
        assert_eq!(item.request.method, "GET");

        let text = dispatcher
            .serialize_request(item)
            .await
            .expect("serialize never fails");
        assert!(text.starts_with("meta {\n  name: Ping\n"));

        let error = dispatcher
            .parse_environment("vars {\n  : nothing\n}".to_string())
            .await
            .expect_err("missing key");
        let parse = error.parse_error().expect("parse failure");
        assert_eq!((parse.line, parse.column), (2, 3));
    }
}
