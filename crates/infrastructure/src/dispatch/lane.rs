//! A single-concurrency lane that runs each task on its own thread.
//!
//! The lane is an actor: one tokio task owns the pending heap and is the
//! only reader of the inbox. Before every dispatch it drains everything
//! that arrived and picks the smallest payload, breaking ties by arrival.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::future::Future;
use std::thread;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use super::error::{DispatchError, JobError};
use super::job::Operation;

/// Unit of work a lane can schedule.
pub trait Task: Send + 'static {
    /// Value produced on success.
    type Output: Send + 'static;

    /// Operation name used in logs and errors.
    fn operation(&self) -> Operation;

    /// Payload size in bytes; smaller tasks run first.
    fn payload_size(&self) -> usize;

    /// Runs the task on the worker thread.
    ///
    /// # Errors
    ///
    /// Returns the error to reject the caller with.
    fn run(self) -> Result<Self::Output, JobError>;
}

type Reply<T> = oneshot::Sender<Result<<T as Task>::Output, DispatchError>>;

struct Envelope<T: Task> {
    task: T,
    reply: Reply<T>,
}

struct Pending<T: Task> {
    size: usize,
    arrival: u64,
    envelope: Envelope<T>,
}

impl<T: Task> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Task> Eq for Pending<T> {}

impl<T: Task> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Task> Ord for Pending<T> {
    // Reversed so the max-heap yields the smallest, earliest task.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.size, other.arrival).cmp(&(self.size, self.arrival))
    }
}

/// Handle to a running lane. Cloning shares the lane.
pub struct Lane<T: Task> {
    name: &'static str,
    inbox: mpsc::UnboundedSender<Envelope<T>>,
}

impl<T: Task> Clone for Lane<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inbox: self.inbox.clone(),
        }
    }
}

impl<T: Task> Lane<T> {
    /// Starts a lane on the current tokio runtime.
    ///
    /// The lane stops once every handle is dropped and its pending tasks
    /// have settled.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn(name: &'static str) -> Self {
        let (inbox, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run(name, receiver));
        Self { name, inbox }
    }

    /// Lane name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Queues a task and returns a future for its result.
    ///
    /// The task is queued before this returns, so the order of `submit`
    /// calls is the arrival order even if the futures are awaited later.
    pub fn submit(
        &self,
        task: T,
    ) -> impl Future<Output = Result<T::Output, DispatchError>> + Send + 'static {
        debug!(
            lane = self.name,
            operation = %task.operation(),
            payload_size = task.payload_size(),
            "task queued"
        );
        let (reply, settled) = oneshot::channel();
        let queued = self
            .inbox
            .send(Envelope { task, reply })
            .map_err(|_| DispatchError::LaneClosed);

        async move {
            queued?;
            settled.await.map_err(|_| DispatchError::LaneClosed)?
        }
    }
}

async fn run<T: Task>(name: &'static str, mut inbox: mpsc::UnboundedReceiver<Envelope<T>>) {
    let mut pending = BinaryHeap::new();
    let mut arrivals = 0_u64;

    let mut admit = |pending: &mut BinaryHeap<Pending<T>>, envelope: Envelope<T>| {
        pending.push(Pending {
            size: envelope.task.payload_size(),
            arrival: arrivals,
            envelope,
        });
        arrivals += 1;
    };

    loop {
        if pending.is_empty() {
            match inbox.recv().await {
                Some(envelope) => admit(&mut pending, envelope),
                None => break,
            }
        }
        while let Ok(envelope) = inbox.try_recv() {
            admit(&mut pending, envelope);
        }

        let Some(next) = pending.pop() else {
            continue;
        };
        let Envelope { task, reply } = next.envelope;
        let operation = task.operation();
        debug!(
            lane = name,
            operation = %operation,
            payload_size = next.size,
            waiting = pending.len(),
            "task dispatched"
        );

        let result = execute(name, task).await;
        debug!(
            lane = name,
            operation = %operation,
            ok = result.is_ok(),
            "task settled"
        );
        if reply.send(result).is_err() {
            trace!(lane = name, operation = %operation, "caller went away");
        }
    }

    debug!(lane = name, "lane stopped");
}

/// Runs one task on a fresh thread and waits for it to settle.
///
/// The thread is joined before returning, whatever the outcome.
async fn execute<T: Task>(lane: &'static str, task: T) -> Result<T::Output, DispatchError> {
    let operation = task.operation();
    let (sender, outcome) = oneshot::channel();

    let worker = thread::Builder::new()
        .name(format!("vellum-{lane}-worker"))
        .spawn(move || {
            // Dropped unsent if `run` panics.
            let _ = sender.send(task.run());
        })
        .map_err(|source| DispatchError::Spawn { operation, source })?;

    let outcome = outcome.await;

    match tokio::task::spawn_blocking(move || worker.join()).await {
        Ok(Ok(())) => trace!(lane, operation = %operation, "worker joined"),
        Ok(Err(_)) => debug!(lane, operation = %operation, "worker panicked"),
        Err(error) => debug!(lane, operation = %operation, %error, "worker join failed"),
    }

    match outcome {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(DispatchError::Job { operation, source }),
        Err(_) => Err(DispatchError::AbnormalExit { operation }),
    }
}
