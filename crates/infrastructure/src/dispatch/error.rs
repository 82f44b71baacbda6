//! Dispatch errors.

use std::io;

use thiserror::Error;
use vellum_domain::ParseError;

use super::job::Operation;

/// Error reported by a worker while running a job.
#[derive(Debug, Error)]
pub enum JobError {
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The payload did not decode into the operation's input type.
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The operation name is not one of the supported operations.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

/// Error returned to a caller awaiting a dispatched task.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The worker ran the task and reported an error.
    #[error("{operation} failed: {source}")]
    Job {
        /// Operation that failed.
        operation: Operation,
        /// Reported error.
        source: JobError,
    },

    /// The worker thread ended without replying.
    #[error("{operation}: worker exited with a non-zero exit code")]
    AbnormalExit {
        /// Operation that was running.
        operation: Operation,
    },

    /// No worker thread could be started.
    #[error("{operation}: failed to spawn worker: {source}")]
    Spawn {
        /// Operation that was about to run.
        operation: Operation,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The lane stopped before the task settled.
    #[error("dispatch lane is closed")]
    LaneClosed,

    /// A job produced output of a different kind than requested.
    #[error("job produced an unexpected kind of output")]
    UnexpectedOutput,
}

impl DispatchError {
    /// Parse error carried by a failed parse job, if any.
    #[must_use]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Job {
                source: JobError::Parse(error),
                ..
            } => Some(error),
            _ => None,
        }
    }
}
