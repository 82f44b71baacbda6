//! The six codec operations as dispatchable jobs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vellum_domain::{CollectionRoot, Environment, RequestItem};

use super::error::JobError;
use super::lane::Task;
use crate::format;

/// Name of a codec operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Text to request.
    ParseRequest,
    /// Request to text.
    SerializeRequest,
    /// Text to environment.
    ParseEnvironment,
    /// Environment to text.
    SerializeEnvironment,
    /// Text to collection or folder root.
    ParseCollectionOrFolder,
    /// Collection or folder root to text.
    SerializeCollectionOrFolder,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ParseRequest,
        Self::SerializeRequest,
        Self::ParseEnvironment,
        Self::SerializeEnvironment,
        Self::ParseCollectionOrFolder,
        Self::SerializeCollectionOrFolder,
    ];

    /// Wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseRequest => "parseRequest",
            Self::SerializeRequest => "serializeRequest",
            Self::ParseEnvironment => "parseEnvironment",
            Self::SerializeEnvironment => "serializeEnvironment",
            Self::ParseCollectionOrFolder => "parseCollectionOrFolder",
            Self::SerializeCollectionOrFolder => "serializeCollectionOrFolder",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| JobError::UnknownOperation(s.to_string()))
    }
}

/// An operation together with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Parse request text.
    ParseRequest(String),
    /// Serialize a request.
    SerializeRequest(RequestItem),
    /// Parse environment text.
    ParseEnvironment(String),
    /// Serialize an environment.
    SerializeEnvironment(Environment),
    /// Parse collection or folder text.
    ParseCollection(String),
    /// Serialize a collection root, or a folder root when `is_folder` is set.
    SerializeCollection {
        /// Root settings.
        collection: CollectionRoot,
        /// Whether the root belongs to a folder.
        is_folder: bool,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionPayload {
    collection: CollectionRoot,
    #[serde(default)]
    is_folder: bool,
}

impl Job {
    /// Builds a job from an operation name and a JSON payload.
    ///
    /// Parse operations take a string. Serialize operations take the JSON
    /// form of their object; `serializeCollectionOrFolder` takes
    /// `{"collection": ..., "isFolder": bool}`.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::UnknownOperation`] for an unsupported name and
    /// [`JobError::Payload`] when the payload has the wrong shape.
    pub fn from_operation(name: &str, payload: Value) -> Result<Self, JobError> {
        let job = match name.parse::<Operation>()? {
            Operation::ParseRequest => Self::ParseRequest(serde_json::from_value(payload)?),
            Operation::SerializeRequest => Self::SerializeRequest(serde_json::from_value(payload)?),
            Operation::ParseEnvironment => Self::ParseEnvironment(serde_json::from_value(payload)?),
            Operation::SerializeEnvironment => {
                Self::SerializeEnvironment(serde_json::from_value(payload)?)
            }
            Operation::ParseCollectionOrFolder => {
                Self::ParseCollection(serde_json::from_value(payload)?)
            }
            Operation::SerializeCollectionOrFolder => {
                let CollectionPayload {
                    collection,
                    is_folder,
                } = serde_json::from_value(payload)?;
                Self::SerializeCollection {
                    collection,
                    is_folder,
                }
            }
        };
        Ok(job)
    }
}

fn json_len<T: Serialize>(value: &T) -> usize {
    serde_json::to_vec(value).map_or(0, |bytes| bytes.len())
}

impl Task for Job {
    type Output = JobOutput;

    fn operation(&self) -> Operation {
        match self {
            Self::ParseRequest(_) => Operation::ParseRequest,
            Self::SerializeRequest(_) => Operation::SerializeRequest,
            Self::ParseEnvironment(_) => Operation::ParseEnvironment,
            Self::SerializeEnvironment(_) => Operation::SerializeEnvironment,
            Self::ParseCollection(_) => Operation::ParseCollectionOrFolder,
            Self::SerializeCollection { .. } => Operation::SerializeCollectionOrFolder,
        }
    }

    fn payload_size(&self) -> usize {
        match self {
            Self::ParseRequest(text) | Self::ParseEnvironment(text) | Self::ParseCollection(text) => {
                text.len()
            }
            Self::SerializeRequest(item) => json_len(item),
            Self::SerializeEnvironment(environment) => json_len(environment),
            Self::SerializeCollection { collection, .. } => json_len(collection),
        }
    }

    fn run(self) -> Result<JobOutput, JobError> {
        let output = match self {
            Self::ParseRequest(text) => JobOutput::Request(format::parse_request(&text)?),
            Self::SerializeRequest(item) => JobOutput::Text(format::serialize_request(&item)),
            Self::ParseEnvironment(text) => {
                JobOutput::Environment(format::parse_environment(&text)?)
            }
            Self::SerializeEnvironment(environment) => {
                JobOutput::Text(format::serialize_environment(&environment))
            }
            Self::ParseCollection(text) => {
                JobOutput::Collection(format::parse_collection(&text)?)
            }
            Self::SerializeCollection {
                collection,
                is_folder,
            } => JobOutput::Text(format::serialize_collection(&collection, is_folder)),
        };
        Ok(output)
    }
}

/// Result of a finished job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JobOutput {
    /// A parsed request.
    Request(RequestItem),
    /// A parsed environment.
    Environment(Environment),
    /// A parsed collection or folder root.
    Collection(CollectionRoot),
    /// Serialized text.
    Text(String),
}
