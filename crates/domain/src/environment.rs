//! Environment files: a variables-only projection of the document.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Pair};

/// Value of the `type` annotation added to every parsed variable.
pub const TEXT_VARIABLE_TYPE: &str = "text";

fn text_type() -> String {
    TEXT_VARIABLE_TYPE.to_string()
}

const fn default_enabled() -> bool {
    true
}

/// A named set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Variables in file order.
    pub variables: Vec<EnvironmentVariable>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variables: Vec::new(),
        }
    }

    /// Adds an enabled variable.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.push(EnvironmentVariable::new(name, value));
    }
}

/// One environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name.
    #[serde(default)]
    pub name: String,

    /// Variable value.
    #[serde(default)]
    pub value: String,

    /// Whether this variable is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether the value is a secret.
    #[serde(default)]
    pub secret: bool,

    /// Value type; always `text` for parsed files.
    #[serde(rename = "type", default = "text_type")]
    pub kind: String,
}

impl EnvironmentVariable {
    /// Creates an enabled, non-secret text variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
            secret: false,
            kind: text_type(),
        }
    }
}

impl From<Pair> for EnvironmentVariable {
    fn from(pair: Pair) -> Self {
        Self {
            enabled: pair.enabled,
            ..Self::new(pair.name, pair.value)
        }
    }
}

impl From<Document> for Environment {
    fn from(doc: Document) -> Self {
        // The type tag is not part of the grammar; every variable is text.
        Self {
            variables: doc.vars.into_iter().map(EnvironmentVariable::from).collect(),
        }
    }
}

impl From<&Environment> for Document {
    fn from(env: &Environment) -> Self {
        Self {
            vars: env
                .variables
                .iter()
                .map(|v| Pair {
                    name: v.name.clone(),
                    value: v.value.clone(),
                    enabled: v.enabled,
                })
                .collect(),
            ..Self::default()
        }
    }
}
