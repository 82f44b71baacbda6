//! Request item: the application-level view of a request file.
//!
//! The conversion to and from [`Document`] is the field-renaming step that
//! sits between the text format and application logic (`http.method`
//! becomes `request.method`, `query` becomes `request.params`, ...).
//! It never fails: missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::document::{Auth, AuthCredentials, Body, Document, HttpSection, Meta, Pair};
use crate::sequence;

/// Mode used when none is selected.
pub const NONE_MODE: &str = "none";

fn none_mode() -> String {
    NONE_MODE.to_string()
}

/// Kind of request item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestKind {
    /// Plain HTTP request.
    #[default]
    Http,
    /// GraphQL request.
    Graphql,
}

impl RequestKind {
    /// Name used by application objects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http-request",
            Self::Graphql => "graphql-request",
        }
    }

    /// Name used in the `meta` block.
    #[must_use]
    pub const fn meta_type(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Graphql => "graphql",
        }
    }

    /// Reads the `meta.type` value; anything unknown is an HTTP request.
    #[must_use]
    pub fn from_meta_type(raw: Option<&str>) -> Self {
        match raw {
            Some("graphql") => Self::Graphql,
            _ => Self::Http,
        }
    }
}

impl From<String> for RequestKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "graphql-request" => Self::Graphql,
            _ => Self::Http,
        }
    }
}

impl From<RequestKind> for String {
    fn from(kind: RequestKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request file as seen by application logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestItem {
    /// Item kind.
    #[serde(rename = "type")]
    pub kind: RequestKind,

    /// Display name.
    pub name: String,

    /// Sequence number; non-numeric input becomes 1.
    #[serde(deserialize_with = "sequence::deserialize")]
    pub seq: u32,

    /// Request definition.
    pub request: Request,
}

impl Default for RequestItem {
    fn default() -> Self {
        Self {
            kind: RequestKind::Http,
            name: String::new(),
            seq: sequence::DEFAULT_SEQ,
            request: Request::default(),
        }
    }
}

impl RequestItem {
    /// Creates a request item with the given name, verb and URL.
    #[must_use]
    pub fn new(name: impl Into<String>, method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            request: Request {
                method: method.into(),
                url: url.into(),
                ..Request::default()
            },
            ..Self::default()
        }
    }
}

/// Request definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Upper-case verb.
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Query parameters.
    pub params: Vec<Pair>,
    /// Headers.
    pub headers: Vec<Pair>,
    /// Authentication.
    pub auth: RequestAuth,
    /// Body.
    pub body: RequestBody,
    /// Script source.
    pub script: String,
    /// Request variables.
    pub vars: Vec<Pair>,
    /// Assertions.
    pub assertions: Vec<Pair>,
    /// Test source.
    pub tests: String,
    /// Documentation.
    pub docs: String,
}

/// Authentication with a mandatory mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAuth {
    /// Selected mode; `none` when unset.
    #[serde(default = "none_mode")]
    pub mode: String,

    /// Credentials for each configured mode.
    #[serde(flatten)]
    pub credentials: AuthCredentials,
}

impl Default for RequestAuth {
    fn default() -> Self {
        Self {
            mode: none_mode(),
            credentials: AuthCredentials::default(),
        }
    }
}

impl RequestAuth {
    /// Builds the application view from a document's auth section and an
    /// optional mode override (the request line's `auth` entry).
    #[must_use]
    pub fn from_document(auth: Auth, mode: Option<String>) -> Self {
        Self {
            mode: mode.or(auth.mode).unwrap_or_else(none_mode),
            credentials: auth.credentials,
        }
    }
}

/// Body with a mandatory mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Active sub-mode; `none` when unset.
    #[serde(default = "none_mode")]
    pub mode: String,

    /// Content by sub-mode.
    #[serde(flatten)]
    pub content: Body,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self {
            mode: none_mode(),
            content: Body::default(),
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

impl From<Document> for RequestItem {
    fn from(doc: Document) -> Self {
        let meta = doc.meta.unwrap_or_default();
        let http = doc.http.unwrap_or_default();

        Self {
            kind: RequestKind::from_meta_type(meta.kind.as_deref()),
            name: meta.name.unwrap_or_default(),
            seq: sequence::coerce(meta.seq.as_deref()),
            request: Request {
                method: http.method.to_uppercase(),
                url: http.url.unwrap_or_default(),
                params: doc.query,
                headers: doc.headers,
                auth: RequestAuth::from_document(doc.auth, http.auth),
                body: RequestBody {
                    mode: http.body.unwrap_or_else(none_mode),
                    content: doc.body,
                },
                script: doc.script.unwrap_or_default(),
                vars: doc.vars,
                assertions: doc.assertions,
                tests: doc.test.unwrap_or_default(),
                docs: doc.docs.unwrap_or_default(),
            },
        }
    }
}

impl From<&RequestItem> for Document {
    fn from(item: &RequestItem) -> Self {
        let request = &item.request;
        let method = if request.method.trim().is_empty() {
            "get".to_string()
        } else {
            request.method.trim().to_lowercase()
        };

        Self {
            meta: Some(Meta {
                name: Some(item.name.clone()),
                kind: Some(item.kind.meta_type().to_string()),
                seq: Some(item.seq.to_string()),
            }),
            http: Some(HttpSection {
                method,
                url: Some(request.url.clone()),
                body: Some(request.body.mode.clone()),
                auth: Some(request.auth.mode.clone()),
            }),
            query: request.params.clone(),
            headers: request.headers.clone(),
            body: request.body.content.clone(),
            auth: Auth {
                mode: None,
                credentials: request.auth.credentials.clone(),
            },
            vars: request.vars.clone(),
            assertions: request.assertions.clone(),
            script: non_empty(&request.script),
            test: non_empty(&request.tests),
            docs: non_empty(&request.docs),
        }
    }
}
