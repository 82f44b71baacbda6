//! The folded document produced by parsing a Vellum file.
//!
//! A [`Document`] maps each block category to its content. It is built
//! fresh for every parse by merging one fragment per block, in file order,
//! with the rules of [`Merge`](crate::Merge).

mod auth;
mod body;
mod pair;

pub use auth::{
    ApiKeyAuth, Auth, AuthCredentials, AwsV4Auth, BasicAuth, BearerAuth, DigestAuth, NtlmAuth,
    WsseAuth,
};
pub use body::{Body, GraphqlBody};
pub use pair::{Pair, find_value};

use serde::{Deserialize, Serialize};

/// Block-categorized content of one file.
///
/// Absent and empty categories are omitted from the JSON rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// `meta` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Request line (`get`, `post`, ... or `http`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpSection>,

    /// `query` and `query:disabled` entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<Pair>,

    /// `headers` and `headers:disabled` entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Pair>,

    /// Body content by sub-mode.
    #[serde(skip_serializing_if = "Body::is_empty")]
    pub body: Body,

    /// `auth` and `auth:*` blocks.
    #[serde(skip_serializing_if = "Auth::is_empty")]
    pub auth: Auth,

    /// `vars` and `vars:disabled` entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<Pair>,

    /// `assertions` and `assertions:disabled` entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assertions: Vec<Pair>,

    /// `script` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// `test` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    /// `docs` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

crate::impl_merge!(Document {
    meta,
    http,
    query,
    headers,
    body,
    auth,
    vars,
    assertions,
    script,
    test,
    docs,
});

/// `meta` block: item name, kind and ordering.
///
/// `seq` is kept as written; numeric coercion happens when the document
/// is turned into an application object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Item kind (`http`, `graphql`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Sequence number within the parent folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
}

crate::impl_merge!(Meta { name, kind, seq });

/// Request line: verb, URL and the active body/auth modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Verb as written in the file (lower case for the standard verbs).
    pub method: String,

    /// Target URL; never validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Active body sub-mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Active auth mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

crate::impl_merge!(HttpSection {
    method,
    url,
    body,
    auth,
});
