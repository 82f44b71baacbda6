//! Request body content keyed by sub-mode.

use serde::{Deserialize, Serialize};

use super::Pair;

/// Body content of a document.
///
/// Each sub-mode is stored independently; a file may carry several of them
/// while the request line selects the active one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    /// Raw JSON text from `body:json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,

    /// Raw text from `body:text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw XML from `body:xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,

    /// Query and variables from `body:graphql` and `body:graphql:vars`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphqlBody>,

    /// Fields from `body:form-urlencoded` blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form_url_encoded: Vec<Pair>,

    /// Fields from `body:multipart-form` blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub multipart_form: Vec<Pair>,
}

crate::impl_merge!(Body {
    json,
    text,
    xml,
    graphql,
    form_url_encoded,
    multipart_form,
});

impl Body {
    /// Returns true if no sub-mode carries content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.json.is_none()
            && self.text.is_none()
            && self.xml.is_none()
            && self.graphql.is_none()
            && self.form_url_encoded.is_empty()
            && self.multipart_form.is_empty()
    }
}

/// GraphQL body, assembled from two separate text-blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphqlBody {
    /// The query document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// The variables, as raw JSON text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

crate::impl_merge!(GraphqlBody { query, variables });
