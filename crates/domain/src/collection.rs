//! Collection and folder root files.
//!
//! Both share one schema. A folder inherits authentication from its
//! collection, so its file never carries an `auth` section.

use serde::{Deserialize, Serialize};

use crate::document::{Auth, Document, Meta, Pair};
use crate::request::RequestAuth;
use crate::sequence;

/// Settings shared by every request below a collection or folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionRoot {
    /// Folder metadata; collections usually have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<FolderMeta>,

    /// Request defaults.
    pub request: CollectionRequest,

    /// Documentation.
    pub docs: String,
}

/// Name and ordering of a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderMeta {
    /// Display name.
    pub name: String,

    /// Sequence number, when one was written.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "sequence::deserialize_option"
    )]
    pub seq: Option<u32>,
}

/// Request defaults inherited by children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionRequest {
    /// Headers.
    pub headers: Vec<Pair>,
    /// Authentication.
    pub auth: RequestAuth,
    /// Script source.
    pub script: String,
    /// Variables.
    pub vars: Vec<Pair>,
    /// Test source.
    pub tests: String,
}

impl CollectionRoot {
    /// Builds the document for a collection (`is_folder == false`) or a
    /// folder (`is_folder == true`).
    #[must_use]
    pub fn to_document(&self, is_folder: bool) -> Document {
        let request = &self.request;
        let auth = if is_folder {
            Auth::default()
        } else {
            Auth {
                mode: Some(request.auth.mode.clone()),
                credentials: request.auth.credentials.clone(),
            }
        };

        Document {
            meta: self.meta.as_ref().map(|meta| Meta {
                name: Some(meta.name.clone()),
                kind: None,
                seq: meta.seq.map(|seq| seq.to_string()),
            }),
            headers: request.headers.clone(),
            auth,
            vars: request.vars.clone(),
            script: Some(request.script.clone()).filter(|s| !s.is_empty()),
            test: Some(request.tests.clone()).filter(|s| !s.is_empty()),
            docs: Some(self.docs.clone()).filter(|s| !s.is_empty()),
            ..Document::default()
        }
    }
}

impl From<Document> for CollectionRoot {
    fn from(doc: Document) -> Self {
        let meta = doc.meta.map(|meta| FolderMeta {
            name: meta.name.unwrap_or_default(),
            seq: meta.seq.as_deref().map(|seq| sequence::coerce(Some(seq))),
        });

        Self {
            meta,
            request: CollectionRequest {
                headers: doc.headers,
                auth: RequestAuth::from_document(doc.auth, None),
                script: doc.script.unwrap_or_default(),
                vars: doc.vars,
                tests: doc.test.unwrap_or_default(),
            },
            docs: doc.docs.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AuthCredentials, BearerAuth};
    use pretty_assertions::assert_eq;

    fn sample() -> CollectionRoot {
        CollectionRoot {
            meta: Some(FolderMeta {
                name: "Users".to_string(),
                seq: Some(2),
            }),
            request: CollectionRequest {
                headers: vec![Pair::new("x-tenant", "acme")],
                auth: RequestAuth {
                    mode: "bearer".to_string(),
                    credentials: AuthCredentials {
                        bearer: Some(BearerAuth {
                            token: Some("t0k3n".to_string()),
                        }),
                        ..AuthCredentials::default()
                    },
                },
                script: String::new(),
                vars: vec![Pair::new("userId", "1")],
                tests: String::new(),
            },
            docs: "Folder docs".to_string(),
        }
    }

    #[test]
    fn test_folder_omits_auth() {
        let doc = sample().to_document(true);
        assert!(doc.auth.is_empty());
        assert_eq!(doc.headers.len(), 1);
    }

    #[test]
    fn test_collection_keeps_auth() {
        let doc = sample().to_document(false);
        assert_eq!(doc.auth.mode.as_deref(), Some("bearer"));
        assert!(doc.auth.credentials.bearer.is_some());
    }

    #[test]
    fn test_collection_round_trips_through_document() {
        let root = sample();
        assert_eq!(CollectionRoot::from(root.to_document(false)), root);
    }

    #[test]
    fn test_folder_reads_back_with_inherited_mode_none() {
        let root = CollectionRoot::from(sample().to_document(true));
        assert_eq!(root.request.auth.mode, "none");
        assert_eq!(root.meta.map(|m| m.seq), Some(Some(2)));
    }

    #[test]
    fn test_meta_seq_is_optional() {
        let doc = Document {
            meta: Some(Meta {
                name: Some("Admin".to_string()),
                ..Meta::default()
            }),
            ..Document::default()
        };
        let root = CollectionRoot::from(doc);
        assert_eq!(
            root.meta,
            Some(FolderMeta {
                name: "Admin".to_string(),
                seq: None,
            })
        );
    }
}
