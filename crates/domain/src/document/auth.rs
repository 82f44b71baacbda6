//! Authentication settings carried by `auth` and `auth:*` blocks.
//!
//! Values are kept exactly as written; an unknown mode or an incomplete
//! credential set is preserved rather than rejected.

use serde::{Deserialize, Serialize};

/// Authentication section of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth {
    /// Selected mode (`none`, `inherit`, `basic`, `bearer`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Credentials for each mode that has a detail block.
    #[serde(flatten)]
    pub credentials: AuthCredentials,
}

crate::impl_merge!(Auth { mode, credentials });

impl Auth {
    /// Returns true if neither a mode nor any credentials are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.credentials.is_empty()
    }
}

/// Credentials keyed by auth mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthCredentials {
    /// `auth:basic`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAuth>,
    /// `auth:bearer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<BearerAuth>,
    /// `auth:digest`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<DigestAuth>,
    /// `auth:ntlm`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntlm: Option<NtlmAuth>,
    /// `auth:wsse`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wsse: Option<WsseAuth>,
    /// `auth:apikey`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<ApiKeyAuth>,
    /// `auth:awsv4`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awsv4: Option<AwsV4Auth>,
}

crate::impl_merge!(AuthCredentials {
    basic,
    bearer,
    digest,
    ntlm,
    wsse,
    apikey,
    awsv4,
});

impl AuthCredentials {
    /// Returns true if no credential block is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.basic.is_none()
            && self.bearer.is_none()
            && self.digest.is_none()
            && self.ntlm.is_none()
            && self.wsse.is_none()
            && self.apikey.is_none()
            && self.awsv4.is_none()
    }
}

/// HTTP Basic credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAuth {
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

crate::impl_merge!(BasicAuth { username, password });

/// Bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BearerAuth {
    /// Token value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

crate::impl_merge!(BearerAuth { token });

/// HTTP Digest credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestAuth {
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

crate::impl_merge!(DigestAuth { username, password });

/// NTLM credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NtlmAuth {
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Windows domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

crate::impl_merge!(NtlmAuth {
    username,
    password,
    domain,
});

/// WS-Security username token credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WsseAuth {
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

crate::impl_merge!(WsseAuth { username, password });

/// API key sent as a header or query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyAuth {
    /// Header or parameter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Key value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `header` or `queryparams`; kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

crate::impl_merge!(ApiKeyAuth {
    key,
    value,
    placement,
});

/// AWS Signature v4 settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsV4Auth {
    /// Access key id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Secret access key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    /// Session token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Named profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

crate::impl_merge!(AwsV4Auth {
    access_key_id,
    secret_access_key,
    session_token,
    service,
    region,
    profile_name,
});
