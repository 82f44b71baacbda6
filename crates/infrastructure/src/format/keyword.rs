//! Block keywords and their shapes.

/// Verbs that have their own request-line keyword.
pub const VERBS: [&str; 9] = [
    "get", "post", "put", "delete", "patch", "options", "head", "connect", "trace",
];

/// Suffix that marks every pair of a block as disabled.
pub const DISABLED_SUFFIX: &str = ":disabled";

/// Structural shape of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Brace-delimited `key: value` lines.
    Pairs,
    /// Brace-delimited raw text.
    Text,
}

/// Block category named by a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `meta`
    Meta,
    /// Request line named after its verb (`get`, `post`, ...).
    Verb(&'static str),
    /// Request line with an explicit `method` entry.
    Http,
    /// `query`
    Query,
    /// `headers`
    Headers,
    /// `auth`
    Auth,
    /// `auth:basic`
    AuthBasic,
    /// `auth:bearer`
    AuthBearer,
    /// `auth:digest`
    AuthDigest,
    /// `auth:ntlm`
    AuthNtlm,
    /// `auth:wsse`
    AuthWsse,
    /// `auth:apikey`
    AuthApiKey,
    /// `auth:awsv4`
    AuthAwsV4,
    /// `body:json`
    BodyJson,
    /// `body:text`
    BodyText,
    /// `body:xml`
    BodyXml,
    /// `body:graphql`
    BodyGraphql,
    /// `body:graphql:vars`
    BodyGraphqlVars,
    /// `body:form-urlencoded`
    BodyFormUrlEncoded,
    /// `body:multipart-form`
    BodyMultipartForm,
    /// `vars`
    Vars,
    /// `assertions`
    Assertions,
    /// `script`
    Script,
    /// `test`
    Test,
    /// `docs`
    Docs,
}

impl Category {
    /// Canonical keyword written by the serializer.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Verb(verb) => verb,
            Self::Http => "http",
            Self::Query => "query",
            Self::Headers => "headers",
            Self::Auth => "auth",
            Self::AuthBasic => "auth:basic",
            Self::AuthBearer => "auth:bearer",
            Self::AuthDigest => "auth:digest",
            Self::AuthNtlm => "auth:ntlm",
            Self::AuthWsse => "auth:wsse",
            Self::AuthApiKey => "auth:apikey",
            Self::AuthAwsV4 => "auth:awsv4",
            Self::BodyJson => "body:json",
            Self::BodyText => "body:text",
            Self::BodyXml => "body:xml",
            Self::BodyGraphql => "body:graphql",
            Self::BodyGraphqlVars => "body:graphql:vars",
            Self::BodyFormUrlEncoded => "body:form-urlencoded",
            Self::BodyMultipartForm => "body:multipart-form",
            Self::Vars => "vars",
            Self::Assertions => "assertions",
            Self::Script => "script",
            Self::Test => "test",
            Self::Docs => "docs",
        }
    }

    /// Shape of the block body.
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Self::BodyJson
            | Self::BodyText
            | Self::BodyXml
            | Self::BodyGraphql
            | Self::BodyGraphqlVars
            | Self::Script
            | Self::Test
            | Self::Docs => Shape::Text,
            _ => Shape::Pairs,
        }
    }

    /// Whether the keyword accepts the `:disabled` suffix.
    #[must_use]
    pub const fn allows_disabled(self) -> bool {
        matches!(
            self,
            Self::Query
                | Self::Headers
                | Self::BodyFormUrlEncoded
                | Self::BodyMultipartForm
                | Self::Vars
                | Self::Assertions
        )
    }

    const ALL: [Self; 24] = [
        Self::Meta,
        Self::Http,
        Self::Query,
        Self::Headers,
        Self::Auth,
        Self::AuthBasic,
        Self::AuthBearer,
        Self::AuthDigest,
        Self::AuthNtlm,
        Self::AuthWsse,
        Self::AuthApiKey,
        Self::AuthAwsV4,
        Self::BodyJson,
        Self::BodyText,
        Self::BodyXml,
        Self::BodyGraphql,
        Self::BodyGraphqlVars,
        Self::BodyFormUrlEncoded,
        Self::BodyMultipartForm,
        Self::Vars,
        Self::Assertions,
        Self::Script,
        Self::Test,
        Self::Docs,
    ];
}

/// A keyword as read from a file: category plus the disabled marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    /// Block category.
    pub category: Category,
    /// Whether the keyword carried `:disabled`.
    pub disabled: bool,
}

impl Keyword {
    /// Looks up a keyword token. Returns `None` for unknown words.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        if let Some(base) = word.strip_suffix(DISABLED_SUFFIX) {
            return category_of(base)
                .filter(|category| category.allows_disabled())
                .map(|category| Self {
                    category,
                    disabled: true,
                });
        }
        category_of(word).map(|category| Self {
            category,
            disabled: false,
        })
    }

    /// Text form, including the `:disabled` suffix when set.
    #[must_use]
    pub fn text(self) -> String {
        if self.disabled {
            format!("{}{DISABLED_SUFFIX}", self.category.keyword())
        } else {
            self.category.keyword().to_string()
        }
    }
}

fn category_of(word: &str) -> Option<Category> {
    if let Some(verb) = VERBS.into_iter().find(|verb| *verb == word) {
        return Some(Category::Verb(verb));
    }
    if word == "tests" {
        return Some(Category::Test);
    }
    Category::ALL
        .into_iter()
        .find(|category| category.keyword() == word)
}
