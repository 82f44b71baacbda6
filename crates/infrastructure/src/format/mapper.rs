//! Folds a parse tree into a [`Document`].
//!
//! Every block becomes a fragment that is merged into the accumulator in
//! file order. Scalars from later blocks win; lists are concatenated, so
//! `headers` followed by `headers:disabled` yields one list holding both.

use vellum_domain::document::find_value;
use vellum_domain::{
    ApiKeyAuth, AuthCredentials, AwsV4Auth, BasicAuth, BearerAuth, DigestAuth, Document,
    GraphqlBody, HttpSection, Merge, Meta, NtlmAuth, Pair, WsseAuth,
};

use super::grammar::{Block, BlockContent, PairLine, ParseTree};
use super::keyword::Category;
use super::margin;

/// Builds the document for a parse tree.
#[must_use]
pub fn to_document(tree: ParseTree) -> Document {
    tree.blocks
        .into_iter()
        .fold(Document::default(), |mut doc, block| {
            doc.merge(fragment(block));
            doc
        })
}

fn fragment(block: Block) -> Document {
    let category = block.keyword.category;
    let enabled = !block.keyword.disabled;

    match block.content {
        BlockContent::Text(text) => text_fragment(category, margin::outdent(&text)),
        BlockContent::Pairs(lines) => {
            let pairs = lines
                .into_iter()
                .map(|PairLine { name, value }| Pair {
                    name,
                    value,
                    enabled,
                })
                .collect();
            pair_fragment(category, pairs)
        }
    }
}

fn text_fragment(category: Category, text: String) -> Document {
    let mut doc = Document::default();
    match category {
        Category::BodyJson => doc.body.json = Some(text),
        Category::BodyText => doc.body.text = Some(text),
        Category::BodyXml => doc.body.xml = Some(text),
        Category::BodyGraphql => {
            doc.body.graphql = Some(GraphqlBody {
                query: Some(text),
                variables: None,
            });
        }
        Category::BodyGraphqlVars => {
            doc.body.graphql = Some(GraphqlBody {
                query: None,
                variables: Some(text),
            });
        }
        Category::Script => doc.script = Some(text),
        Category::Test => doc.test = Some(text),
        Category::Docs => doc.docs = Some(text),
        // Pair-shaped categories never carry text.
        _ => {}
    }
    doc
}

fn get(pairs: &[Pair], name: &str) -> Option<String> {
    find_value(pairs, name).map(str::to_string)
}

fn pair_fragment(category: Category, pairs: Vec<Pair>) -> Document {
    let mut doc = Document::default();
    match category {
        Category::Meta => {
            doc.meta = Some(Meta {
                name: get(&pairs, "name"),
                kind: get(&pairs, "type"),
                seq: get(&pairs, "seq"),
            });
        }
        Category::Verb(verb) => doc.http = Some(request_line(verb.to_string(), &pairs)),
        Category::Http => {
            let method = get(&pairs, "method").unwrap_or_default();
            doc.http = Some(request_line(method, &pairs));
        }
        Category::Query => doc.query = pairs,
        Category::Headers => doc.headers = pairs,
        Category::BodyFormUrlEncoded => doc.body.form_url_encoded = pairs,
        Category::BodyMultipartForm => doc.body.multipart_form = pairs,
        Category::Vars => doc.vars = pairs,
        Category::Assertions => doc.assertions = pairs,
        Category::Auth => doc.auth.mode = get(&pairs, "mode"),
        _ => doc.auth.credentials = credentials(category, &pairs),
    }
    doc
}

fn request_line(method: String, pairs: &[Pair]) -> HttpSection {
    HttpSection {
        method,
        url: get(pairs, "url"),
        body: get(pairs, "body"),
        auth: get(pairs, "auth"),
    }
}

fn credentials(category: Category, pairs: &[Pair]) -> AuthCredentials {
    let mut credentials = AuthCredentials::default();
    match category {
        Category::AuthBasic => {
            credentials.basic = Some(BasicAuth {
                username: get(pairs, "username"),
                password: get(pairs, "password"),
            });
        }
        Category::AuthBearer => {
            credentials.bearer = Some(BearerAuth {
                token: get(pairs, "token"),
            });
        }
        Category::AuthDigest => {
            credentials.digest = Some(DigestAuth {
                username: get(pairs, "username"),
                password: get(pairs, "password"),
            });
        }
        Category::AuthNtlm => {
            credentials.ntlm = Some(NtlmAuth {
                username: get(pairs, "username"),
                password: get(pairs, "password"),
                domain: get(pairs, "domain"),
            });
        }
        Category::AuthWsse => {
            credentials.wsse = Some(WsseAuth {
                username: get(pairs, "username"),
                password: get(pairs, "password"),
            });
        }
        Category::AuthApiKey => {
            credentials.apikey = Some(ApiKeyAuth {
                key: get(pairs, "key"),
                value: get(pairs, "value"),
                placement: get(pairs, "placement"),
            });
        }
        Category::AuthAwsV4 => {
            credentials.awsv4 = Some(AwsV4Auth {
                access_key_id: get(pairs, "accessKeyId"),
                secret_access_key: get(pairs, "secretAccessKey"),
                session_token: get(pairs, "sessionToken"),
                service: get(pairs, "service"),
                region: get(pairs, "region"),
                profile_name: get(pairs, "profileName"),
            });
        }
        _ => {}
    }
    credentials
}
