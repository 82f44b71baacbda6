//! Writes a [`Document`] back to the text format.
//!
//! Output is canonical: blocks appear in a fixed order, pairs are indented
//! by two spaces, blocks are separated by one blank line and the text ends
//! with a single newline. Absent and empty categories are left out.
//! Text-block content is indented by the two-space [`margin`], so no
//! content line can be mistaken for the closing `}`.

use vellum_domain::{AuthCredentials, Document, HttpSection, Meta, Pair};

use super::keyword::{Category, Keyword, VERBS};
use super::margin;

/// Renders a document as text.
#[must_use]
pub fn to_text(doc: &Document) -> String {
    let mut writer = Writer::default();

    if let Some(meta) = &doc.meta {
        writer.meta(meta);
    }
    if let Some(http) = &doc.http {
        writer.request_line(http);
    }
    writer.pair_runs(Category::Query, &doc.query);
    writer.pair_runs(Category::Headers, &doc.headers);

    if let Some(mode) = &doc.auth.mode {
        writer.keyed_block(Category::Auth, &[("mode", Some(mode))]);
    }
    writer.credentials(&doc.auth.credentials);

    let body = &doc.body;
    writer.text_block(Category::BodyJson, body.json.as_deref());
    writer.text_block(Category::BodyText, body.text.as_deref());
    writer.text_block(Category::BodyXml, body.xml.as_deref());
    if let Some(graphql) = &body.graphql {
        writer.text_block(Category::BodyGraphql, graphql.query.as_deref());
        writer.text_block(Category::BodyGraphqlVars, graphql.variables.as_deref());
    }
    writer.pair_runs(Category::BodyFormUrlEncoded, &body.form_url_encoded);
    writer.pair_runs(Category::BodyMultipartForm, &body.multipart_form);

    writer.pair_runs(Category::Vars, &doc.vars);
    writer.pair_runs(Category::Assertions, &doc.assertions);

    writer.text_block(Category::Script, doc.script.as_deref());
    writer.text_block(Category::Test, doc.test.as_deref());
    writer.text_block(Category::Docs, doc.docs.as_deref());

    writer.finish()
}

/// Removes line breaks so a value stays on its own line.
fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Removes whitespace and `:` so a name reads back as one key.
fn key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect()
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn open(&mut self, keyword: &str) {
        self.out.push_str(keyword);
        self.out.push_str(" {\n");
    }

    fn close(&mut self) {
        self.out.push_str("}\n\n");
    }

    /// Pairs whose name has nothing left after cleaning are skipped.
    fn pair(&mut self, name: &str, value: &str) {
        let name = key(name);
        if name.is_empty() {
            return;
        }
        self.out.push_str("  ");
        self.out.push_str(&name);
        self.out.push_str(": ");
        self.out.push_str(&single_line(value));
        self.out.push('\n');
    }

    fn keyed_block(&mut self, category: Category, entries: &[(&str, Option<&String>)]) {
        self.open(category.keyword());
        for (name, value) in entries {
            if let Some(value) = value {
                self.pair(name, value);
            }
        }
        self.close();
    }

    /// Writes each run of equally flagged pairs as its own block so that
    /// re-reading restores both order and flags.
    fn pair_runs(&mut self, category: Category, pairs: &[Pair]) {
        for run in pairs.chunk_by(|a, b| a.enabled == b.enabled) {
            let keyword = Keyword {
                category,
                disabled: !run[0].enabled,
            };
            self.open(&keyword.text());
            for pair in run {
                self.pair(&pair.name, &pair.value);
            }
            self.close();
        }
    }

    fn text_block(&mut self, category: Category, content: Option<&str>) {
        let Some(content) = content.filter(|c| !c.is_empty()) else {
            return;
        };
        self.open(category.keyword());
        self.out.push_str(&margin::indent(content));
        self.out.push('\n');
        self.close();
    }

    fn meta(&mut self, meta: &Meta) {
        self.keyed_block(
            Category::Meta,
            &[
                ("name", meta.name.as_ref()),
                ("type", meta.kind.as_ref()),
                ("seq", meta.seq.as_ref()),
            ],
        );
    }

    fn request_line(&mut self, http: &HttpSection) {
        let verb = http.method.to_lowercase();
        let entries = [
            ("url", http.url.as_ref()),
            ("body", http.body.as_ref()),
            ("auth", http.auth.as_ref()),
        ];
        if let Some(verb) = VERBS.into_iter().find(|v| *v == verb) {
            self.keyed_block(Category::Verb(verb), &entries);
        } else {
            let mut all = vec![("method", Some(&http.method))];
            all.extend(entries);
            self.keyed_block(Category::Http, &all);
        }
    }

    fn credentials(&mut self, credentials: &AuthCredentials) {
        if let Some(basic) = &credentials.basic {
            self.keyed_block(
                Category::AuthBasic,
                &[
                    ("username", basic.username.as_ref()),
                    ("password", basic.password.as_ref()),
                ],
            );
        }
        if let Some(bearer) = &credentials.bearer {
            self.keyed_block(Category::AuthBearer, &[("token", bearer.token.as_ref())]);
        }
        if let Some(digest) = &credentials.digest {
            self.keyed_block(
                Category::AuthDigest,
                &[
                    ("username", digest.username.as_ref()),
                    ("password", digest.password.as_ref()),
                ],
            );
        }
        if let Some(ntlm) = &credentials.ntlm {
            self.keyed_block(
                Category::AuthNtlm,
                &[
                    ("username", ntlm.username.as_ref()),
                    ("password", ntlm.password.as_ref()),
                    ("domain", ntlm.domain.as_ref()),
                ],
            );
        }
        if let Some(wsse) = &credentials.wsse {
            self.keyed_block(
                Category::AuthWsse,
                &[
                    ("username", wsse.username.as_ref()),
                    ("password", wsse.password.as_ref()),
                ],
            );
        }
        if let Some(apikey) = &credentials.apikey {
            self.keyed_block(
                Category::AuthApiKey,
                &[
                    ("key", apikey.key.as_ref()),
                    ("value", apikey.value.as_ref()),
                    ("placement", apikey.placement.as_ref()),
                ],
            );
        }
        if let Some(aws) = &credentials.awsv4 {
            self.keyed_block(
                Category::AuthAwsV4,
                &[
                    ("accessKeyId", aws.access_key_id.as_ref()),
                    ("secretAccessKey", aws.secret_access_key.as_ref()),
                    ("sessionToken", aws.session_token.as_ref()),
                    ("service", aws.service.as_ref()),
                    ("region", aws.region.as_ref()),
                    ("profileName", aws.profile_name.as_ref()),
                ],
            );
        }
    }

    fn finish(mut self) -> String {
        // Blocks end with a blank line; keep only one trailing newline.
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out
    }
}
