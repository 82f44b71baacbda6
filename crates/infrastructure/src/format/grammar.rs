//! Recursive-descent parser for the Vellum block format.
//!
//! A file is a sequence of blocks:
//!
//! ```text
//! file      = ws* (block ws*)*
//! block     = keyword st* "{" (pairs | text)
//! pairs     = st* nl (blank | pair)* tagend
//! pair      = st* key st* ":" st* value? st*
//! text      = st* nl line* tagend
//! tagend    = nl "}"
//! key       = (~(ws | ":") any)+
//! value     = (~nl any)*
//! ```
//!
//! There is no escaping: a block ends at the first line that starts with
//! `}` in column 0, and a pair value runs to the end of its line. Text
//! lines are taken as written apart from a trailing `\r`.

use vellum_domain::ParseError;

use super::keyword::{Keyword, Shape};

/// Parsed file: blocks in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    /// Blocks in the order they appear.
    pub blocks: Vec<Block>,
}

/// One parsed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Keyword that opened the block.
    pub keyword: Keyword,
    /// Line of the keyword (1-based).
    pub line: usize,
    /// Block body.
    pub content: BlockContent,
}

/// Body of a block, by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// Entries of a pair-block.
    Pairs(Vec<PairLine>),
    /// Raw content of a text-block.
    Text(String),
}

/// One `key: value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairLine {
    /// Key, without whitespace or `:`.
    pub name: String,
    /// Value, trimmed.
    pub value: String,
}

/// Parses a whole file.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the first position where the input
/// does not match the grammar.
pub fn parse(text: &str) -> Result<ParseTree, ParseError> {
    Parser::new(text).parse_file()
}

fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error_at(&self, offset: usize, expected: impl Into<String>) -> ParseError {
        let before = &self.src[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        ParseError::new(line, column, expected)
    }

    fn line_of(&self, offset: usize) -> usize {
        self.src[..offset].matches('\n').count() + 1
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        let skipped = self
            .rest()
            .find(|c: char| !pred(c))
            .unwrap_or(self.rest().len());
        self.pos += skipped;
    }

    /// Returns the current line (without its newline) and moves past it.
    fn take_line(&mut self) -> (usize, &'a str) {
        let start = self.pos;
        let rest = self.rest();
        let (line, advance) = rest
            .find('\n')
            .map_or((rest, rest.len()), |i| (&rest[..i], i + 1));
        self.pos += advance;
        (start, line)
    }

    fn parse_file(mut self) -> Result<ParseTree, ParseError> {
        let mut blocks = Vec::new();
        loop {
            self.skip_while(char::is_whitespace);
            if self.at_end() {
                return Ok(ParseTree { blocks });
            }
            blocks.push(self.parse_block()?);
        }
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.pos;
        let word_len = self
            .rest()
            .find(|c: char| c.is_whitespace() || c == '{')
            .unwrap_or(self.rest().len());
        let word = &self.rest()[..word_len];
        if word.is_empty() {
            return Err(self.error_at(start, "block keyword"));
        }
        let keyword = Keyword::lookup(word)
            .ok_or_else(|| self.error_at(start, format!("block keyword, found \"{word}\"")))?;
        self.pos += word_len;

        self.skip_while(is_inline_space);
        if !self.rest().starts_with('{') {
            return Err(self.error_at(self.pos, format!("'{{' after \"{word}\"")));
        }
        self.pos += 1;

        let content = if self.rest().starts_with('}') {
            // `{}` on one line
            self.pos += 1;
            empty_content(keyword)
        } else {
            self.open_body(word)?;
            match keyword.category.shape() {
                Shape::Pairs => BlockContent::Pairs(self.parse_pairs(word)?),
                Shape::Text => BlockContent::Text(self.parse_text(word)?),
            }
        };

        Ok(Block {
            keyword,
            line: self.line_of(start),
            content,
        })
    }

    /// Consumes the remainder of the opening line, which must be blank.
    fn open_body(&mut self, word: &str) -> Result<(), ParseError> {
        self.skip_while(|c| c != '\n' && c.is_whitespace());
        if self.at_end() {
            return Err(self.error_at(self.pos, format!("'}}' closing \"{word}\" block")));
        }
        if !self.rest().starts_with('\n') {
            return Err(self.error_at(self.pos, "newline after '{'"));
        }
        self.pos += 1;
        Ok(())
    }

    fn parse_pairs(&mut self, word: &str) -> Result<Vec<PairLine>, ParseError> {
        let mut pairs = Vec::new();
        loop {
            if self.at_end() {
                return Err(self.error_at(self.pos, format!("'}}' closing \"{word}\" block")));
            }
            if self.close_tag() {
                return Ok(pairs);
            }
            let (offset, line) = self.take_line();
            if line.trim().is_empty() {
                continue;
            }
            pairs.push(self.parse_pair(offset, line)?);
        }
    }

    fn parse_pair(&self, offset: usize, line: &str) -> Result<PairLine, ParseError> {
        let body = line.trim_start();
        let body_offset = offset + (line.len() - body.len());

        let key_len = body
            .find(|c: char| c.is_whitespace() || c == ':')
            .unwrap_or(body.len());
        if key_len == 0 {
            return Err(self.error_at(body_offset, "key"));
        }
        let key = &body[..key_len];

        let after_key = &body[key_len..];
        let separator = after_key.trim_start();
        let separator_offset = body_offset + key_len + (after_key.len() - separator.len());
        let Some(value) = separator.strip_prefix(':') else {
            return Err(self.error_at(separator_offset, format!("':' after key \"{key}\"")));
        };

        Ok(PairLine {
            name: key.to_string(),
            value: value.trim().to_string(),
        })
    }

    fn parse_text(&mut self, word: &str) -> Result<String, ParseError> {
        let mut lines = Vec::new();
        loop {
            if self.at_end() {
                return Err(self.error_at(self.pos, format!("'}}' closing \"{word}\" block")));
            }
            if self.close_tag() {
                return Ok(lines.join("\n"));
            }
            let (_, line) = self.take_line();
            lines.push(line.strip_suffix('\r').unwrap_or(line));
        }
    }

    /// Consumes the tag-end `}` if the current line starts with it.
    fn close_tag(&mut self) -> bool {
        if self.rest().starts_with('}') {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

fn empty_content(keyword: Keyword) -> BlockContent {
    match keyword.category.shape() {
        Shape::Pairs => BlockContent::Pairs(Vec::new()),
        Shape::Text => BlockContent::Text(String::new()),
    }
}
