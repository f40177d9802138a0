//! KeyValues text reader
//!
//! `items_game.txt` is written in Valve's KeyValues 1 format: a tree of
//! quoted keys, each followed by either a quoted scalar or a brace-delimited
//! block of child pairs.
//!
//! ```text
//! "items_game"
//! {
//!     "item_sets"
//!     {
//!         "set_community_3"
//!         {
//!             "name"  "#CSGO_set_community_3"
//!             "items" { "[cu_tec9_asiimov]weapon_tec9" "1" }
//!         }
//!     }
//! }
//! ```
//!
//! Keys may repeat within a block; document order is preserved and lookups
//! return the first match.

use crate::{Error, Result};

/// A named node in a KeyValues document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

/// Node payload: a scalar string or an ordered list of child nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Children(Vec<KeyValue>),
}

impl KeyValue {
    /// Create a scalar node
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::String(value.into()),
        }
    }

    /// Create a block node
    pub fn block(key: impl Into<String>, children: Vec<KeyValue>) -> Self {
        Self {
            key: key.into(),
            value: Value::Children(children),
        }
    }

    /// First child with the given key
    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.children().iter().find(|child| child.key == key)
    }

    /// First scalar child with the given key
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.children()
            .iter()
            .filter(|child| child.key == key)
            .find_map(KeyValue::as_str)
    }

    /// Child nodes in document order (empty for scalars)
    pub fn children(&self) -> &[KeyValue] {
        match &self.value {
            Value::Children(children) => children,
            Value::String(_) => &[],
        }
    }

    /// Scalar value, if this node is not a block
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            Value::Children(_) => None,
        }
    }
}

/// Parse a KeyValues document into its top-level nodes
pub fn parse(text: &str) -> Result<Vec<KeyValue>> {
    let mut parser = Parser {
        lexer: Lexer::new(text),
    };
    parser.parse_pairs(None)
}

#[derive(Debug, PartialEq)]
enum Token {
    Open,
    Close,
    Text(String),
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        // Exported schemas sometimes carry a UTF-8 BOM
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            chars: text.chars().peekable(),
            line: 1,
        }
    }

    /// Next token and the line it started on, skipping platform conditionals
    fn next_token(&mut self) -> Result<Option<(Token, usize)>> {
        loop {
            let Some((token, line, quoted)) = self.raw_token()? else {
                return Ok(None);
            };
            if let Token::Text(ref word) = token {
                if !quoted && is_conditional(word) {
                    continue;
                }
            }
            return Ok(Some((token, line)));
        }
    }

    fn raw_token(&mut self) -> Result<Option<(Token, usize, bool)>> {
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.chars.next();
                }
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '{' => {
                    self.chars.next();
                    return Ok(Some((Token::Open, self.line, false)));
                }
                '}' => {
                    self.chars.next();
                    return Ok(Some((Token::Close, self.line, false)));
                }
                '"' => {
                    self.chars.next();
                    let line = self.line;
                    let text = self.quoted(line)?;
                    return Ok(Some((Token::Text(text), line, true)));
                }
                '/' => {
                    self.chars.next();
                    if self.chars.peek() == Some(&'/') {
                        self.skip_line();
                    } else {
                        let word = self.bare('/');
                        return Ok(Some((Token::Text(word), self.line, false)));
                    }
                }
                _ => {
                    self.chars.next();
                    let word = self.bare(c);
                    return Ok(Some((Token::Text(word), self.line, false)));
                }
            }
        }
        Ok(None)
    }

    fn quoted(&mut self, start: usize) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.chars.next() {
                None => return Err(parse_error(start, "unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => match self.chars.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('\\') => out.push('\\'),
                    Some('"') => out.push('"'),
                    Some(other) => {
                        if other == '\n' {
                            self.line += 1;
                        }
                        out.push('\\');
                        out.push(other);
                    }
                    None => return Err(parse_error(start, "unterminated string")),
                },
                Some('\n') => {
                    self.line += 1;
                    out.push('\n');
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn bare(&mut self, first: char) -> String {
        let mut out = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || matches!(c, '{' | '}' | '"') {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        out
    }

    fn skip_line(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }
}

/// Unquoted `[$WIN32]` / `[!$X360]` platform conditionals
fn is_conditional(word: &str) -> bool {
    word.starts_with('[') && word.ends_with(']') && word.contains('$')
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl Parser<'_> {
    /// Parse pairs until end of input (top level) or the closing brace of
    /// the block opened on `opened_at`
    fn parse_pairs(&mut self, opened_at: Option<usize>) -> Result<Vec<KeyValue>> {
        let mut pairs = Vec::new();

        loop {
            let Some((token, line)) = self.lexer.next_token()? else {
                return match opened_at {
                    Some(open_line) => Err(parse_error(open_line, "unclosed block")),
                    None => Ok(pairs),
                };
            };

            let key = match token {
                Token::Text(key) => key,
                Token::Close if opened_at.is_some() => return Ok(pairs),
                Token::Close => return Err(parse_error(line, "unexpected '}'")),
                Token::Open => return Err(parse_error(line, "block has no key")),
            };

            let value = match self.lexer.next_token()? {
                Some((Token::Text(value), _)) => Value::String(value),
                Some((Token::Open, open_line)) => Value::Children(self.parse_pairs(Some(open_line))?),
                Some((Token::Close, _)) | None => {
                    return Err(parse_error(line, format!("key '{}' has no value", key)));
                }
            };

            pairs.push(KeyValue { key, value });
        }
    }
}
