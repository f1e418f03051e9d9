//! Grin statements: one line of the flat assignment notation.
//!
//! A statement is a dotted path of bare words, an assignment and a value,
//! e.g. `ini.section.key = "value";`. Statements are built by appending to a
//! prefix; every builder returns a new statement and leaves its receiver alone.

use std::cmp::Ordering;

use crate::colors::Colors;
use crate::token::{Token, TokenKind};

/// An ordered list of tokens representing one grin assignment line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Statement {
    tokens: Vec<Token>,
}

/// A full document: statements in emission order, sortable with [`Statement`]'s `Ord`.
pub type Statements = Vec<Statement>;

impl Statement {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// A statement holding just the root name, e.g. `ini`.
    pub fn root(name: &str) -> Self {
        Self::new(vec![Token::bare(name)])
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn extended(&self, extra: usize) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.tokens.len() + extra);
        tokens.extend_from_slice(&self.tokens);
        tokens
    }

    /// Append `.key`.
    pub fn with_bare(&self, key: &str) -> Self {
        let mut tokens = self.extended(2);
        tokens.push(Token::dot());
        tokens.push(Token::bare(key));
        Self::new(tokens)
    }

    /// Append a dotted path such as `section.subsection`, one bare word per segment.
    pub fn with_path(&self, dotted: &str) -> Self {
        let segments = dotted.split('.');
        let mut tokens = self.extended(2 * segments.clone().count());
        for segment in segments {
            tokens.push(Token::dot());
            tokens.push(Token::bare(segment));
        }
        Self::new(tokens)
    }

    /// Append ` = <value>;`.
    pub fn with_value(&self, value: Token) -> Self {
        let mut tokens = self.extended(3);
        tokens.push(Token::equals());
        tokens.push(value);
        tokens.push(Token::semi());
        Self::new(tokens)
    }

    /// Append ` = {};`.
    pub fn with_empty_object(&self) -> Self {
        self.with_value(Token::empty_object())
    }

    /// Append ` = "<value>";` with `value` quoted and escaped.
    pub fn with_string_value(&self, value: &str) -> Self {
        self.with_value(Token::string(value))
    }

    /// Render as plain text.
    pub fn render(&self) -> String {
        self.tokens.iter().map(Token::format).collect()
    }

    /// Render with ANSI styles per token kind.
    pub fn render_colored(&self, colors: &Colors) -> String {
        self.tokens.iter().map(|t| t.format_color(colors)).collect()
    }
}

impl FromIterator<Token> for Statement {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Sort key of one token. Assignments come first so that `ini = {};` sorts
// before `ini.x = ...;`; the kind is a tiebreak that keeps `Ord` consistent with `Eq`.
fn token_key(token: &Token) -> (bool, &str, TokenKind) {
    (token.kind != TokenKind::Equals, &token.text, token.kind)
}

impl Ord for Statement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .iter()
            .map(token_key)
            .cmp(other.tokens.iter().map(token_key))
    }
}

impl PartialOrd for Statement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
