//! Lexer for grin assignment lines.
//!
//! Grammar of one line:
//!
//! ```text
//! Statement := Path "=" Value ";"
//! Path      := BareWord ( "." BareWord )*
//! Value     := String | "{}"
//! ```
//!
//! Whitespace is allowed around `.`, `=` and `;`. The scan works on decoded
//! characters with one character of lookahead, and emits tokens as soon as
//! each element is recognized.

use crate::error::LexError;
use crate::identifier::{is_ident_continue, is_ident_start};
use crate::statement::Statement;
use crate::token::{Token, TokenKind};

struct Lexer {
    input: Vec<char>,
    pos: usize,
    /// Width (0 or 1) of the last character returned by `next`
    width: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            width: 0,
            tokens: Vec::new(),
        }
    }

    fn next(&mut self) -> Option<char> {
        match self.input.get(self.pos) {
            Some(&c) => {
                self.width = 1;
                self.pos += 1;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    fn emit(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens.push(Token::new(kind, text));
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.pos].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    /// Error for the character just returned by `next` (`None` at end of input).
    fn error(&self, expected: &'static str, found: Option<char>) -> LexError {
        let (text, column) = match found {
            Some(c) => (c.to_string(), self.pos),
            None => (String::new(), self.pos + 1),
        };
        LexError {
            expected,
            found: Token::new(TokenKind::Error, text),
            column,
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), LexError> {
        match self.next() {
            Some(c) if c == want => Ok(()),
            other => Err(self.error(expected, other)),
        }
    }

    fn lex_bare_word(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        match self.next() {
            Some(c) if is_ident_start(c) => {}
            other => return Err(self.error("identifier", other)),
        }
        while self.peek().is_some_and(is_ident_continue) {
            self.next();
        }
        let word = self.text_from(start);
        self.emit(TokenKind::Bare, word);
        Ok(())
    }

    fn lex_value(&mut self) -> Result<(), LexError> {
        match self.peek() {
            Some('"') => self.lex_string(),
            Some('{') => self.lex_braces(),
            _ => {
                let found = self.next();
                Err(self.error("'\"' or '{}'", found))
            }
        }
    }

    fn lex_string(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.expect('"', "'\"'")?;
        loop {
            match self.next() {
                None => return Err(self.error("closing '\"'", None)),
                // The escaped character is consumed with its backslash
                Some('\\') => {
                    self.next();
                }
                Some('"') => break,
                Some(_) => {}
            }
        }
        let text = self.text_from(start);
        self.emit(TokenKind::Str, text);
        Ok(())
    }

    fn lex_braces(&mut self) -> Result<(), LexError> {
        self.expect('{', "'{'")?;
        self.expect('}', "'}'")?;
        self.emit(TokenKind::EmptyObject, "{}");
        Ok(())
    }
}

/// Lex one grin assignment line into a statement.
///
/// The `=` is re-rendered as ` = ` whatever spacing the input used, so a
/// parsed statement renders in canonical form. Anything after the final `;`
/// is ignored.
pub fn lex_statement(line: &str) -> Result<Statement, LexError> {
    let mut l = Lexer::new(line);

    l.skip_whitespace();
    l.lex_bare_word()?;

    loop {
        l.skip_whitespace();
        if l.peek() != Some('.') {
            break;
        }
        l.next();
        l.emit(TokenKind::Dot, ".");
        l.skip_whitespace();
        l.lex_bare_word()?;
    }

    l.skip_whitespace();
    l.expect('=', "'='")?;
    l.emit(TokenKind::Equals, " = ");

    l.skip_whitespace();
    l.lex_value()?;

    l.skip_whitespace();
    l.expect(';', "';'")?;
    l.emit(TokenKind::Semi, ";");

    tracing::trace!(tokens = l.tokens.len(), "lexed statement");
    Ok(Statement::new(l.tokens))
}
