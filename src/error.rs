//! Error types for both conversion directions and the CLI run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::token::Token;

/// Failure while reading an INI document into statements.
///
/// Every structural error carries the 1-based line number of the offending line.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("line {line}: unclosed section header")]
    UnclosedSection { line: usize },

    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    #[error("line {line}: invalid section name part {part:?}")]
    InvalidSectionName { line: usize, part: String },

    #[error("line {line}: expected key = value, got {text:?}")]
    MissingEquals { line: usize, text: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: invalid key {key:?}")]
    InvalidKey { line: usize, key: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl IniError {
    /// Line number of a structural error; `None` for read failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::UnclosedSection { line }
            | IniError::EmptySectionName { line }
            | IniError::InvalidSectionName { line, .. }
            | IniError::MissingEquals { line, .. }
            | IniError::EmptyKey { line }
            | IniError::InvalidKey { line, .. } => Some(*line),
            IniError::Io(_) => None,
        }
    }
}

/// Failure to lex one grin statement.
///
/// `found` is an error token holding the offending character, or empty text
/// when the line ended early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column {column}: expected {expected}, got {}", describe_found(.found))]
pub struct LexError {
    pub expected: &'static str,
    pub found: Token,
    pub column: usize,
}

fn describe_found(found: &Token) -> String {
    if found.text.is_empty() {
        "end of input".to_string()
    } else {
        format!("{:?}", found.text)
    }
}

impl LexError {
    pub fn at_end_of_input(&self) -> bool {
        self.found.text.is_empty()
    }
}

/// Failure while reading grin statements back.
#[derive(Debug, Error)]
pub enum UngrinError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: LexError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure of one CLI conversion, carrying its process exit code.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading input: {0}")]
    ReadInput(#[source] io::Error),

    #[error("forming statements: {0}")]
    FormStatements(#[source] IniError),

    #[error("invalid root name {0:?}: must be a bare identifier")]
    InvalidRoot(String),

    #[error("parsing statements: {0}")]
    ParseStatements(#[source] UngrinError),

    #[error("writing output: {0}")]
    WriteOutput(#[source] io::Error),
}

impl RunError {
    pub const EXIT_OPEN_FILE: u8 = 1;
    pub const EXIT_READ_INPUT: u8 = 2;
    pub const EXIT_FORM_STATEMENTS: u8 = 3;
    pub const EXIT_INVALID_CONFIG: u8 = 4;
    pub const EXIT_PARSE_STATEMENTS: u8 = 5;
    pub const EXIT_WRITE_OUTPUT: u8 = 6;

    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::OpenFile { .. } => Self::EXIT_OPEN_FILE,
            RunError::ReadInput(_) => Self::EXIT_READ_INPUT,
            RunError::FormStatements(_) => Self::EXIT_FORM_STATEMENTS,
            RunError::InvalidRoot(_) => Self::EXIT_INVALID_CONFIG,
            RunError::ParseStatements(_) => Self::EXIT_PARSE_STATEMENTS,
            RunError::WriteOutput(_) => Self::EXIT_WRITE_OUTPUT,
        }
    }

    /// The consumer of our output went away, e.g. `grin big.ini | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RunError::WriteOutput(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<IniError> for RunError {
    fn from(e: IniError) -> Self {
        match e {
            IniError::Io(e) => RunError::ReadInput(e),
            e => RunError::FormStatements(e),
        }
    }
}

impl From<UngrinError> for RunError {
    fn from(e: UngrinError) -> Self {
        match e {
            UngrinError::Io(e) => RunError::ReadInput(e),
            e => RunError::ParseStatements(e),
        }
    }
}
