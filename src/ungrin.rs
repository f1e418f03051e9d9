//! Turning grin statements back into INI.
//!
//! Input may be any subset of grin output in any order, e.g. the result of
//! `grin config.ini | grep host`. The reconstructor groups what it gets by
//! section and writes the smallest INI document that holds it.

use std::io::{BufRead, Write};

use indexmap::IndexMap;

use crate::error::UngrinError;
use crate::ini::KeyValue;
use crate::lexer::lex_statement;
use crate::statement::{Statement, Statements};
use crate::token::{unquote, TokenKind};

/// Separator line that `grep -A/-B/-C` prints between groups of matches.
pub const FILTER_SEPARATOR: &str = "--";

/// Read grin assignment lines and lex each into a statement.
///
/// Blank lines and filter separators are skipped; the first line that fails
/// to lex aborts the read with its line number.
pub fn read_statements<R: BufRead>(reader: R) -> Result<Statements, UngrinError> {
    let mut statements = Statements::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == FILTER_SEPARATOR {
            continue;
        }

        let statement = lex_statement(trimmed).map_err(|source| UngrinError::Parse {
            line: idx + 1,
            source,
        })?;
        statements.push(statement);
    }

    tracing::debug!(statements = statements.len(), "read grin statements");
    Ok(statements)
}

/// Path and value of one statement, with the root segment removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub path: Vec<String>,
    pub value: AssignedValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignedValue {
    /// `{}`: a section or container declaration
    EmptyObject,
    /// A string value, already unquoted
    String(String),
}

/// Split a statement into its path and value.
///
/// A leading `root` segment is dropped. Returns `None` for statements that
/// carry no assignment.
pub fn extract_assignment(statement: &Statement, root: &str) -> Option<Assignment> {
    let mut path = Vec::new();
    let mut value = None;
    let mut found_equals = false;

    for token in statement.tokens() {
        match token.kind {
            TokenKind::Bare if !found_equals => path.push(token.text.clone()),
            TokenKind::Equals => found_equals = true,
            TokenKind::Str if found_equals => {
                value = Some(AssignedValue::String(unquote(&token.text)));
            }
            TokenKind::EmptyObject if found_equals => value = Some(AssignedValue::EmptyObject),
            _ => {}
        }
    }

    let value = value?;
    if path.first().is_some_and(|first| first == root) {
        path.remove(0);
    }
    Some(Assignment { path, value })
}

#[derive(Debug, Default)]
struct Section {
    keys: Vec<KeyValue>,
    /// Declared with `{}`; kept only while no key has been seen
    declared_empty: bool,
}

/// INI layout collected from statements, in first-seen order.
#[derive(Debug, Default)]
struct Layout {
    globals: Vec<KeyValue>,
    sections: IndexMap<String, Section>,
}

impl Layout {
    fn from_statements(statements: &[Statement], root: &str) -> Self {
        let mut layout = Self::default();

        for assignment in statements
            .iter()
            .filter_map(|s| extract_assignment(s, root))
        {
            let Assignment { mut path, value } = assignment;
            let Some(key) = path.pop() else {
                // The root declaration itself
                continue;
            };

            match value {
                AssignedValue::EmptyObject => {
                    path.push(key);
                    layout
                        .sections
                        .entry(path.join("."))
                        .or_insert_with(|| Section {
                            keys: Vec::new(),
                            declared_empty: true,
                        });
                }
                AssignedValue::String(value) if path.is_empty() => {
                    layout.globals.push(KeyValue { key, value });
                }
                AssignedValue::String(value) => {
                    let section = layout.sections.entry(path.join(".")).or_default();
                    section.declared_empty = false;
                    section.keys.push(KeyValue { key, value });
                }
            }
        }

        layout
    }
}

/// Write statements as INI text.
///
/// Global keys come first, then each section in the order it was first seen.
/// Sections are separated by a blank line; values are written unquoted.
pub fn write_ini<W: Write>(
    statements: &[Statement],
    root: &str,
    w: &mut W,
) -> std::io::Result<()> {
    let layout = Layout::from_statements(statements, root);
    let mut first = true;

    for kv in &layout.globals {
        writeln!(w, "{} = {}", kv.key, kv.value)?;
        first = false;
    }

    for (name, section) in &layout.sections {
        if section.keys.is_empty() && !section.declared_empty {
            continue;
        }
        if !first {
            writeln!(w)?;
        }
        first = false;
        writeln!(w, "[{name}]")?;
        for kv in &section.keys {
            writeln!(w, "{} = {}", kv.key, kv.value)?;
        }
    }

    tracing::debug!(
        globals = layout.globals.len(),
        sections = layout.sections.len(),
        "wrote ini document"
    );
    Ok(())
}
