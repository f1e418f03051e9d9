//! INI reader: turns section/key/value text into grin statements.

use std::collections::HashSet;
use std::io::BufRead;

use indexmap::IndexMap;

use crate::error::IniError;
use crate::identifier::is_identifier;
use crate::statement::{Statement, Statements};

const BOM: char = '\u{feff}';

/// A parsed `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Keys of an INI document, grouped the way they will be emitted.
#[derive(Debug, Default)]
struct Document {
    /// Keys before the first section header
    globals: Vec<KeyValue>,
    /// Sections in first-seen order; repeated headers append to the same entry
    sections: IndexMap<String, Vec<KeyValue>>,
}

/// Read INI data and produce grin statements rooted at `prefix`.
///
/// Statements come out in document order: the root object, global keys, then
/// each section (preceded by any container declarations its path needs) with
/// its keys.
pub fn statements_from_ini<R: BufRead>(
    reader: R,
    prefix: &Statement,
) -> Result<Statements, IniError> {
    let mut doc = Document::default();
    let mut current_section: Option<String> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        let line = if idx == 0 { strip_bom(&line) } else { &line };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') {
            let name = parse_section_header(trimmed, line_num)?;
            doc.sections.entry(name.clone()).or_default();
            current_section = Some(name);
            continue;
        }

        let pair = parse_key_value(trimmed, line_num)?;
        match &current_section {
            Some(name) => doc.sections.entry(name.clone()).or_default().push(pair),
            None => doc.globals.push(pair),
        }
    }

    let statements = build_statements(prefix, &doc);
    tracing::debug!(
        globals = doc.globals.len(),
        sections = doc.sections.len(),
        statements = statements.len(),
        "read ini document"
    );
    Ok(statements)
}

fn build_statements(prefix: &Statement, doc: &Document) -> Statements {
    let mut statements = vec![prefix.with_empty_object()];

    for kv in &doc.globals {
        statements.push(prefix.with_bare(&kv.key).with_string_value(&kv.value));
    }

    let mut declared: HashSet<String> = HashSet::new();
    for (name, keys) in &doc.sections {
        // Every container on the way down to the section is declared once
        let mut partial = String::with_capacity(name.len());
        for part in name.split('.') {
            if !partial.is_empty() {
                partial.push('.');
            }
            partial.push_str(part);
            if declared.insert(partial.clone()) {
                statements.push(prefix.with_path(&partial).with_empty_object());
            }
        }

        let section = prefix.with_path(name);
        for kv in keys {
            statements.push(section.with_bare(&kv.key).with_string_value(&kv.value));
        }
    }

    statements
}

/// Parse a trimmed section header such as `[a.b.c]` into its dotted name.
fn parse_section_header(trimmed: &str, line: usize) -> Result<String, IniError> {
    let end = trimmed
        .find(']')
        .ok_or(IniError::UnclosedSection { line })?;
    let name = trimmed[1..end].trim();
    if name.is_empty() {
        return Err(IniError::EmptySectionName { line });
    }
    if let Some(part) = name.split('.').find(|part| !is_identifier(part)) {
        return Err(IniError::InvalidSectionName {
            line,
            part: part.to_string(),
        });
    }
    Ok(name.to_string())
}

/// Parse a trimmed `key = value` line, splitting on the first `=` only.
fn parse_key_value(trimmed: &str, line: usize) -> Result<KeyValue, IniError> {
    let (key, value) = trimmed
        .split_once('=')
        .ok_or_else(|| IniError::MissingEquals {
            line,
            text: trimmed.to_string(),
        })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(IniError::EmptyKey { line });
    }
    if !is_identifier(key) {
        return Err(IniError::InvalidKey {
            line,
            key: key.to_string(),
        });
    }
    Ok(KeyValue {
        key: key.to_string(),
        value: strip_quotes(value.trim()).to_string(),
    })
}

/// Remove a UTF-8 byte-order mark from the start of `s`.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(BOM).unwrap_or(s)
}

/// Remove one layer of matching single or double quotes around `s`.
pub fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
