use std::io::{self, Write};

use crate::colors::Colors;
use crate::statement::Statement;
use crate::token::{unquote, TokenKind};

/// Which conversion to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// INI to grin statements
    Grin,
    /// grin statements back to INI
    Ungrin,
    /// Just the values of the INI's assignments
    Values,
}

/// Output settings after merging CLI flags, grin.toml and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub root: String,
    pub sort: bool,
    pub colorize: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            root: "ini".to_string(),
            sort: true,
            colorize: false,
        }
    }
}

pub struct Config {
    pub mode: Mode,
    pub output: OutputSettings,
}

impl Config {
    pub fn new(mode: Mode, output: OutputSettings) -> Self {
        Self { mode, output }
    }

    pub fn colors(&self) -> Colors {
        Colors::new(self.output.colorize)
    }
}

/// Write one rendered statement per line.
pub fn write_statements<W: Write>(
    statements: &[Statement],
    w: &mut W,
    colors: &Colors,
) -> io::Result<()> {
    for statement in statements {
        if colors.enabled() {
            writeln!(w, "{}", statement.render_colored(colors))?;
        } else {
            writeln!(w, "{}", statement.render())?;
        }
    }
    Ok(())
}

/// Write the unquoted string value of every statement, one per line.
pub fn write_values<W: Write>(statements: &[Statement], w: &mut W) -> io::Result<()> {
    for token in statements
        .iter()
        .flat_map(Statement::tokens)
        .filter(|t| t.kind == TokenKind::Str)
    {
        writeln!(w, "{}", unquote(&token.text))?;
    }
    Ok(())
}
