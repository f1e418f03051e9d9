//! Make INI files greppable.
//!
//! `grin` flattens an INI document into one assignment per line:
//!
//! ```text
//! [database]                    ini = {};
//! host = localhost       =>     ini.database = {};
//!                               ini.database.host = "localhost";
//! ```
//!
//! and [`ungrin`] turns any subset of those lines back into INI.

pub mod colors;
pub mod config;
pub mod error;
pub mod identifier;
pub mod ini;
pub mod lexer;
mod output;
pub mod statement;
pub mod token;
pub mod ungrin;

pub use colors::{should_use_colors, Colors};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_output_settings, CliOutputOptions,
    ConfigError, GrinToml, OutputSection, GRIN_TOML_TEMPLATE,
};
pub use error::{IniError, LexError, RunError, UngrinError};
pub use identifier::is_identifier;
pub use ini::statements_from_ini;
pub use lexer::lex_statement;
pub use output::{write_statements, write_values, Config, Mode, OutputSettings};
pub use statement::{Statement, Statements};
pub use token::{quote, unquote, Token, TokenKind};
pub use ungrin::{read_statements, write_ini};

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Open the input named on the command line; `None` or `-` means stdin.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RunError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| RunError::OpenFile {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Main entry point: run one conversion from `input` to `output`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> Result<(), RunError> {
    let root = &config.output.root;
    if !is_identifier(root) {
        return Err(RunError::InvalidRoot(root.clone()));
    }

    match config.mode {
        Mode::Grin => grin(input, output, config)?,
        Mode::Ungrin => ungrin(input, output, config)?,
        Mode::Values => values(input, output, config)?,
    }

    output.flush().map_err(RunError::WriteOutput)
}

fn grin<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> Result<(), RunError> {
    let prefix = Statement::root(&config.output.root);
    let mut statements = statements_from_ini(input, &prefix)?;

    if config.output.sort {
        statements.sort();
    }

    write_statements(&statements, output, &config.colors()).map_err(RunError::WriteOutput)
}

fn ungrin<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> Result<(), RunError> {
    let statements = read_statements(input)?;
    write_ini(&statements, &config.output.root, output).map_err(RunError::WriteOutput)
}

fn values<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> Result<(), RunError> {
    let prefix = Statement::root(&config.output.root);
    let statements = statements_from_ini(input, &prefix)?;
    write_values(&statements, output).map_err(RunError::WriteOutput)
}
