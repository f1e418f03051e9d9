//! Configuration file support for grin.
//!
//! This module provides:
//! - Loading configuration from `grin.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI args, config file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_config_file, load_config, ConfigError, CONFIG_FILE_NAME};
pub use init::{generate_init_file, generate_init_file_in, GRIN_TOML_TEMPLATE};
pub use merge::{merge_output_settings, CliOutputOptions};
pub use toml_schema::{GrinToml, OutputSection};
