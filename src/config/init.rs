//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

/// Template grin.toml with documentation
pub const GRIN_TOML_TEMPLATE: &str = r#"# grin.toml - Configuration for grin
#
# grin turns INI files into one assignment per line so they can be
# searched with grep, and turns those assignments back with --ungrin:
#
#   grin config.ini | grep host | grin --ungrin
#
# grin looks for this file in the current directory and its parents,
# up to the root of the git repository. Command-line flags win over
# anything set here.

[output]
# Root name that every statement starts with.
# Default: "ini"
# root = "ini"

# Sort statements so sections and keys are grouped and alphabetized.
# Same as leaving out --no-sort.
# Default: true
# sort = true

# Colorize output. Leave unset to colorize only when writing to a
# terminal (and NO_COLOR is not set).
# colorize = false
"#;

/// Generate grin.toml in the specified directory (or current directory if None).
///
/// Returns an error if grin.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(
        || PathBuf::from(CONFIG_FILE_NAME),
        |d| d.join(CONFIG_FILE_NAME),
    );

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "grin.toml already exists",
        ));
    }

    fs::write(&path, GRIN_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate grin.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
