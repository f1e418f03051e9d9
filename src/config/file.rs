//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::toml_schema::GrinToml;

pub const CONFIG_FILE_NAME: &str = "grin.toml";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Find grin.toml by searching upward from the given directory.
///
/// Stops at the first `grin.toml` found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(CONFIG_FILE_NAME);
        if file_path.exists() {
            return Some(file_path);
        }

        if current.join(".git").exists() || !current.pop() {
            return None;
        }
    }
}

/// Load and parse grin.toml from the given path.
pub fn load_config(path: &Path) -> Result<GrinToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GrinToml = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(&config_path, "[output]\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join("grin.toml");
        fs::write(&config_path, "[output]\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let parent = TempDir::new().unwrap();
        fs::write(parent.path().join("grin.toml"), "[output]\n").unwrap();

        // The repository below the config marks where the search ends
        let repo = parent.path().join("repo");
        fs::create_dir(&repo).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();
        let subdir = repo.join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(&config_path, "[output]\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_closer() {
        let parent = TempDir::new().unwrap();
        let parent_config = parent.path().join("grin.toml");
        fs::write(&parent_config, "[output]\nsort = false\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();
        let child_config = child.join("grin.toml");
        fs::write(&child_config, "[output]\nsort = true\n").unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(child_config));
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(
            &config_path,
            r#"
[output]
root = "conf"
sort = false
colorize = true
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.output.root.as_deref(), Some("conf"));
        assert_eq!(config.output.sort, Some(false));
        assert_eq!(config.output.colorize, Some(true));
    }

    #[test]
    fn test_load_config_partial() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(&config_path, "[output]\nsort = false\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.output.root, None);
        assert_eq!(config.output.sort, Some(false));
        assert_eq!(config.output.colorize, None);
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.output.root, None);
        assert_eq!(config.output.sort, None);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("grin.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&dir.path().join("grin.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_error_messages_and_source() {
        use std::error::Error as _;

        let err = ConfigError::from(io::Error::other("permission denied"));
        assert_eq!(
            err.to_string(),
            "failed to read config file: permission denied"
        );
        assert!(err.source().is_some());

        let err = ConfigError::from(toml::from_str::<GrinToml>("root = ").unwrap_err());
        assert!(err.to_string().starts_with("failed to parse config file: "));
        assert!(err.source().is_some());
    }
}
