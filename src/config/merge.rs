//! Configuration merging logic
//!
//! Priority: CLI args > grin.toml > defaults

use crate::colors::should_use_colors;
use crate::OutputSettings;

use super::toml_schema::OutputSection;

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliOutputOptions {
    pub root: Option<String>,
    /// If Some(true), keep first-seen order (inverted in config)
    pub no_sort: Option<bool>,
    /// If Some(true), force colors on
    pub colorize: Option<bool>,
    /// If Some(true), force colors off; wins over `colorize`
    pub monochrome: Option<bool>,
}

/// Merge configurations from CLI, TOML, and defaults.
///
/// Priority: CLI > TOML > defaults
pub fn merge_output_settings(
    cli: &CliOutputOptions,
    toml: Option<&OutputSection>,
) -> OutputSettings {
    let defaults = OutputSettings::default();

    OutputSettings {
        root: cli
            .root
            .clone()
            .or_else(|| toml.and_then(|t| t.root.clone()))
            .unwrap_or(defaults.root),
        sort: cli
            .no_sort
            .map(|no| !no)
            .or_else(|| toml.and_then(|t| t.sort))
            .unwrap_or(defaults.sort),
        colorize: should_use_colors(
            cli.colorize.unwrap_or(false),
            cli.monochrome.unwrap_or(false),
            toml.and_then(|t| t.colorize),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let cli = CliOutputOptions::default();
        let settings = merge_output_settings(&cli, None);

        assert_eq!(settings.root, "ini");
        assert!(settings.sort);
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let cli = CliOutputOptions::default();
        let toml = OutputSection {
            root: Some("conf".into()),
            sort: Some(false),
            colorize: Some(true),
        };

        let settings = merge_output_settings(&cli, Some(&toml));

        assert_eq!(settings.root, "conf");
        assert!(!settings.sort);
        assert!(settings.colorize);
    }

    #[test]
    fn test_merge_cli_overrides_toml() {
        let cli = CliOutputOptions {
            root: Some("cli".into()),
            no_sort: Some(true),
            colorize: None,
            monochrome: Some(true),
        };
        let toml = OutputSection {
            root: Some("conf".into()),
            sort: Some(true),
            colorize: Some(true),
        };

        let settings = merge_output_settings(&cli, Some(&toml));

        assert_eq!(settings.root, "cli"); // CLI wins
        assert!(!settings.sort); // --no-sort wins
        assert!(!settings.colorize); // --monochrome wins
    }

    #[test]
    fn test_merge_partial_toml_falls_back_to_defaults() {
        let cli = CliOutputOptions {
            colorize: Some(true),
            ..Default::default()
        };
        let toml = OutputSection {
            sort: Some(false),
            ..Default::default()
        };

        let settings = merge_output_settings(&cli, Some(&toml));

        assert_eq!(settings.root, "ini"); // default
        assert!(!settings.sort); // TOML
        assert!(settings.colorize); // CLI
    }
}
