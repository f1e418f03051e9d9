//! TOML schema definitions for grin.toml

use serde::{Deserialize, Serialize};

/// Root structure for grin.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GrinToml {
    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

/// `[output]` section in grin.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Root name of every statement (default: "ini")
    pub root: Option<String>,

    /// Sort grin output (default: true)
    pub sort: Option<bool>,

    /// Colorize output (default: auto-detect)
    pub colorize: Option<bool>,
}
