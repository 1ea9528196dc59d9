//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::MenuResult;

use super::loader::{self, ConfigWarning};

/// How a session draws itself
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Erase and redraw the menu in place
    #[serde(default = "default_true")]
    pub redraw: bool,

    /// Show the key guide before the first render
    #[serde(default = "default_true")]
    pub welcome: bool,

    #[serde(default)]
    pub color: ColorMode,

    /// Arrow glyphs in the footer and key guide
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            redraw: true,
            welcome: true,
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (MENUTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
