//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, UNASSIGNED};
use crate::error::NexusResult;

use super::loader;

/// Where the portfolio document lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_portfolio_path")]
    pub path: PathBuf,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            path: default_portfolio_path(),
        }
    }
}

fn default_portfolio_path() -> PathBuf {
    PathBuf::from("portfolio.json")
}

/// Fallbacks for optional import columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default = "default_owner")]
    pub default_owner: String,

    #[serde(default = "default_domain")]
    pub default_domain: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_owner: default_owner(),
            default_domain: default_domain(),
        }
    }
}

fn default_owner() -> String {
    UNASSIGNED.to_string()
}

fn default_domain() -> String {
    "General".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent number of `-v` flags
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    #[serde(default)]
    pub import: ImportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NexusResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NexusResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, else user config, else defaults; then env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (NEXUS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
