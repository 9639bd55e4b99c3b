//! Configuration module for Nexus
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NEXUS_*)
//! 3. Project config (./nexus.toml)
//! 4. User config ($XDG_CONFIG_HOME/nexus/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::PROJECT_CONFIG_FILE;
pub use types::{Config, ImportConfig, OutputConfig, PortfolioConfig, Verbosity};
