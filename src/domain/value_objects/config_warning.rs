//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal problem found while loading `nexus.toml`, such as an unknown
/// key. Shown to the user, never fails the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, when found
    pub line: Option<usize>,
    /// Closest known key, when one is near enough
    pub suggestion: Option<String>,
}
