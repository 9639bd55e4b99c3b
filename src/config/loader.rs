//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{NexusError, NexusResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "nexus.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NexusResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NexusError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults. A config file that
/// fails to parse is reported as a warning and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = user_config_dir() {
        candidates.push(dir.join("nexus/config.toml"));
    }

    let mut warnings = Vec::new();
    for path in candidates.iter().filter(|p| p.exists()) {
        match load_with_warnings(path) {
            Ok((config, mut found)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                warnings.append(&mut found);
                return (with_env_overrides(config), warnings);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
            }
        }
    }

    (with_env_overrides(Config::default()), warnings)
}

/// Apply environment variable overrides (NEXUS_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // NEXUS_PORTFOLIO
    if let Ok(path) = std::env::var("NEXUS_PORTFOLIO") {
        if !path.trim().is_empty() {
            config.portfolio.path = PathBuf::from(path);
        }
    }

    // NEXUS_VERBOSITY
    if let Ok(verbosity) = std::env::var("NEXUS_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // NEXUS_UNICODE
    if let Ok(val) = std::env::var("NEXUS_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "portfolio",
        "path",
        "import",
        "default_owner",
        "default_domain",
        "output",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
