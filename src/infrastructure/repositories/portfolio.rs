//! JSON Portfolio Repository
//!
//! Persists the portfolio as a single pretty-printed JSON document:
//!
//! ```json
//! { "version": 1, "capabilities": [...], "domains": [...], "applications": [...] }
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{Application, Portfolio, Vocabulary};
use crate::domain::ports::{PortfolioRepository, RepositoryError, RepositoryResult};

/// On-disk format version
pub const PORTFOLIO_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PortfolioFile {
    version: u32,
    #[serde(default)]
    capabilities: Vocabulary,
    #[serde(default)]
    domains: Vocabulary,
    #[serde(default)]
    applications: Vec<Application>,
}

impl From<&Portfolio> for PortfolioFile {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            version: PORTFOLIO_VERSION,
            capabilities: portfolio.capabilities().clone(),
            domains: portfolio.domains().clone(),
            applications: portfolio.applications().to_vec(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPortfolioRepository;

impl JsonPortfolioRepository {
    pub fn new() -> Self {
        Self
    }
}

/// Write via a sibling temp file and rename, so a crash mid-write leaves the
/// previous document intact.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut tmp = NamedTempFile::new_in(&parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Invariants serde cannot express: ids are unique and no amount is negative.
fn check_integrity(apps: &[Application]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for app in apps {
        if !seen.insert(app.id.as_str()) {
            return Err(format!("duplicate application id '{}'", app.id));
        }
        let costs = [app.costs.license, app.costs.maintenance, app.costs.total];
        if costs.iter().any(|amount| !amount.is_finite() || *amount < 0.0) {
            return Err(format!("negative cost on application '{}'", app.code));
        }
    }
    Ok(())
}

impl PortfolioRepository for JsonPortfolioRepository {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> RepositoryResult<Portfolio> {
        if !path.exists() {
            return Err(RepositoryError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let file: PortfolioFile =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if file.version != PORTFOLIO_VERSION {
            return Err(RepositoryError::VersionMismatch {
                path: path.to_path_buf(),
                found: file.version,
                expected: PORTFOLIO_VERSION,
            });
        }

        check_integrity(&file.applications).map_err(|message| RepositoryError::Corrupted {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!(
            path = %path.display(),
            applications = file.applications.len(),
            "loaded portfolio"
        );
        Ok(Portfolio::from_parts(
            file.applications,
            file.capabilities,
            file.domains,
        ))
    }

    fn save(&self, portfolio: &Portfolio, path: &Path) -> RepositoryResult<()> {
        let file = PortfolioFile::from(portfolio);
        let mut content =
            serde_json::to_string_pretty(&file).map_err(|e| RepositoryError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        content.push('\n');

        write_atomic(path, content.as_bytes())?;
        tracing::debug!(
            path = %path.display(),
            applications = portfolio.len(),
            "saved portfolio"
        );
        Ok(())
    }
}
