//! Error types for Nexus
//!
//! Uses `thiserror` for library errors. Row-level import problems are data
//! (see `domain::services::import`), not errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;

/// Result type alias for Nexus operations
pub type NexusResult<T> = Result<T, NexusError>;

/// Main error type for Nexus operations
#[derive(Error, Debug)]
pub enum NexusError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No portfolio file at the given path
    #[error("portfolio not found: {path} (run 'nexus init' first)")]
    PortfolioNotFound { path: PathBuf },

    /// `init` would overwrite an existing portfolio
    #[error("portfolio already exists: {path} (use --force to overwrite)")]
    PortfolioExists { path: PathBuf },

    /// Portfolio file was written by an incompatible version
    #[error("portfolio {path} has version {found}, expected {expected}")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    /// Portfolio file exists but could not be parsed
    #[error("portfolio file is corrupted: {path}\n  → Details: {message}")]
    CorruptedPortfolio { path: PathBuf, message: String },

    /// No application matches the given id or code
    #[error("application not found: {key}")]
    ApplicationNotFound { key: String },

    /// An application cannot depend on itself
    #[error("application {code} cannot depend on itself")]
    SelfDependency { code: String },

    /// A field value given on the command line was not recognised
    #[error("invalid {field} '{value}': expected {expected}")]
    InvalidField {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl From<RepositoryError> for NexusError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { path } => NexusError::PortfolioNotFound { path },
            RepositoryError::Corrupted { path, message } => {
                NexusError::CorruptedPortfolio { path, message }
            }
            RepositoryError::VersionMismatch {
                path,
                found,
                expected,
            } => NexusError::VersionMismatch {
                path,
                found,
                expected,
            },
            RepositoryError::Io(e) => NexusError::Io(e),
        }
    }
}
