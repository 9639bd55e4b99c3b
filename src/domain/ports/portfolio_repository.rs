//! PortfolioRepository port - abstraction for portfolio persistence
//!
//! The domain never sees the on-disk format. Loading a portfolio that does
//! not exist is an error; `nexus init` creates one.

use std::path::{Path, PathBuf};

use crate::domain::entities::Portfolio;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("portfolio not found: {path}")]
    NotFound { path: PathBuf },

    #[error("portfolio file is corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("unsupported portfolio version {found} in {path} (expected {expected})")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait PortfolioRepository {
    fn exists(&self, path: &Path) -> bool;

    fn load(&self, path: &Path) -> RepositoryResult<Portfolio>;

    /// Replace the stored portfolio. Readers never observe a partial write.
    fn save(&self, portfolio: &Portfolio, path: &Path) -> RepositoryResult<()>;
}
