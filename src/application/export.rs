//! Export Use Case
//!
//! Writes the whole portfolio as flat CSV.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::ports::PortfolioRepository;
use crate::error::NexusResult;
use crate::infrastructure::csv_file::write_export;

/// `portfolio_export_YYYY-MM-DD.csv`
pub fn default_export_filename(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("portfolio_export_{}.csv", date.format("%Y-%m-%d")))
}

pub struct ExportUseCase<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> ExportUseCase<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the number of records written
    pub fn execute<W: Write>(&self, portfolio_path: &Path, writer: W) -> NexusResult<usize> {
        let portfolio = self.repository.load(portfolio_path)?;
        write_export(writer, portfolio.applications())?;
        tracing::info!(records = portfolio.len(), "exported portfolio");
        Ok(portfolio.len())
    }
}
