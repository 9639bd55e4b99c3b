//! Import Use Case
//!
//! 1. Load the portfolio
//! 2. Validate every row against it
//! 3. Stage the batch and discard skipped lines
//! 4. Commit in one bulk add and save, unless this is a dry run
//!
//! Nothing is written until every row has been validated.

use std::sync::Arc;

use crate::domain::ports::{NoopEventSink, PortfolioEvent, PortfolioEventSink, PortfolioRepository};
use crate::domain::services::{validate, ImportBatch, ImportContext, RawRow};
use crate::error::NexusResult;

use super::options::ImportOptions;
use super::result::ImportResult;

pub struct ImportUseCase<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> ImportUseCase<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, rows: Vec<RawRow>, options: &ImportOptions) -> NexusResult<ImportResult> {
        self.execute_with_events(rows, options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        rows: Vec<RawRow>,
        options: &ImportOptions,
        events: Arc<dyn PortfolioEventSink>,
    ) -> NexusResult<ImportResult> {
        let mut portfolio = self.repository.load(&options.portfolio_path)?;

        events.on_event(PortfolioEvent::ImportStarted {
            source: options.source.clone(),
            row_count: rows.len(),
        });
        tracing::info!(
            source = %options.source.display(),
            rows = rows.len(),
            "validating import"
        );

        let ctx = ImportContext::for_portfolio(&portfolio)
            .with_default_owner(options.default_owner.clone())
            .with_default_domain(options.default_domain.clone());

        let validated: Vec<_> = rows.iter().map(|row| validate(row, &ctx)).collect();
        if events.wants_detailed_events() {
            for row in &validated {
                events.on_event(PortfolioEvent::RowValidated {
                    line: row.line,
                    status: row.status(),
                    errors: row.errors.clone(),
                    warnings: row.warnings.clone(),
                });
            }
        }

        let mut batch = ImportBatch::new(validated);
        let skip: Vec<usize> = batch
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, staged)| options.skip_lines.contains(&staged.row.line))
            .map(|(index, _)| index)
            .collect();
        for index in skip {
            batch.discard(index);
        }

        let counts = batch.counts();
        let rows = batch.rows().to_vec();

        if options.dry_run {
            events.on_event(PortfolioEvent::ImportDiscarded { staged: batch.len() });
            tracing::info!(staged = batch.len(), "dry run, portfolio unchanged");
            return Ok(ImportResult {
                rows,
                counts,
                outcome: None,
            });
        }

        let outcome = batch.commit(&mut portfolio);
        if outcome.committed > 0 {
            self.repository.save(&portfolio, &options.portfolio_path)?;
        }

        events.on_event(PortfolioEvent::ImportCommitted {
            committed: outcome.committed,
            rejected: outcome.rejected,
            discarded: outcome.discarded,
        });
        tracing::info!(
            committed = outcome.committed,
            rejected = outcome.rejected,
            discarded = outcome.discarded,
            "import committed"
        );

        Ok(ImportResult {
            rows,
            counts,
            outcome: Some(outcome),
        })
    }
}
