//! Import staging
//!
//! Holds validated rows between upload and commit so individual rows can be
//! discarded. An uploaded row is a `RawRow` until `ImportBatch::new` stages
//! it as `Validated`. Commit consumes the batch, so a committed row has no
//! state left to observe and nothing can be committed twice.

use serde::Serialize;

use crate::domain::entities::{Application, Portfolio};

use super::import::{RowStatus, ValidatedRow};

/// Where a staged row is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    Validated(RowStatus),
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedRow {
    pub row: ValidatedRow,
    pub state: RowState,
}

impl StagedRow {
    fn is_committable(&self) -> bool {
        matches!(self.state, RowState::Validated(status) if status.is_committable())
    }
}

/// Result of committing a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub committed: usize,
    pub warnings: usize,
    pub rejected: usize,
    pub discarded: usize,
}

/// Counts over a staged batch, before commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StagingCounts {
    pub ok: usize,
    pub warning: usize,
    pub error: usize,
    pub discarded: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    rows: Vec<StagedRow>,
}

impl ImportBatch {
    pub fn new(rows: Vec<ValidatedRow>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| StagedRow {
                    state: RowState::Validated(row.status()),
                    row,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[StagedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop a staged row. Returns `false` if the index is out of range or the
    /// row was already discarded.
    pub fn discard(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(staged) if staged.state != RowState::Discarded => {
                staged.state = RowState::Discarded;
                true
            }
            _ => false,
        }
    }

    pub fn counts(&self) -> StagingCounts {
        let mut counts = StagingCounts::default();
        for staged in &self.rows {
            match staged.state {
                RowState::Validated(RowStatus::Ok) => counts.ok += 1,
                RowState::Validated(RowStatus::Warning) => counts.warning += 1,
                RowState::Validated(RowStatus::Error) => counts.error += 1,
                RowState::Discarded => counts.discarded += 1,
            }
        }
        counts
    }

    /// Candidates that would be committed, in row order
    pub fn committable(&self) -> impl Iterator<Item = &Application> {
        self.rows
            .iter()
            .filter(|s| s.is_committable())
            .filter_map(|s| s.row.candidate.as_ref())
    }

    /// Append every OK or WARNING candidate to the portfolio in one bulk add,
    /// preserving row order. Error and discarded rows are skipped.
    pub fn commit(self, portfolio: &mut Portfolio) -> ImportOutcome {
        let counts = self.counts();
        let candidates: Vec<Application> = self
            .rows
            .into_iter()
            .filter(|s| s.is_committable())
            .filter_map(|s| s.row.candidate)
            .collect();

        let outcome = ImportOutcome {
            committed: candidates.len(),
            warnings: counts.warning,
            rejected: counts.error,
            discarded: counts.discarded,
        };
        portfolio.bulk_add(candidates);
        outcome
    }
}
