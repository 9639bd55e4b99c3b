//! Import result types

use crate::domain::services::{ImportOutcome, StagedRow, StagingCounts};

#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Every row with its validation messages and final state
    pub rows: Vec<StagedRow>,
    pub counts: StagingCounts,
    /// `None` for a dry run
    pub outcome: Option<ImportOutcome>,
}

impl ImportResult {
    pub fn is_dry_run(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn committed(&self) -> usize {
        self.outcome.as_ref().map(|o| o.committed).unwrap_or(0)
    }

    /// True when no row was rejected
    pub fn is_clean(&self) -> bool {
        self.counts.error == 0
    }
}
