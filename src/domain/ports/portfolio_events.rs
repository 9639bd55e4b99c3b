//! Portfolio Event Port
//!
//! Observable interface for imports and edits. Drives the NDJSON stream
//! behind `--json` and keeps use cases free of output concerns.

use std::path::PathBuf;

use crate::domain::services::RowStatus;
use crate::domain::value_objects::AppId;

/// Event emitted while importing or editing the portfolio
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioEvent {
    /// A file was read and is about to be validated
    ImportStarted { source: PathBuf, row_count: usize },

    /// One row finished validation
    RowValidated {
        line: usize,
        status: RowStatus,
        errors: Vec<String>,
        warnings: Vec<String>,
    },

    /// Staged rows were appended to the portfolio
    ImportCommitted {
        committed: usize,
        rejected: usize,
        discarded: usize,
    },

    /// The batch was dropped without touching the portfolio (dry run)
    ImportDiscarded { staged: usize },

    ApplicationAdded { id: AppId, code: String },

    ApplicationUpdated { id: AppId, code: String },

    ApplicationDeleted { id: AppId, code: String },
}

/// Trait for receiving portfolio events
pub trait PortfolioEventSink: Send + Sync {
    fn on_event(&self, event: PortfolioEvent);

    /// Whether per-row events are wanted. Summary-only sinks return `false`.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// Discards every event
pub struct NoopEventSink;

impl PortfolioEventSink for NoopEventSink {
    fn on_event(&self, _event: PortfolioEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
