//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{ExportUseCase, ImportUseCase, PortfolioUseCase};
use crate::domain::ports::{NoopEventSink, PortfolioEventSink};
use crate::infrastructure::{JsonEventSink, JsonPortfolioRepository};

/// Type alias for the concrete ImportUseCase with all dependencies
pub type ConcreteImportUseCase = ImportUseCase<JsonPortfolioRepository>;

/// Type alias for the concrete ExportUseCase with all dependencies
pub type ConcreteExportUseCase = ExportUseCase<JsonPortfolioRepository>;

/// Type alias for the concrete PortfolioUseCase with all dependencies
pub type ConcretePortfolioUseCase = PortfolioUseCase<JsonPortfolioRepository>;

pub fn create_import_use_case() -> ConcreteImportUseCase {
    ImportUseCase::new(JsonPortfolioRepository::new())
}

pub fn create_export_use_case() -> ConcreteExportUseCase {
    ExportUseCase::new(JsonPortfolioRepository::new())
}

/// Portfolio use case reporting edits to `events`
pub fn create_portfolio_use_case(events: Arc<dyn PortfolioEventSink>) -> ConcretePortfolioUseCase {
    PortfolioUseCase::new(JsonPortfolioRepository::new()).with_events(events)
}

/// NDJSON sink on stdout for `--json`, otherwise a sink that drops everything
pub fn create_event_sink(json: bool, command: &'static str) -> Arc<dyn PortfolioEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(NoopEventSink)
    }
}
