//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Loads and saves through `PortfolioRepository`
//!
//! ## Use Cases
//!
//! - `ImportUseCase` - Validate, stage and commit tabular rows
//! - `ExportUseCase` - Flat CSV export
//! - `PortfolioUseCase` - Record edits, dependency links, vocabularies
//! - `AdvisoryUseCase` - Boundary around the external advisor

pub mod advisory;
pub mod export;
pub mod import;
pub mod portfolio;

#[cfg(test)]
mod test_support;

pub use advisory::AdvisoryUseCase;
pub use export::{default_export_filename, ExportUseCase};
pub use import::{ImportOptions, ImportResult, ImportUseCase};
pub use portfolio::{ApplicationPatch, PortfolioUseCase, VocabularyKind};
