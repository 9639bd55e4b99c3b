//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON portfolio repository
//! - `events/` - NDJSON event sink
//! - `csv_file` - CSV import reader and export writer

pub mod csv_file;
pub mod events;
pub mod repositories;

pub use events::JsonEventSink;
pub use repositories::{JsonPortfolioRepository, PORTFOLIO_VERSION};
