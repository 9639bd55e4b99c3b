//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod advisor;
pub mod portfolio_events;
pub mod portfolio_repository;

pub use advisor::{snapshot, AdvisoryError, AdvisorySnapshotEntry, PortfolioAdvisor};
pub use portfolio_events::{NoopEventSink, PortfolioEvent, PortfolioEventSink};
pub use portfolio_repository::{PortfolioRepository, RepositoryError, RepositoryResult};
