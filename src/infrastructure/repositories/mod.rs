//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod portfolio;

pub use portfolio::{JsonPortfolioRepository, PORTFOLIO_VERSION};
