//! Nexus - enterprise application portfolio register
//!
//! Keeps an inventory of business applications with their tier, business
//! value, health, cost, risk and dependencies, and classifies each one under
//! the TIME model (Tolerate / Invest / Migrate / Eliminate).
//!
//! ## Layers
//!
//! - `domain` - entities, value objects, pure services and ports
//! - `application` - use cases over the ports
//! - `infrastructure` - JSON repository, CSV adapter, event sinks
//! - `presentation` - clap CLI definition, factories and text views
//! - `config` - `nexus.toml` loading

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Application, Portfolio};
pub use domain::services::{classify, Disposition, Strategy};
pub use error::{NexusError, NexusResult};
