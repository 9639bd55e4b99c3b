//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Application` - One system in the portfolio
//! - `Portfolio` - The store: applications plus vocabularies
//! - `Vocabulary` - Sorted set of capability or domain names

mod application;
mod portfolio;
mod vocabulary;

pub use application::{non_negative, Application, Costs, Direction, Lifecycle, Security};
pub use portfolio::{Portfolio, DEFAULT_CAPABILITIES, DEFAULT_DOMAINS};
pub use vocabulary::Vocabulary;
