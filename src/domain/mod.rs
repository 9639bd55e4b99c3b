//! Domain Layer
//!
//! The core of Nexus: the application model, classification, grouping,
//! graph building and import validation. No I/O.
//!
//! ## Structure
//!
//! - `entities/` - Application, Portfolio, Vocabulary
//! - `value_objects/` - Tier, BusinessValue, Health, risk ratings, AppId
//! - `services/` - Classifier, grouping, graph builder, import, export
//! - `ports/` - Interfaces for persistence, events and the advisor

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
