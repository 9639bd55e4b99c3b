//! PortfolioAdvisor port - an external service that answers free-text
//! questions about the portfolio.
//!
//! The advisor only ever sees an owned snapshot, so edits made while a
//! question is in flight cannot reach it.

use serde::Serialize;

use crate::domain::entities::Application;
use crate::domain::value_objects::{BusinessValue, PiiRisk, Tier};

/// The minimal projection handed to the advisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorySnapshotEntry {
    pub name: String,
    pub tier: Tier,
    pub health: u8,
    pub value: BusinessValue,
    pub pii: PiiRisk,
}

impl From<&Application> for AdvisorySnapshotEntry {
    fn from(app: &Application) -> Self {
        Self {
            name: app.name.clone(),
            tier: app.tier,
            health: app.health.value(),
            value: app.value,
            pii: app.security.pii_risk,
        }
    }
}

pub fn snapshot(apps: &[Application]) -> Vec<AdvisorySnapshotEntry> {
    apps.iter().map(AdvisorySnapshotEntry::from).collect()
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AdvisoryError {
    #[error("no advisory credential configured")]
    MissingCredential,

    #[error("advisory credential was rejected")]
    InvalidCredential,

    #[error("advisory service unreachable: {0}")]
    Unavailable(String),

    #[error("advisory service returned no answer")]
    EmptyResponse,
}

pub trait PortfolioAdvisor {
    fn ask(
        &self,
        snapshot: &[AdvisorySnapshotEntry],
        question: &str,
        credential: &str,
    ) -> Result<String, AdvisoryError>;
}
