//! Disposition classifier (TIME model)
//!
//! Maps (business value, health) to Tolerate / Invest / Migrate / Eliminate.
//! Stateless and total; dispositions are recomputed on every read.

use serde::Serialize;

use crate::domain::entities::Application;
use crate::domain::value_objects::{BusinessValue, Health};

/// Health at or above this is "healthy"
pub const HEALTHY_THRESHOLD: u8 = 70;

/// Recommended strategic action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Invest,
    Tolerate,
    Migrate,
    Eliminate,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Invest,
        Strategy::Tolerate,
        Strategy::Migrate,
        Strategy::Eliminate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Invest => "INVEST",
            Strategy::Tolerate => "TOLERATE",
            Strategy::Migrate => "MIGRATE",
            Strategy::Eliminate => "ELIMINATE",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule produced the disposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rationale {
    HighValueHealthy,
    HighValueDegraded,
    StandardHealthy,
    StandardDegraded,
    Deprecated,
}

impl Rationale {
    pub fn describe(&self) -> &'static str {
        match self {
            Rationale::HighValueHealthy => "high value, healthy",
            Rationale::HighValueDegraded => "high value, degraded health",
            Rationale::StandardHealthy => "standard value, healthy",
            Rationale::StandardDegraded => "standard value, degraded health",
            Rationale::Deprecated => "deprecated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Disposition {
    pub label: Strategy,
    pub rationale: Rationale,
}

/// Rules are evaluated in order; the first match wins.
pub fn classify(value: BusinessValue, health: Health) -> Disposition {
    let healthy = health.value() >= HEALTHY_THRESHOLD;
    let (label, rationale) = match (value, healthy) {
        (v, true) if v.is_high() => (Strategy::Invest, Rationale::HighValueHealthy),
        (v, false) if v.is_high() => (Strategy::Migrate, Rationale::HighValueDegraded),
        (BusinessValue::Standard, true) => (Strategy::Tolerate, Rationale::StandardHealthy),
        (BusinessValue::Standard, false) => (Strategy::Eliminate, Rationale::StandardDegraded),
        _ => (Strategy::Eliminate, Rationale::Deprecated),
    };
    Disposition { label, rationale }
}

/// An application paired with its freshly computed disposition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnrichedApplication<'a> {
    #[serde(flatten)]
    pub app: &'a Application,
    pub disposition: Disposition,
}

impl<'a> EnrichedApplication<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self {
            app,
            disposition: classify(app.value, app.health),
        }
    }
}
