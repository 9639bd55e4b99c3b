//! Application entity - one system in the portfolio
//!
//! Pure data plus the small invariants it can enforce locally (non-negative
//! costs, deduplicated dependency lists). Classification is derived elsewhere
//! and never stored here.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    AppId, BusinessValue, DataSensitivity, Health, LifecycleStatus, PiiRisk, TechnicalDebt, Tier,
};

/// Security and compliance attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub gdpr_compliant: bool,
    pub pii_risk: PiiRisk,
}

/// Lifecycle attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub status: LifecycleStatus,
}

/// Annual cost breakdown.
///
/// `total` is stored, not computed on read. Constructors that only know the
/// components derive it; callers that know a lump sum set it directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Costs {
    pub license: f64,
    pub maintenance: f64,
    pub total: f64,
}

impl Costs {
    /// Costs whose total is the sum of its components
    pub fn from_components(license: f64, maintenance: f64) -> Self {
        let license = non_negative(license);
        let maintenance = non_negative(maintenance);
        Self {
            license,
            maintenance,
            total: license + maintenance,
        }
    }

    /// Override the stored total
    pub fn with_total(mut self, total: f64) -> Self {
        self.total = non_negative(total);
        self
    }

    /// Re-derive total from the components
    pub fn rederive_total(&mut self) {
        self.total = self.license + self.maintenance;
    }
}

/// Negative, NaN and infinite amounts all normalise to zero.
pub fn non_negative(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Which dependency list an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Applications this one depends on
    Upstream,
    /// Applications that depend on this one
    Downstream,
}

/// An application record (aggregate root)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: AppId,
    pub name: String,
    pub code: String,
    pub tier: Tier,
    pub value: BusinessValue,
    pub health: Health,
    pub capability_id: String,
    pub domain: String,
    pub owner: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub security: Security,
    #[serde(default)]
    pub technical_debt: TechnicalDebt,
    #[serde(default)]
    pub lifecycle: Lifecycle,
    #[serde(default)]
    pub costs: Costs,
    #[serde(default)]
    pub data_sensitivity: DataSensitivity,
    #[serde(default)]
    pub upstream_ids: Vec<AppId>,
    #[serde(default)]
    pub downstream_ids: Vec<AppId>,
}

impl Application {
    /// A record with every optional attribute at its default
    pub fn new(id: AppId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            tier: Tier::default(),
            value: BusinessValue::default(),
            health: Health::default(),
            capability_id: String::new(),
            domain: String::new(),
            owner: String::new(),
            description: String::new(),
            security: Security::default(),
            technical_debt: TechnicalDebt::default(),
            lifecycle: Lifecycle::default(),
            costs: Costs::default(),
            data_sensitivity: DataSensitivity::default(),
            upstream_ids: Vec::new(),
            downstream_ids: Vec::new(),
        }
    }

    pub fn is_high_pii_risk(&self) -> bool {
        self.security.pii_risk.is_high()
    }

    fn dependencies_mut(&mut self, direction: Direction) -> &mut Vec<AppId> {
        match direction {
            Direction::Upstream => &mut self.upstream_ids,
            Direction::Downstream => &mut self.downstream_ids,
        }
    }

    /// Add a dependency id. Returns `false` if it was already listed.
    pub fn add_dependency(&mut self, direction: Direction, id: AppId) -> bool {
        let list = self.dependencies_mut(direction);
        if list.contains(&id) {
            return false;
        }
        list.push(id);
        true
    }

    /// Remove a dependency id. Returns `false` if it was not listed.
    pub fn remove_dependency(&mut self, direction: Direction, id: &AppId) -> bool {
        let list = self.dependencies_mut(direction);
        let before = list.len();
        list.retain(|existing| existing != id);
        list.len() != before
    }

    /// Add the id if absent, remove it if present. Returns `true` when the id
    /// is listed after the call.
    pub fn toggle_dependency(&mut self, direction: Direction, id: AppId) -> bool {
        if self.remove_dependency(direction, &id) {
            false
        } else {
            self.add_dependency(direction, id)
        }
    }
}
