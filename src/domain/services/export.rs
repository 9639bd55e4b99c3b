//! Flat export records
//!
//! One record per application with nested attributes flattened. Column names
//! are chosen so the importer reads them back (`LicenseCost`, `PII`, ...).

use serde::Serialize;

use crate::domain::entities::Application;
use crate::domain::value_objects::{
    BusinessValue, DataSensitivity, LifecycleStatus, PiiRisk, TechnicalDebt, Tier,
};

/// Column order of the export header
pub const EXPORT_COLUMNS: [&str; 18] = [
    "ID",
    "Name",
    "Code",
    "Tier",
    "Status",
    "Health",
    "Value",
    "Capability",
    "Domain",
    "Owner",
    "Description",
    "Cost",
    "LicenseCost",
    "MaintenanceCost",
    "PII",
    "GDPR",
    "TechnicalDebt",
    "DataSensitivity",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord<'a> {
    #[serde(rename = "ID")]
    pub id: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Code")]
    pub code: &'a str,
    #[serde(rename = "Tier")]
    pub tier: Tier,
    #[serde(rename = "Status")]
    pub status: LifecycleStatus,
    #[serde(rename = "Health")]
    pub health: u8,
    #[serde(rename = "Value")]
    pub value: BusinessValue,
    #[serde(rename = "Capability")]
    pub capability: &'a str,
    #[serde(rename = "Domain")]
    pub domain: &'a str,
    #[serde(rename = "Owner")]
    pub owner: &'a str,
    #[serde(rename = "Description")]
    pub description: &'a str,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "LicenseCost")]
    pub license_cost: f64,
    #[serde(rename = "MaintenanceCost")]
    pub maintenance_cost: f64,
    #[serde(rename = "PII")]
    pub pii: PiiRisk,
    #[serde(rename = "GDPR")]
    pub gdpr: bool,
    #[serde(rename = "TechnicalDebt")]
    pub technical_debt: TechnicalDebt,
    #[serde(rename = "DataSensitivity")]
    pub data_sensitivity: DataSensitivity,
}

impl<'a> From<&'a Application> for ExportRecord<'a> {
    fn from(app: &'a Application) -> Self {
        Self {
            id: app.id.as_str(),
            name: &app.name,
            code: &app.code,
            tier: app.tier,
            status: app.lifecycle.status,
            health: app.health.value(),
            value: app.value,
            capability: &app.capability_id,
            domain: &app.domain,
            owner: &app.owner,
            description: &app.description,
            cost: app.costs.total,
            license_cost: app.costs.license,
            maintenance_cost: app.costs.maintenance,
            pii: app.security.pii_risk,
            gdpr: app.security.gdpr_compliant,
            technical_debt: app.technical_debt,
            data_sensitivity: app.data_sensitivity,
        }
    }
}
