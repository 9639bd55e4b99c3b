//! Import validator
//!
//! Turns one tabular row into a candidate application plus errors and
//! warnings. Rows are validated independently; the only cross-row state is
//! duplicate detection against codes already in the portfolio (not against
//! other rows of the same file).
//!
//! Hard errors: missing name, missing code, unknown lifecycle status, unknown
//! tier or value. Everything else is defaulted, and numeric cells never block
//! a row.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::entities::{Application, Costs, Lifecycle, Portfolio, Security};
use crate::domain::value_objects::{
    AppId, BusinessValue, DataSensitivity, Health, LifecycleStatus, PiiRisk, TechnicalDebt, Tier,
    Variants, UNASSIGNED,
};

/// Columns the importer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Code,
    Tier,
    Value,
    Health,
    Capability,
    Owner,
    Domain,
    Status,
    Pii,
    Gdpr,
    Debt,
    License,
    Maintenance,
    Sensitivity,
    Cost,
    Description,
}

impl Column {
    /// Map a header cell to a column. Matching ignores case, spaces, `_` and
    /// `-`, and accepts the export column names as aliases. Unknown headers
    /// (including the exported `ID`) map to `None` and are ignored.
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized: String = header
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        let column = match normalized.as_str() {
            "name" => Column::Name,
            "code" => Column::Code,
            "tier" => Column::Tier,
            "value" | "businessvalue" => Column::Value,
            "health" => Column::Health,
            "capability" | "capabilityid" => Column::Capability,
            "owner" => Column::Owner,
            "domain" => Column::Domain,
            "status" | "lifecycle" | "lifecyclestatus" => Column::Status,
            "pii" | "piirisk" => Column::Pii,
            "gdpr" | "gdprcompliant" => Column::Gdpr,
            "debt" | "technicaldebt" => Column::Debt,
            "license" | "licensecost" => Column::License,
            "maintenance" | "maintenancecost" => Column::Maintenance,
            "sensitivity" | "datasensitivity" => Column::Sensitivity,
            "cost" | "annualcost" | "totalcost" => Column::Cost,
            "description" => Column::Description,
            _ => return None,
        };
        Some(column)
    }
}

/// One uploaded row, keyed by recognised column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-indexed line in the source file, for messages
    pub line: usize,
    cells: HashMap<Column, String>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            cells: HashMap::new(),
        }
    }

    /// Build from (header, cell) pairs. The first occurrence of a column wins.
    pub fn from_pairs<'a, I>(line: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = Self::new(line);
        for (header, value) in pairs {
            if let Some(column) = Column::from_header(header) {
                row.cells.entry(column).or_insert_with(|| value.to_string());
            }
        }
        row
    }

    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.cells.insert(column, value.into());
        self
    }

    /// Trimmed cell value; blank cells read as absent
    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells
            .get(&column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// Fallbacks applied to optional fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportContext {
    pub existing_codes: HashSet<String>,
    pub default_owner: String,
    pub default_domain: String,
    pub default_capability: String,
}

impl ImportContext {
    pub fn new(existing_codes: HashSet<String>) -> Self {
        Self {
            existing_codes,
            default_owner: UNASSIGNED.to_string(),
            default_domain: "General".to_string(),
            default_capability: UNASSIGNED.to_string(),
        }
    }

    /// Context for importing into `portfolio`: its codes, and its first
    /// capability as the capability fallback.
    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        let mut ctx = Self::new(portfolio.codes());
        if let Some(first) = portfolio.capabilities().first() {
            ctx.default_capability = first.to_string();
        }
        ctx
    }

    pub fn with_default_owner(mut self, owner: impl Into<String>) -> Self {
        self.default_owner = owner.into();
        self
    }

    pub fn with_default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = domain.into();
        self
    }
}

/// Outcome class of a validated row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    Ok,
    Warning,
    Error,
}

impl RowStatus {
    pub fn is_committable(&self) -> bool {
        !matches!(self, RowStatus::Error)
    }
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowStatus::Ok => f.write_str("OK"),
            RowStatus::Warning => f.write_str("WARNING"),
            RowStatus::Error => f.write_str("ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    pub line: usize,
    /// Present exactly when there are no errors
    pub candidate: Option<Application>,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidatedRow {
    pub fn status(&self) -> RowStatus {
        if !self.is_valid {
            RowStatus::Error
        } else if self.warnings.is_empty() {
            RowStatus::Ok
        } else {
            RowStatus::Warning
        }
    }

    /// Code of the candidate, for display
    pub fn label(&self) -> Option<&str> {
        self.candidate.as_ref().map(|a| a.code.as_str())
    }
}

fn parse_amount(input: Option<&str>) -> Option<f64> {
    let cleaned: String = input?
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_'))
        .collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_flag(input: Option<&str>) -> bool {
    matches!(
        input.map(|s| s.to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "y" | "1")
    )
}

/// Validate one row against the context.
pub fn validate(row: &RawRow, ctx: &ImportContext) -> ValidatedRow {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let name = row.get(Column::Name);
    let code = row.get(Column::Code);
    if name.is_none() {
        errors.push("Missing Name".to_string());
    }
    if code.is_none() {
        errors.push("Missing Code".to_string());
    }

    let status = match row.get(Column::Status) {
        None => Some(LifecycleStatus::default()),
        Some(raw) => LifecycleStatus::parse_loose(raw).or_else(|| {
            errors.push(format!(
                "Invalid Lifecycle Status '{}'. Must be: {}",
                raw,
                LifecycleStatus::expected()
            ));
            None
        }),
    };

    let tier = match row.get(Column::Tier) {
        None => Some(Tier::default()),
        Some(raw) => Tier::parse_loose(raw).or_else(|| {
            errors.push(format!("Invalid Tier '{}'. Must be: {}", raw, Tier::expected()));
            None
        }),
    };

    let value = match row.get(Column::Value) {
        None => Some(BusinessValue::default()),
        Some(raw) => BusinessValue::parse_loose(raw).or_else(|| {
            errors.push(format!(
                "Invalid Value '{}'. Must be: {}",
                raw,
                BusinessValue::expected()
            ));
            None
        }),
    };

    let owner = row.get(Column::Owner);
    if owner.is_none() {
        warnings.push("Missing Data Steward (Owner)".to_string());
    }

    if let Some(code) = code {
        if ctx.existing_codes.contains(code) {
            warnings.push("Duplicate Code (will duplicate)".to_string());
        }
    }

    let candidate = match (name, code, status, tier, value) {
        (Some(name), Some(code), Some(status), Some(tier), Some(value)) if errors.is_empty() => {
            Some(build_candidate(row, ctx, name, code, status, tier, value, owner))
        }
        _ => None,
    };

    ValidatedRow {
        line: row.line,
        is_valid: candidate.is_some(),
        candidate,
        errors,
        warnings,
    }
}

#[allow(clippy::too_many_arguments)]
fn build_candidate(
    row: &RawRow,
    ctx: &ImportContext,
    name: &str,
    code: &str,
    status: LifecycleStatus,
    tier: Tier,
    value: BusinessValue,
    owner: Option<&str>,
) -> Application {
    let license = parse_amount(row.get(Column::License)).unwrap_or(0.0);
    let maintenance = parse_amount(row.get(Column::Maintenance)).unwrap_or(0.0);
    let mut costs = Costs::from_components(license, maintenance);
    if let Some(total) = parse_amount(row.get(Column::Cost)) {
        costs = costs.with_total(total);
    }

    let mut app = Application::new(AppId::generate(), name, code);
    app.tier = tier;
    app.value = value;
    app.health = row
        .get(Column::Health)
        .and_then(Health::parse)
        .unwrap_or(Health::IMPORT_DEFAULT);
    app.capability_id = row
        .get(Column::Capability)
        .unwrap_or(ctx.default_capability.as_str())
        .to_string();
    app.domain = row
        .get(Column::Domain)
        .unwrap_or(ctx.default_domain.as_str())
        .to_string();
    app.owner = owner.unwrap_or(ctx.default_owner.as_str()).to_string();
    app.description = row.get(Column::Description).unwrap_or_default().to_string();
    app.security = Security {
        gdpr_compliant: parse_flag(row.get(Column::Gdpr)),
        pii_risk: row
            .get(Column::Pii)
            .and_then(PiiRisk::coerce)
            .unwrap_or_default(),
    };
    app.technical_debt = row
        .get(Column::Debt)
        .and_then(TechnicalDebt::parse_loose)
        .unwrap_or_default();
    app.data_sensitivity = row
        .get(Column::Sensitivity)
        .and_then(DataSensitivity::parse_loose)
        .unwrap_or_default();
    app.lifecycle = Lifecycle { status };
    app.costs = costs;
    app
}
