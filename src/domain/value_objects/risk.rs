//! Risk and quality ratings: PII exposure, technical debt, data sensitivity

use serde::{Deserialize, Serialize};

use super::{UnknownVariant, Variants};

/// Exposure to personally identifiable information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiRisk {
    #[default]
    None,
    Low,
    High,
}

impl PiiRisk {
    pub const ALL: [PiiRisk; 3] = [PiiRisk::None, PiiRisk::Low, PiiRisk::High];

    pub fn is_high(&self) -> bool {
        matches!(self, PiiRisk::High)
    }

    /// Import-time coercion. Besides the variant names, spreadsheet-style
    /// flags are accepted: YES/TRUE mean HIGH, NO/FALSE mean NONE.
    pub fn coerce(input: &str) -> Option<Self> {
        if let Some(risk) = Self::parse_loose(input) {
            return Some(risk);
        }
        match input.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "y" => Some(PiiRisk::High),
            "no" | "false" | "n" => Some(PiiRisk::None),
            _ => None,
        }
    }
}

impl Variants for PiiRisk {
    const KIND: &'static str = "PII risk";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            PiiRisk::None => "NONE",
            PiiRisk::Low => "LOW",
            PiiRisk::High => "HIGH",
        }
    }
}

/// Accumulated technical debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechnicalDebt {
    Low,
    #[default]
    Medium,
    High,
}

impl TechnicalDebt {
    pub const ALL: [TechnicalDebt; 3] = [
        TechnicalDebt::Low,
        TechnicalDebt::Medium,
        TechnicalDebt::High,
    ];
}

impl Variants for TechnicalDebt {
    const KIND: &'static str = "technical debt";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            TechnicalDebt::Low => "LOW",
            TechnicalDebt::Medium => "MEDIUM",
            TechnicalDebt::High => "HIGH",
        }
    }
}

/// Classification of the data an application holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSensitivity {
    Public,
    #[default]
    Internal,
    Confidential,
    Restricted,
}

impl DataSensitivity {
    pub const ALL: [DataSensitivity; 4] = [
        DataSensitivity::Public,
        DataSensitivity::Internal,
        DataSensitivity::Confidential,
        DataSensitivity::Restricted,
    ];
}

impl Variants for DataSensitivity {
    const KIND: &'static str = "data sensitivity";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            DataSensitivity::Public => "PUBLIC",
            DataSensitivity::Internal => "INTERNAL",
            DataSensitivity::Confidential => "CONFIDENTIAL",
            DataSensitivity::Restricted => "RESTRICTED",
        }
    }
}

impl std::str::FromStr for PiiRisk {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::str::FromStr for TechnicalDebt {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::str::FromStr for DataSensitivity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for PiiRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for TechnicalDebt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for DataSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
