//! Business value of an application - the first input of the TIME model

use serde::{Deserialize, Serialize};

use super::{UnknownVariant, Variants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessValue {
    Critical,
    High,
    #[default]
    Standard,
    Deprecated,
}

impl BusinessValue {
    pub const ALL: [BusinessValue; 4] = [
        BusinessValue::Critical,
        BusinessValue::High,
        BusinessValue::Standard,
        BusinessValue::Deprecated,
    ];

    /// CRITICAL and HIGH count as high value for classification
    pub fn is_high(&self) -> bool {
        matches!(self, BusinessValue::Critical | BusinessValue::High)
    }
}

impl Variants for BusinessValue {
    const KIND: &'static str = "value";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            BusinessValue::Critical => "CRITICAL",
            BusinessValue::High => "HIGH",
            BusinessValue::Standard => "STANDARD",
            BusinessValue::Deprecated => "DEPRECATED",
        }
    }
}

impl std::str::FromStr for BusinessValue {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for BusinessValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
