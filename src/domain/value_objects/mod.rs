//! Domain Value Objects
//!
//! Immutable value types that represent portfolio concepts.
//! Every enumerated attribute implements [`Variants`], which gives a single
//! case-insensitive parser and the "accepted values" text used in messages.

mod app_id;
mod business_value;
mod config_warning;
mod health;
mod lifecycle;
mod risk;
mod tier;

pub use app_id::AppId;
pub use business_value::BusinessValue;
pub use config_warning::ConfigWarning;
pub use health::Health;
pub use lifecycle::LifecycleStatus;
pub use risk::{DataSensitivity, PiiRisk, TechnicalDebt};
pub use tier::Tier;

/// Sentinel used wherever a soft reference (capability, domain, owner) is empty
/// or points at a vocabulary entry that no longer exists.
pub const UNASSIGNED: &str = "Unassigned";

/// A closed set of string-named variants.
pub trait Variants: Copy + Sized + 'static {
    /// Human name of the attribute, used in error messages ("tier", "value")
    const KIND: &'static str;

    /// All variants in display order
    fn all() -> &'static [Self];

    /// Canonical upper-case name
    fn as_str(&self) -> &'static str;

    /// Parse a trimmed, case-insensitive variant name
    fn parse_loose(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(input))
    }

    /// Comma-separated list of accepted names
    fn expected() -> String {
        Self::all()
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse or describe why parsing failed
    fn parse_strict(input: &str) -> Result<Self, UnknownVariant> {
        Self::parse_loose(input).ok_or_else(|| UnknownVariant {
            kind: Self::KIND,
            value: input.to_string(),
            expected: Self::expected(),
        })
    }
}

/// Returned when a string does not name any variant of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} '{}': expected one of {}",
            self.kind, self.value, self.expected
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl From<UnknownVariant> for crate::error::NexusError {
    fn from(err: UnknownVariant) -> Self {
        crate::error::NexusError::InvalidField {
            field: err.kind,
            value: err.value,
            expected: format!("one of {}", err.expected),
        }
    }
}
