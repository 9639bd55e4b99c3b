//! Health score value object - an integer in `[0, 100]`, higher is healthier

use serde::{Deserialize, Serialize};

/// Technical health score.
///
/// Construction never fails: out-of-range input is clamped. Deserialization
/// is strict so a hand-edited portfolio file with `health: 140` is rejected
/// instead of silently rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Health(u8);

impl Health {
    pub const MIN: Health = Health(0);
    pub const MAX: Health = Health(100);
    /// Used when imported health is missing or malformed
    pub const IMPORT_DEFAULT: Health = Health(50);

    /// Clamp any integer into range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Parse a numeric cell, accepting decimals (truncated toward zero).
    /// Returns `None` for blank or non-numeric input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Ok(v) = input.parse::<i64>() {
            return Some(Self::new(v));
        }
        input
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| Self::new(v.trunc() as i64))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::IMPORT_DEFAULT
    }
}

impl TryFrom<i64> for Health {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!("health {} is outside 0..=100", value))
        }
    }
}

impl From<Health> for u8 {
    fn from(health: Health) -> Self {
        health.0
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
