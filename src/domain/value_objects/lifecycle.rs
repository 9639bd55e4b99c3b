//! Lifecycle status of an application

use serde::{Deserialize, Serialize};

use super::{UnknownVariant, Variants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleStatus {
    #[default]
    Active,
    PhaseOut,
    /// End of life
    Eol,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 3] = [
        LifecycleStatus::Active,
        LifecycleStatus::PhaseOut,
        LifecycleStatus::Eol,
    ];

    pub fn is_eol(&self) -> bool {
        matches!(self, LifecycleStatus::Eol)
    }
}

impl Variants for LifecycleStatus {
    const KIND: &'static str = "lifecycle status";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            LifecycleStatus::Active => "ACTIVE",
            LifecycleStatus::PhaseOut => "PHASE_OUT",
            LifecycleStatus::Eol => "EOL",
        }
    }
}

impl std::str::FromStr for LifecycleStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_out_round_trips_through_serde() {
        let json = serde_json::to_string(&LifecycleStatus::PhaseOut).unwrap();
        assert_eq!(json, "\"PHASE_OUT\"");
        let back: LifecycleStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LifecycleStatus::PhaseOut);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("eol".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::Eol);
        assert!("RETIRED".parse::<LifecycleStatus>().is_err());
    }
}
