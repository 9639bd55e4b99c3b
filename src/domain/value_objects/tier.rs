//! Tier value object - the architectural layer of an application

use serde::{Deserialize, Serialize};

use super::{UnknownVariant, Variants};

/// Architectural layer, also the lane an application occupies in the
/// dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// User-facing channels (portals, mobile apps)
    Channel,
    /// Middleware, buses, API gateways
    Integration,
    /// Systems of record
    #[default]
    Core,
    /// Hosting, identity, shared platforms
    Infra,
}

impl Tier {
    /// All tiers in lane display order
    pub const ALL: [Tier; 4] = [Tier::Channel, Tier::Integration, Tier::Core, Tier::Infra];

    /// Zero-based lane index (CHANNEL leftmost)
    pub fn lane(&self) -> usize {
        match self {
            Tier::Channel => 0,
            Tier::Integration => 1,
            Tier::Core => 2,
            Tier::Infra => 3,
        }
    }
}

impl Variants for Tier {
    const KIND: &'static str = "tier";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        match self {
            Tier::Channel => "CHANNEL",
            Tier::Integration => "INTEGRATION",
            Tier::Core => "CORE",
            Tier::Infra => "INFRA",
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_follow_display_order() {
        let lanes: Vec<usize> = Tier::ALL.iter().map(|t| t.lane()).collect();
        assert_eq!(lanes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn default_tier_is_core() {
        assert_eq!(Tier::default(), Tier::Core);
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&Tier::Integration).unwrap();
        assert_eq!(json, "\"INTEGRATION\"");
        let tier: Tier = serde_json::from_str("\"INFRA\"").unwrap();
        assert_eq!(tier, Tier::Infra);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("EDGE".parse::<Tier>().is_err());
        assert_eq!("channel".parse::<Tier>().unwrap(), Tier::Channel);
    }
}
