//! Grouping and aggregation
//!
//! Groups the enriched portfolio by capability and by domain, with per-group
//! spend and the capability-redundancy flag. Keys are taken as-is from the
//! records; there is no vocabulary cross-check here, only the empty-key
//! sentinel.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::value_objects::UNASSIGNED;

use super::classifier::{EnrichedApplication, Strategy};

/// A capability served by more than this many applications is redundant
pub const REDUNDANCY_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct CapabilityGroup<'a> {
    pub capability: String,
    pub members: Vec<EnrichedApplication<'a>>,
    pub total_cost: f64,
    pub is_redundant: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainGroup<'a> {
    pub domain: String,
    pub capabilities: Vec<CapabilityGroup<'a>>,
    pub total_cost: f64,
    pub application_count: usize,
}

/// Portfolio-wide totals shown above the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub application_count: usize,
    pub total_cost: f64,
    pub invest: usize,
    pub tolerate: usize,
    pub migrate: usize,
    pub eliminate: usize,
    pub redundant_capabilities: Vec<String>,
}

impl PortfolioSummary {
    pub fn count(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Invest => self.invest,
            Strategy::Tolerate => self.tolerate,
            Strategy::Migrate => self.migrate,
            Strategy::Eliminate => self.eliminate,
        }
    }
}

/// The trimmed key, or the sentinel when it is blank
pub fn sentinel_key(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNASSIGNED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Buckets items by key, keeping first-seen key order and input order within
/// each bucket.
fn bucket<'a, F>(
    apps: &[EnrichedApplication<'a>],
    key: F,
) -> Vec<(String, Vec<EnrichedApplication<'a>>)>
where
    F: Fn(&EnrichedApplication<'a>) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<EnrichedApplication<'a>>)> = Vec::new();

    for app in apps {
        let k = key(app);
        match index.get(&k) {
            Some(&i) => buckets[i].1.push(*app),
            None => {
                index.insert(k.clone(), buckets.len());
                buckets.push((k, vec![*app]));
            }
        }
    }

    buckets
}

fn total_cost(apps: &[EnrichedApplication<'_>]) -> f64 {
    apps.iter().map(|e| e.app.costs.total).sum()
}

pub fn group_by_capability<'a>(apps: &[EnrichedApplication<'a>]) -> Vec<CapabilityGroup<'a>> {
    bucket(apps, |e| sentinel_key(&e.app.capability_id))
        .into_iter()
        .map(|(capability, members)| CapabilityGroup {
            total_cost: total_cost(&members),
            is_redundant: members.len() > REDUNDANCY_THRESHOLD,
            capability,
            members,
        })
        .collect()
}

pub fn group_by_domain<'a>(apps: &[EnrichedApplication<'a>]) -> Vec<DomainGroup<'a>> {
    bucket(apps, |e| sentinel_key(&e.app.domain))
        .into_iter()
        .map(|(domain, members)| DomainGroup {
            total_cost: total_cost(&members),
            application_count: members.len(),
            capabilities: group_by_capability(&members),
            domain,
        })
        .collect()
}

pub fn summarize(apps: &[EnrichedApplication<'_>]) -> PortfolioSummary {
    let mut summary = PortfolioSummary {
        application_count: apps.len(),
        total_cost: total_cost(apps),
        invest: 0,
        tolerate: 0,
        migrate: 0,
        eliminate: 0,
        redundant_capabilities: Vec::new(),
    };

    for app in apps {
        match app.disposition.label {
            Strategy::Invest => summary.invest += 1,
            Strategy::Tolerate => summary.tolerate += 1,
            Strategy::Migrate => summary.migrate += 1,
            Strategy::Eliminate => summary.eliminate += 1,
        }
    }

    summary.redundant_capabilities = group_by_capability(apps)
        .into_iter()
        .filter(|g| g.is_redundant)
        .map(|g| g.capability)
        .collect();

    summary
}
