//! Dependency graph builder
//!
//! Builds a lane layout from each application's tier and edges from its
//! downstream ids. Rebuilt from scratch on every call; portfolios are small.
//!
//! Dependency ids carry no referential integrity: a target that was deleted
//! or is outside the current scope is silently dropped.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::Application;
use crate::domain::value_objects::{AppId, LifecycleStatus, PiiRisk, TechnicalDebt, Tier};

use super::grouping::sentinel_key;

/// Horizontal distance between lanes
pub const LANE_SPACING: f64 = 400.0;
/// Vertical distance between stacked nodes in one lane
pub const ROW_SPACING: f64 = 180.0;
/// Offset of the first row
pub const TOP_OFFSET: f64 = 50.0;

/// Which applications the graph covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GraphScope {
    #[default]
    All,
    /// Only applications whose domain (after sentinel substitution) matches
    Domain(String),
}

impl GraphScope {
    pub fn includes(&self, app: &Application) -> bool {
        match self {
            GraphScope::All => true,
            GraphScope::Domain(domain) => sentinel_key(&app.domain) == *domain,
        }
    }
}

impl From<&str> for GraphScope {
    fn from(s: &str) -> Self {
        if s == "ALL" {
            GraphScope::All
        } else {
            GraphScope::Domain(s.to_string())
        }
    }
}

impl std::fmt::Display for GraphScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphScope::All => f.write_str("ALL"),
            GraphScope::Domain(d) => f.write_str(d),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: AppId,
    pub name: String,
    pub code: String,
    pub tier: Tier,
    pub lane: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub pii_risk: PiiRisk,
    pub technical_debt: TechnicalDebt,
    pub lifecycle: LifecycleStatus,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: AppId,
    pub target: AppId,
    /// Either endpoint handles high-risk PII
    pub high_risk: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    pub fn node(&self, id: &AppId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Nodes in one lane, top to bottom
    pub fn lane(&self, tier: Tier) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.tier == tier)
    }

    pub fn high_risk_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.high_risk)
    }

    /// Number of rows in the tallest lane
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.row + 1).max().unwrap_or(0)
    }
}

pub fn build_graph(apps: &[Application], scope: &GraphScope) -> DependencyGraph {
    let in_scope: Vec<&Application> = apps.iter().filter(|a| scope.includes(a)).collect();

    let mut rows = [0usize; 4];
    let nodes: Vec<GraphNode> = in_scope
        .iter()
        .map(|app| {
            let lane = app.tier.lane();
            let row = rows[lane];
            rows[lane] += 1;
            GraphNode {
                id: app.id.clone(),
                name: app.name.clone(),
                code: app.code.clone(),
                tier: app.tier,
                lane,
                row,
                x: lane as f64 * LANE_SPACING,
                y: row as f64 * ROW_SPACING + TOP_OFFSET,
                pii_risk: app.security.pii_risk,
                technical_debt: app.technical_debt,
                lifecycle: app.lifecycle.status,
                total_cost: app.costs.total,
            }
        })
        .collect();

    let by_id: HashMap<&AppId, &Application> = in_scope.iter().map(|a| (&a.id, *a)).collect();

    let mut edges = Vec::new();
    for source in &in_scope {
        for target_id in &source.downstream_ids {
            let Some(target) = by_id.get(target_id) else {
                continue;
            };
            edges.push(GraphEdge {
                id: format!("{}-{}", source.id, target.id),
                source: source.id.clone(),
                target: target.id.clone(),
                high_risk: source.is_high_pii_risk() || target.is_high_pii_risk(),
            });
        }
    }

    DependencyGraph { nodes, edges }
}
