//! Domain Services
//!
//! Pure business logic over the portfolio. No I/O; every function here is
//! total or reports problems as data.

pub mod classifier;
pub mod export;
pub mod graph;
pub mod grouping;
pub mod import;
pub mod staging;

pub use classifier::{
    classify, Disposition, EnrichedApplication, Rationale, Strategy, HEALTHY_THRESHOLD,
};
pub use export::{ExportRecord, EXPORT_COLUMNS};
pub use graph::{build_graph, DependencyGraph, GraphEdge, GraphNode, GraphScope};
pub use grouping::{
    group_by_capability, group_by_domain, sentinel_key, summarize, CapabilityGroup, DomainGroup,
    PortfolioSummary, REDUNDANCY_THRESHOLD,
};
pub use import::{validate, Column, ImportContext, RawRow, RowStatus, ValidatedRow};
pub use staging::{ImportBatch, ImportOutcome, RowState, StagedRow, StagingCounts};
