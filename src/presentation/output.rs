//! Output Rendering
//!
//! Text views for the registry, landscape, graph and import report. Every
//! view renders to a `String` so it can be asserted on without a terminal.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::application::ImportResult;
use crate::domain::entities::Vocabulary;
use crate::domain::services::{
    CapabilityGroup, DependencyGraph, Disposition, DomainGroup, EnrichedApplication,
    PortfolioSummary, RowState, RowStatus, Strategy,
};
use crate::domain::value_objects::{AppId, TechnicalDebt, Tier, Variants};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
    arrow: &'static str,
    skip: &'static str,
    flag: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            arrow: "→",
            skip: "○",
            flag: "●",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
            arrow: "->",
            skip: "[ ]",
            flag: "*",
        }
    }
}

/// Text renderer shared by every command
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    pub fn new(unicode: bool, verbose: u8) -> Self {
        Self { unicode, verbose }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn strategy_icon(&self, strategy: Strategy) -> &'static str {
        let icons = self.icons();
        match strategy {
            Strategy::Invest => icons.check,
            Strategy::Tolerate => icons.skip,
            Strategy::Migrate => icons.arrow,
            Strategy::Eliminate => icons.cross,
        }
    }

    pub fn summary(&self, summary: &PortfolioSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} applications, {} per year",
            summary.application_count,
            format_cost(summary.total_cost)
        );
        for strategy in Strategy::ALL {
            let _ = writeln!(
                out,
                "  {} {} {}",
                self.strategy_icon(strategy),
                pad(strategy.as_str(), 10),
                summary.count(strategy)
            );
        }
        if !summary.redundant_capabilities.is_empty() {
            let _ = writeln!(
                out,
                "  {} Redundant capabilities: {}",
                self.icons().warn,
                summary.redundant_capabilities.join(", ")
            );
        }
        out
    }

    /// Registry: one block per capability, one line per application
    pub fn registry(&self, groups: &[CapabilityGroup<'_>], summary: &PortfolioSummary) -> String {
        let mut out = self.summary(summary);
        if groups.is_empty() {
            let _ = writeln!(out, "\nNo applications registered.");
            return out;
        }

        let members = || groups.iter().flat_map(|g| &g.members);
        let name_width = column_width(members().map(|e| e.app.name.as_str()));
        let code_width = column_width(members().map(|e| e.app.code.as_str()));

        for group in groups {
            out.push('\n');
            let _ = write!(
                out,
                "{} ({}, {})",
                group.capability,
                group.members.len(),
                format_cost(group.total_cost)
            );
            if group.is_redundant {
                let _ = write!(out, "  {} redundant", self.icons().warn);
            }
            out.push('\n');

            for entry in &group.members {
                let _ = writeln!(
                    out,
                    "  {} {}  {}  {}  {:>3}  {}  {}",
                    self.strategy_icon(entry.disposition.label),
                    pad(&entry.app.code, code_width),
                    pad(&entry.app.name, name_width),
                    pad(entry.app.tier.as_str(), 11),
                    entry.app.health.value(),
                    pad(entry.disposition.label.as_str(), 9),
                    format_cost(entry.app.costs.total)
                );
            }
        }
        out
    }

    pub fn landscape(&self, domains: &[DomainGroup<'_>]) -> String {
        let mut out = String::new();
        if domains.is_empty() {
            out.push_str("No applications registered.\n");
            return out;
        }

        for domain in domains {
            let _ = writeln!(
                out,
                "{} ({} apps, {})",
                domain.domain,
                domain.application_count,
                format_cost(domain.total_cost)
            );
            for capability in &domain.capabilities {
                let _ = write!(out, "  {}", capability.capability);
                if capability.is_redundant {
                    let _ = write!(out, " {}", self.icons().warn);
                }
                out.push('\n');
                for entry in &capability.members {
                    let _ = writeln!(
                        out,
                        "    {} {} ({})",
                        self.strategy_icon(entry.disposition.label),
                        entry.app.name,
                        entry.disposition.label
                    );
                }
            }
        }
        out
    }

    /// Lanes top to bottom, then the edge list with risk flags
    pub fn graph(&self, graph: &DependencyGraph) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for tier in Tier::ALL {
            let nodes: Vec<_> = graph.lane(tier).collect();
            let _ = writeln!(out, "{} ({})", tier, nodes.len());
            for node in nodes {
                let mut flags = Vec::new();
                if node.pii_risk.is_high() {
                    flags.push("PII");
                }
                if node.technical_debt == TechnicalDebt::High {
                    flags.push("DEBT");
                }
                if node.lifecycle.is_eol() {
                    flags.push("EOL");
                }
                let _ = write!(out, "  [{}] {} {}", node.row, node.code, node.name);
                if !flags.is_empty() {
                    let _ = write!(out, "  {} {}", icons.flag, flags.join(" "));
                }
                out.push('\n');
            }
        }

        if !graph.edges.is_empty() {
            let _ = writeln!(out, "\nDependencies ({}):", graph.edges.len());
            for edge in &graph.edges {
                let _ = write!(
                    out,
                    "  {} {} {}",
                    node_label(graph, &edge.source),
                    icons.arrow,
                    node_label(graph, &edge.target)
                );
                if edge.high_risk {
                    let _ = write!(out, "  {} high PII risk", icons.warn);
                }
                out.push('\n');
            }
        }
        out
    }

    pub fn application(&self, entry: &EnrichedApplication<'_>) -> String {
        let app = entry.app;
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", app.name, app.code);
        let rows: [(&str, String); 15] = [
            ("ID", app.id.to_string()),
            ("Tier", app.tier.to_string()),
            ("Status", app.lifecycle.status.to_string()),
            ("Value", app.value.to_string()),
            ("Health", app.health.to_string()),
            ("Disposition", self.disposition(&entry.disposition)),
            ("Capability", app.capability_id.clone()),
            ("Domain", app.domain.clone()),
            ("Owner", app.owner.clone()),
            ("PII risk", app.security.pii_risk.to_string()),
            ("GDPR", if app.security.gdpr_compliant { "yes" } else { "no" }.to_string()),
            ("Debt", app.technical_debt.to_string()),
            ("Sensitivity", app.data_sensitivity.to_string()),
            (
                "Cost",
                format!(
                    "{} (license {}, maintenance {})",
                    format_cost(app.costs.total),
                    format_cost(app.costs.license),
                    format_cost(app.costs.maintenance)
                ),
            ),
            ("Description", app.description.clone()),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "  {} {}", pad(label, 12), value);
        }
        if !app.upstream_ids.is_empty() {
            let _ = writeln!(out, "  {} {}", pad("Upstream", 12), join_ids(&app.upstream_ids));
        }
        if !app.downstream_ids.is_empty() {
            let _ = writeln!(out, "  {} {}", pad("Downstream", 12), join_ids(&app.downstream_ids));
        }
        out
    }

    pub fn disposition(&self, disposition: &Disposition) -> String {
        format!("{} ({})", disposition.label, disposition.rationale.describe())
    }

    pub fn import_report(&self, result: &ImportResult) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for staged in &result.rows {
            let row = &staged.row;
            let (icon, status) = match staged.state {
                RowState::Discarded => (icons.skip, "SKIPPED".to_string()),
                RowState::Validated(status) => {
                    let icon = match status {
                        RowStatus::Ok => icons.check,
                        RowStatus::Warning => icons.warn,
                        RowStatus::Error => icons.cross,
                    };
                    (icon, status.to_string())
                }
            };
            let quiet_ok = matches!(staged.state, RowState::Validated(s) if s == RowStatus::Ok);
            if quiet_ok && self.verbose == 0 {
                continue;
            }
            let _ = writeln!(
                out,
                "  {} line {}: {} {}",
                icon,
                row.line,
                status,
                row.label().unwrap_or("")
            );
            for error in &row.errors {
                let _ = writeln!(out, "      {}", error);
            }
            for warning in &row.warnings {
                let _ = writeln!(out, "      {}", warning);
            }
        }

        let counts = result.counts;
        let _ = writeln!(
            out,
            "{} ok, {} with warnings, {} rejected, {} skipped",
            counts.ok, counts.warning, counts.error, counts.discarded
        );
        match &result.outcome {
            None => {
                let _ = writeln!(out, "{} Dry run: nothing saved", icons.skip);
            }
            Some(outcome) if outcome.committed == 0 => {
                let _ = writeln!(out, "{} No rows imported", icons.cross);
            }
            Some(outcome) => {
                let _ = writeln!(
                    out,
                    "{} Imported {} applications",
                    icons.check, outcome.committed
                );
            }
        }
        out
    }

    pub fn vocabulary(&self, title: &str, vocabulary: &Vocabulary) -> String {
        let mut out = format!("{} ({}):\n", title, vocabulary.len());
        for entry in vocabulary.entries() {
            let _ = writeln!(out, "  {}", entry);
        }
        out
    }
}

/// Whole-unit currency with thousands separators: `$1,250`
pub fn format_cost(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Pad to a display width (wide glyphs count double)
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    padded
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn node_label<'a>(graph: &'a DependencyGraph, id: &'a AppId) -> &'a str {
    graph.node(id).map(|n| n.code.as_str()).unwrap_or(id.as_str())
}

fn join_ids(ids: &[AppId]) -> String {
    ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
}
