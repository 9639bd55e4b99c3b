//! Graph command handler

use anyhow::Result;

use nexus::domain::services::{build_graph, GraphScope};
use nexus::presentation::factory::{create_event_sink, create_portfolio_use_case};

use super::{emit_json, CommandContext};

pub fn cmd_graph(ctx: &CommandContext, scope: &str) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(false, "graph"));
    let portfolio = use_case.load(&ctx.portfolio)?;
    let scope = GraphScope::from(scope);
    let graph = build_graph(portfolio.applications(), &scope);

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "graph",
            "scope": scope.to_string(),
            "nodes": graph.nodes,
            "edges": graph.edges,
        }))?;
        return Ok(());
    }

    println!("Scope: {}", scope);
    print!("{}", ctx.renderer.graph(&graph));
    Ok(())
}
