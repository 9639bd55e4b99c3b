//! Init command handler

use anyhow::Result;

use nexus::presentation::factory::{create_event_sink, create_portfolio_use_case};

use super::{emit_json, CommandContext};

pub fn cmd_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(false, "init"));
    let portfolio = use_case.init(&ctx.portfolio, force)?;

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "init",
            "path": ctx.portfolio.display().to_string(),
            "capabilities": portfolio.capabilities().entries(),
            "domains": portfolio.domains().entries(),
        }))?;
        return Ok(());
    }

    println!("Created {}", ctx.portfolio.display());
    println!(
        "  {} capabilities, {} domains",
        portfolio.capabilities().len(),
        portfolio.domains().len()
    );
    Ok(())
}
