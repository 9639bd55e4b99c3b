//! Read-only views: list, show, summary, landscape, classify

use anyhow::Result;

use nexus::domain::services::{
    classify, group_by_capability, group_by_domain, summarize, EnrichedApplication,
};
use nexus::domain::value_objects::{BusinessValue, Health};
use nexus::presentation::factory::{create_event_sink, create_portfolio_use_case};
use nexus::NexusError;

use super::{emit_json, CommandContext};

fn load(ctx: &CommandContext) -> Result<nexus::domain::entities::Portfolio> {
    let use_case = create_portfolio_use_case(create_event_sink(false, "load"));
    Ok(use_case.load(&ctx.portfolio)?)
}

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let portfolio = load(ctx)?;
    let enriched = portfolio.enriched();
    let groups = group_by_capability(&enriched);
    let summary = summarize(&enriched);

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "list",
            "summary": summary,
            "capabilities": groups,
        }))?;
        return Ok(());
    }

    print!("{}", ctx.renderer.registry(&groups, &summary));
    Ok(())
}

pub fn cmd_show(ctx: &CommandContext, key: &str) -> Result<()> {
    let portfolio = load(ctx)?;
    let stored = portfolio
        .lookup(key)
        .ok_or_else(|| NexusError::ApplicationNotFound {
            key: key.to_string(),
        })?;
    let app = portfolio.resolved(stored);
    let entry = EnrichedApplication::new(&app);

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "show",
            "application": entry,
        }))?;
        return Ok(());
    }

    print!("{}", ctx.renderer.application(&entry));
    Ok(())
}

pub fn cmd_summary(ctx: &CommandContext) -> Result<()> {
    let portfolio = load(ctx)?;
    let summary = summarize(&portfolio.enriched());

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "summary",
            "summary": summary,
        }))?;
        return Ok(());
    }

    print!("{}", ctx.renderer.summary(&summary));
    Ok(())
}

pub fn cmd_landscape(ctx: &CommandContext) -> Result<()> {
    let portfolio = load(ctx)?;
    let enriched = portfolio.enriched();
    let domains = group_by_domain(&enriched);

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "landscape",
            "domains": domains,
        }))?;
        return Ok(());
    }

    print!("{}", ctx.renderer.landscape(&domains));
    Ok(())
}

/// Needs no portfolio
pub fn cmd_classify(ctx: &CommandContext, value: BusinessValue, health: u8) -> Result<()> {
    let disposition = classify(value, Health::new(i64::from(health)));

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "classify",
            "value": value,
            "health": health,
            "disposition": disposition,
        }))?;
        return Ok(());
    }

    println!("{}", ctx.renderer.disposition(&disposition));
    Ok(())
}
