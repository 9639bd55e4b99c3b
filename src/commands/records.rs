//! Record edits: add, edit, remove and dependency links
//!
//! Under `--json` the use case's event sink reports each change, so these
//! handlers print nothing else.

use anyhow::Result;

use nexus::presentation::factory::{create_event_sink, create_portfolio_use_case};
use nexus::presentation::{FieldArgs, LinkArgs};

use super::CommandContext;

/// Which dependency edit to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Link,
    Unlink,
    Toggle,
}

impl LinkAction {
    fn command(&self) -> &'static str {
        match self {
            LinkAction::Link => "link",
            LinkAction::Unlink => "unlink",
            LinkAction::Toggle => "toggle",
        }
    }
}

pub fn cmd_add(ctx: &CommandContext, name: String, code: String, fields: FieldArgs) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(ctx.json, "add"));
    let patch = fields.into_patch(None, None);
    let app = use_case.add(&ctx.portfolio, &name, &code, &patch)?;

    if !ctx.json {
        println!("Added {} ({}) as {}", app.name, app.code, app.id);
    }
    Ok(())
}

pub fn cmd_edit(
    ctx: &CommandContext,
    key: &str,
    name: Option<String>,
    code: Option<String>,
    fields: FieldArgs,
) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(ctx.json, "edit"));
    let patch = fields.into_patch(name, code);
    let app = use_case.edit(&ctx.portfolio, key, &patch)?;

    if !ctx.json {
        println!("Updated {} ({})", app.name, app.code);
    }
    Ok(())
}

pub fn cmd_remove(ctx: &CommandContext, key: &str) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(ctx.json, "remove"));
    let app = use_case.remove(&ctx.portfolio, key)?;

    if !ctx.json {
        println!("Removed {} ({})", app.name, app.code);
    }
    Ok(())
}

pub fn cmd_link(ctx: &CommandContext, action: LinkAction, args: &LinkArgs) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(ctx.json, action.command()));
    let direction = args.direction();
    let path = &ctx.portfolio;

    let message = match action {
        LinkAction::Link => {
            if use_case.link(path, &args.from, &args.to, direction)? {
                "Linked"
            } else {
                "Already linked"
            }
        }
        LinkAction::Unlink => {
            if use_case.unlink(path, &args.from, &args.to, direction)? {
                "Unlinked"
            } else {
                "Not linked"
            }
        }
        LinkAction::Toggle => {
            if use_case.toggle(path, &args.from, &args.to, direction)? {
                "Linked"
            } else {
                "Unlinked"
            }
        }
    };

    if !ctx.json {
        let arrow = if args.upstream { "<-" } else { "->" };
        println!("{}: {} {} {}", message, args.from, arrow, args.to);
    }
    Ok(())
}
