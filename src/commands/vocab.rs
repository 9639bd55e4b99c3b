//! Vocab command handler

use anyhow::Result;

use nexus::application::VocabularyKind;
use nexus::presentation::factory::{create_event_sink, create_portfolio_use_case};
use nexus::presentation::{VocabAction, VocabKindArg};

use super::{emit_json, CommandContext};

pub fn cmd_vocab(ctx: &CommandContext, kind: VocabKindArg, action: VocabAction) -> Result<()> {
    let use_case = create_portfolio_use_case(create_event_sink(false, "vocab"));
    let kind = VocabularyKind::from(kind);
    let title = match kind {
        VocabularyKind::Capability => "Capabilities",
        VocabularyKind::Domain => "Domains",
    };

    let (name, changed) = match action {
        VocabAction::List => {
            let portfolio = use_case.load(&ctx.portfolio)?;
            let vocabulary = match kind {
                VocabularyKind::Capability => portfolio.capabilities(),
                VocabularyKind::Domain => portfolio.domains(),
            };
            if ctx.json {
                emit_json(serde_json::json!({
                    "event": "data",
                    "command": "vocab",
                    "kind": title.to_lowercase(),
                    "entries": vocabulary.entries(),
                }))?;
            } else {
                print!("{}", ctx.renderer.vocabulary(title, vocabulary));
            }
            return Ok(());
        }
        VocabAction::Add { name } => {
            let changed = use_case.add_vocabulary(&ctx.portfolio, kind, &name)?;
            (name, changed)
        }
        VocabAction::Remove { name } => {
            let changed = use_case.remove_vocabulary(&ctx.portfolio, kind, &name)?;
            (name, changed)
        }
    };

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "vocab",
            "kind": title.to_lowercase(),
            "name": name,
            "changed": changed,
        }))?;
    } else if changed {
        println!("{}: updated '{}'", title, name);
    } else {
        println!("{}: '{}' unchanged", title, name);
    }
    Ok(())
}
