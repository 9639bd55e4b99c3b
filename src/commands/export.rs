//! Export command handler

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use nexus::application::default_export_filename;
use nexus::presentation::factory::create_export_use_case;

use super::{emit_json, CommandContext};

pub fn cmd_export(ctx: &CommandContext, output: Option<PathBuf>) -> Result<()> {
    let use_case = create_export_use_case();

    if output.as_deref() == Some(Path::new("-")) {
        use_case.execute(&ctx.portfolio, io::stdout().lock())?;
        return Ok(());
    }

    let target =
        output.unwrap_or_else(|| default_export_filename(chrono::Local::now().date_naive()));
    let file = File::create(&target)
        .with_context(|| format!("failed to create {}", target.display()))?;
    let count = use_case.execute(&ctx.portfolio, BufWriter::new(file))?;

    if ctx.json {
        emit_json(serde_json::json!({
            "event": "data",
            "command": "export",
            "path": target.display().to_string(),
            "records": count,
        }))?;
        return Ok(());
    }

    println!("Exported {} applications to {}", count, target.display());
    Ok(())
}
