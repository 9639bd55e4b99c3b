//! Import command handler

use std::path::Path;

use anyhow::{Context, Result};

use nexus::application::ImportOptions;
use nexus::infrastructure::csv_file::read_rows_from_path;
use nexus::presentation::factory::{create_event_sink, create_import_use_case};

use super::CommandContext;

pub fn cmd_import(ctx: &CommandContext, file: &Path, dry_run: bool, skip: &[usize]) -> Result<()> {
    let rows = read_rows_from_path(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let options = ImportOptions::new(file, &ctx.portfolio)
        .with_dry_run(dry_run)
        .with_skip_lines(skip.iter().copied())
        .with_default_owner(ctx.config.import.default_owner.clone())
        .with_default_domain(ctx.config.import.default_domain.clone());

    let use_case = create_import_use_case();
    let events = create_event_sink(ctx.json, "import");
    let result = use_case.execute_with_events(rows, &options, events)?;

    if !ctx.json {
        print!("{}", ctx.renderer.import_report(&result));
    }
    Ok(())
}
