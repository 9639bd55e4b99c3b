//! Nexus CLI - enterprise application portfolio register
//!
//! Usage: nexus [--json] [-v..] [--portfolio PATH] [--ascii] <COMMAND>

mod commands;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use nexus::config::Config;
use nexus::presentation::{Cli, Commands};

use commands::records::LinkAction;
use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(cwd.as_deref());
    init_tracing(cli.verbose.max(config.output.verbosity.level()));
    if !cli.json {
        commands::print_config_warnings(&warnings);
    }

    // Box-drawing glyphs only on a terminal
    let ascii = cli.ascii || !std::io::stdout().is_terminal();
    let ctx = CommandContext::new(cli.json, cli.verbose, cli.portfolio, ascii, config);

    match run(&ctx, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if ctx.json {
                let _ = commands::emit_json(serde_json::json!({
                    "event": "error",
                    "message": format!("{:#}", err),
                }));
            } else {
                eprint!("{}", commands::format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(ctx: &CommandContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { force } => commands::init::cmd_init(ctx, force),
        Commands::List => commands::registry::cmd_list(ctx),
        Commands::Show { key } => commands::registry::cmd_show(ctx, &key),
        Commands::Summary => commands::registry::cmd_summary(ctx),
        Commands::Landscape => commands::registry::cmd_landscape(ctx),
        Commands::Classify { value, health } => {
            commands::registry::cmd_classify(ctx, value, health)
        }
        Commands::Add { name, code, fields } => commands::records::cmd_add(ctx, name, code, fields),
        Commands::Edit {
            key,
            name,
            code,
            fields,
        } => commands::records::cmd_edit(ctx, &key, name, code, fields),
        Commands::Remove { key } => commands::records::cmd_remove(ctx, &key),
        Commands::Link(args) => commands::records::cmd_link(ctx, LinkAction::Link, &args),
        Commands::Unlink(args) => commands::records::cmd_link(ctx, LinkAction::Unlink, &args),
        Commands::Toggle(args) => commands::records::cmd_link(ctx, LinkAction::Toggle, &args),
        Commands::Graph { scope } => commands::graph::cmd_graph(ctx, &scope),
        Commands::Import {
            file,
            dry_run,
            skip,
        } => commands::import::cmd_import(ctx, &file, dry_run, &skip),
        Commands::Export { output } => commands::export::cmd_export(ctx, output),
        Commands::Vocab { kind, action } => commands::vocab::cmd_vocab(ctx, kind, action),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
/// `RUST_LOG` wins over the verbosity level when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nexus={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
