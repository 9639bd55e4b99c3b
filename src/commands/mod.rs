//! Command handlers
//!
//! One `cmd_*` function per subcommand. Handlers return `anyhow::Result` and
//! print either text views or NDJSON (`{"event": "data", ...}`) under `--json`.

pub mod export;
pub mod graph;
pub mod import;
pub mod init;
pub mod records;
pub mod registry;
pub mod vocab;

use std::io::{self, Write};
use std::path::PathBuf;

use nexus::config::{Config, ConfigWarning};
use nexus::presentation::TextRenderer;

/// Settings every handler needs, resolved once in `main`
pub struct CommandContext {
    pub json: bool,
    pub verbose: u8,
    pub portfolio: PathBuf,
    pub config: Config,
    pub renderer: TextRenderer,
}

impl CommandContext {
    pub fn new(
        json: bool,
        verbose: u8,
        portfolio: Option<PathBuf>,
        ascii: bool,
        config: Config,
    ) -> Self {
        let unicode = config.output.unicode && !ascii;
        Self {
            json,
            verbose,
            portfolio: portfolio.unwrap_or_else(|| config.portfolio.path.clone()),
            renderer: TextRenderer::new(unicode, verbose),
            config,
        }
    }
}

/// Write one NDJSON line to stdout
pub fn emit_json(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &event)?;
    out.write_all(b"\n")
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "Warning: unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("Warning: unknown config key '{}' in {}", w.key, w.file.display()),
        }
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// `[ERROR]` line for text mode, with the context chain
pub fn format_error(err: &anyhow::Error) -> String {
    format!("[ERROR] {:#}\n", err)
}
