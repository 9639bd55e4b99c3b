//! Presentation Layer
//!
//! - `cli` - clap command-line definition
//! - `factory` - wires use cases to concrete infrastructure
//! - `output` - text views

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, FieldArgs, LinkArgs, VocabAction, VocabKindArg};
pub use output::{format_cost, OutputFormat, TextRenderer};
