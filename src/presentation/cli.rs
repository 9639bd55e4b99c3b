//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --portfolio, --ascii) are inherited by all subcommands
//! - Applications are addressed by id or code wherever a `KEY` is taken
//! - Enumerated fields parse case-insensitively through their `FromStr` impls

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::application::{ApplicationPatch, VocabularyKind};
use crate::domain::entities::Direction;
use crate::domain::value_objects::{
    BusinessValue, DataSensitivity, Health, LifecycleStatus, PiiRisk, TechnicalDebt, Tier,
};

/// Nexus - enterprise application portfolio register
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'nexus init' to create a portfolio in the current directory.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Portfolio file (overrides config and NEXUS_PORTFOLIO)
    #[arg(long, global = true, value_name = "PATH")]
    pub portfolio: Option<PathBuf>,

    /// Plain ASCII output
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty portfolio with the default vocabularies
    Init {
        /// Overwrite an existing portfolio
        #[arg(short, long)]
        force: bool,
    },

    /// Registry grouped by capability, with dispositions and spend
    List,

    /// Full record of one application
    Show {
        /// Application id or code
        key: String,
    },

    /// Portfolio totals and disposition counts
    Summary,

    /// Register a new application
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        code: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of an existing application
    Edit {
        /// Application id or code
        key: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        code: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an application (links to it are ignored from then on)
    Remove {
        /// Application id or code
        key: String,
    },

    /// Record that FROM depends on TO
    Link(LinkArgs),

    /// Remove a dependency link
    Unlink(LinkArgs),

    /// Add the link if missing, remove it if present
    Toggle(LinkArgs),

    /// Domain > capability > application hierarchy
    Landscape,

    /// Dependency graph laid out in tier lanes
    Graph {
        /// Domain name, or ALL
        #[arg(long, default_value = "ALL")]
        scope: String,
    },

    /// Validate and stage a CSV file, then commit the valid rows
    Import {
        /// CSV file with a header row
        file: PathBuf,

        /// Validate and report without saving
        #[arg(long)]
        dry_run: bool,

        /// Data line to leave out of the commit (repeatable)
        #[arg(long = "skip", value_name = "LINE")]
        skip: Vec<usize>,
    },

    /// Write the portfolio as flat CSV
    Export {
        /// Output file (default: portfolio_export_YYYY-MM-DD.csv, '-' for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Disposition for a value and health pair
    Classify {
        #[arg(long)]
        value: BusinessValue,

        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        health: u8,
    },

    /// Maintain the capability and domain vocabularies
    Vocab {
        #[arg(value_enum)]
        kind: VocabKindArg,

        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    /// Application id or code whose list is edited
    pub from: String,

    /// Application id or code being linked
    pub to: String,

    /// Edit FROM's upstream list instead of its downstream list
    #[arg(long)]
    pub upstream: bool,
}

impl LinkArgs {
    pub fn direction(&self) -> Direction {
        if self.upstream {
            Direction::Upstream
        } else {
            Direction::Downstream
        }
    }
}

/// Optional field flags shared by `add` and `edit`
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub tier: Option<Tier>,

    #[arg(long)]
    pub value: Option<BusinessValue>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub health: Option<u8>,

    #[arg(long)]
    pub capability: Option<String>,

    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub owner: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub status: Option<LifecycleStatus>,

    #[arg(long)]
    pub pii: Option<PiiRisk>,

    #[arg(long)]
    pub gdpr: Option<bool>,

    #[arg(long)]
    pub debt: Option<TechnicalDebt>,

    #[arg(long)]
    pub sensitivity: Option<DataSensitivity>,

    /// Annual license cost
    #[arg(long)]
    pub license: Option<f64>,

    /// Annual maintenance cost
    #[arg(long)]
    pub maintenance: Option<f64>,

    /// Total annual cost (overrides license + maintenance)
    #[arg(long)]
    pub cost: Option<f64>,
}

impl FieldArgs {
    pub fn into_patch(self, name: Option<String>, code: Option<String>) -> ApplicationPatch {
        ApplicationPatch {
            name,
            code,
            tier: self.tier,
            value: self.value,
            health: self.health.map(|h| Health::new(i64::from(h))),
            capability: self.capability,
            domain: self.domain,
            owner: self.owner,
            description: self.description,
            status: self.status,
            pii: self.pii,
            gdpr: self.gdpr,
            debt: self.debt,
            sensitivity: self.sensitivity,
            license: self.license,
            maintenance: self.maintenance,
            cost: self.cost,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabKindArg {
    Capability,
    Domain,
}

impl From<VocabKindArg> for VocabularyKind {
    fn from(kind: VocabKindArg) -> Self {
        match kind {
            VocabKindArg::Capability => VocabularyKind::Capability,
            VocabKindArg::Domain => VocabularyKind::Domain,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum VocabAction {
    /// Print the entries in order
    List,
    /// Add a name (no-op if present)
    Add { name: String },
    /// Remove a name; records keep their value
    Remove { name: String },
}
