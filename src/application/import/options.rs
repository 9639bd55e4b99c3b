//! Import options

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::value_objects::UNASSIGNED;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// File the rows came from, for events and messages
    pub source: PathBuf,
    /// Portfolio to import into
    pub portfolio_path: PathBuf,
    /// Validate and report without committing
    pub dry_run: bool,
    /// Source lines to discard before commit
    pub skip_lines: BTreeSet<usize>,
    pub default_owner: String,
    pub default_domain: String,
}

impl ImportOptions {
    pub fn new(source: impl Into<PathBuf>, portfolio_path: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            portfolio_path: portfolio_path.into(),
            dry_run: false,
            skip_lines: BTreeSet::new(),
            default_owner: UNASSIGNED.to_string(),
            default_domain: "General".to_string(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_skip_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.skip_lines = lines.into_iter().collect();
        self
    }

    pub fn with_default_owner(mut self, owner: impl Into<String>) -> Self {
        self.default_owner = owner.into();
        self
    }

    pub fn with_default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = domain.into();
        self
    }
}
