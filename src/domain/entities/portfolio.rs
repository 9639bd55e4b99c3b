//! Portfolio entity - the authoritative set of applications plus vocabularies
//!
//! This is a pure data structure: persistence goes through
//! `PortfolioRepository`. Mutation entry points are the only way to change
//! it, which keeps import staging honest (see `bulk_add`).

use std::collections::HashSet;

use crate::domain::services::classifier::EnrichedApplication;
use crate::domain::value_objects::{AppId, UNASSIGNED};

use super::application::Application;
use super::vocabulary::Vocabulary;

/// Capabilities a freshly initialised portfolio starts with
pub const DEFAULT_CAPABILITIES: [&str; 6] = [
    "CAP-FINANCE",
    "CAP-HR",
    "CAP-SALES",
    "CAP-LOGISTICS",
    "CAP-IT",
    "CAP-MARKETING",
];

/// Domains a freshly initialised portfolio starts with
pub const DEFAULT_DOMAINS: [&str; 6] = [
    "General",
    "IT",
    "Commercial",
    "Finance",
    "HR",
    "Supply Chain",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    applications: Vec<Application>,
    capabilities: Vocabulary,
    domains: Vocabulary,
}

impl Portfolio {
    /// Empty portfolio with empty vocabularies
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty portfolio seeded with the default vocabularies
    pub fn with_default_vocabularies() -> Self {
        Self::from_parts(
            Vec::new(),
            DEFAULT_CAPABILITIES.into_iter().collect(),
            DEFAULT_DOMAINS.into_iter().collect(),
        )
    }

    pub fn from_parts(
        applications: Vec<Application>,
        capabilities: Vocabulary,
        domains: Vocabulary,
    ) -> Self {
        Self {
            applications,
            capabilities,
            domains,
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get(&self, id: &AppId) -> Option<&Application> {
        self.applications.iter().find(|a| &a.id == id)
    }

    /// First application with the given code. Codes are unique by policy
    /// only, so later duplicates are shadowed.
    pub fn find_by_code(&self, code: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.code == code)
    }

    /// Look up by id first, then by code
    pub fn lookup(&self, key: &str) -> Option<&Application> {
        self.get(&AppId::from(key))
            .or_else(|| self.find_by_code(key))
    }

    /// Codes currently in use, for import duplicate detection
    pub fn codes(&self) -> HashSet<String> {
        self.applications.iter().map(|a| a.code.clone()).collect()
    }

    /// Insert a record. The caller supplies a unique id.
    pub fn add(&mut self, app: Application) {
        self.applications.push(app);
    }

    /// Append a batch in order, as a single mutation.
    pub fn bulk_add(&mut self, apps: Vec<Application>) {
        self.applications.extend(apps);
    }

    /// Replace the record with the same id and return the previous version.
    /// An unknown id is a no-op returning `None`; in particular an update
    /// after a delete does not re-insert the record.
    pub fn update(&mut self, app: Application) -> Option<Application> {
        let slot = self.applications.iter_mut().find(|a| a.id == app.id)?;
        Some(std::mem::replace(slot, app))
    }

    /// Hard-remove a record. Dependency lists on other records are left as
    /// they are; graph building filters the dangling ids.
    pub fn delete(&mut self, id: &AppId) -> Option<Application> {
        let pos = self.applications.iter().position(|a| &a.id == id)?;
        Some(self.applications.remove(pos))
    }

    /// Every application paired with its disposition, computed now.
    pub fn enriched(&self) -> Vec<EnrichedApplication<'_>> {
        self.applications
            .iter()
            .map(EnrichedApplication::new)
            .collect()
    }

    /// Fresh record whose soft references point at the first vocabulary
    /// entries, or the sentinel when a vocabulary is empty.
    pub fn create_application(
        &self,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Application {
        let mut app = Application::new(AppId::generate(), name, code);
        app.capability_id = self.capabilities.first().unwrap_or(UNASSIGNED).to_string();
        app.domain = self.domains.first().unwrap_or(UNASSIGNED).to_string();
        app
    }

    pub fn capabilities(&self) -> &Vocabulary {
        &self.capabilities
    }

    pub fn domains(&self) -> &Vocabulary {
        &self.domains
    }

    pub fn add_capability(&mut self, name: &str) -> bool {
        self.capabilities.add(name)
    }

    pub fn remove_capability(&mut self, name: &str) -> bool {
        self.capabilities.remove(name)
    }

    pub fn add_domain(&mut self, name: &str) -> bool {
        self.domains.add(name)
    }

    pub fn remove_domain(&mut self, name: &str) -> bool {
        self.domains.remove(name)
    }

    /// The capability name if it is still in the vocabulary, else the sentinel
    pub fn resolve_capability<'a>(&self, name: &'a str) -> &'a str {
        if self.capabilities.contains(name) {
            name
        } else {
            UNASSIGNED
        }
    }

    /// The domain name if it is still in the vocabulary, else the sentinel
    pub fn resolve_domain<'a>(&self, name: &'a str) -> &'a str {
        if self.domains.contains(name) {
            name
        } else {
            UNASSIGNED
        }
    }

    /// Copy of `app` for display, with dangling capability and domain
    /// references replaced by the sentinel. The stored record is unchanged.
    pub fn resolved(&self, app: &Application) -> Application {
        let mut view = app.clone();
        view.capability_id = self.resolve_capability(&app.capability_id).to_string();
        view.domain = self.resolve_domain(&app.domain).to_string();
        view
    }
}
