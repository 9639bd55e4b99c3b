//! Portfolio Use Case
//!
//! Load-modify-save orchestration for single-record edits, dependency links
//! and vocabulary maintenance. Every successful mutation is one save.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{Application, Costs, Direction, Portfolio};
use crate::domain::ports::{
    NoopEventSink, PortfolioEvent, PortfolioEventSink, PortfolioRepository,
};
use crate::domain::value_objects::{
    AppId, BusinessValue, DataSensitivity, Health, LifecycleStatus, PiiRisk, TechnicalDebt, Tier,
};
use crate::error::{NexusError, NexusResult};

/// Field changes for `add` and `edit`. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub tier: Option<Tier>,
    pub value: Option<BusinessValue>,
    pub health: Option<Health>,
    pub capability: Option<String>,
    pub domain: Option<String>,
    pub owner: Option<String>,
    pub description: Option<String>,
    pub status: Option<LifecycleStatus>,
    pub pii: Option<PiiRisk>,
    pub gdpr: Option<bool>,
    pub debt: Option<TechnicalDebt>,
    pub sensitivity: Option<DataSensitivity>,
    pub license: Option<f64>,
    pub maintenance: Option<f64>,
    pub cost: Option<f64>,
}

impl ApplicationPatch {
    /// Copy with text fields trimmed the way the CSV importer reads them.
    /// A name or code that is blank after trimming is rejected.
    pub fn normalized(&self) -> NexusResult<Self> {
        let trimmed = |value: &Option<String>| value.as_deref().map(|v| v.trim().to_string());
        Ok(Self {
            name: self.name.as_deref().map(|v| required("name", v)).transpose()?,
            code: self.code.as_deref().map(|v| required("code", v)).transpose()?,
            capability: trimmed(&self.capability),
            domain: trimmed(&self.domain),
            owner: trimmed(&self.owner),
            description: trimmed(&self.description),
            ..self.clone()
        })
    }

    /// Apply to a record. Changing either cost component re-derives the
    /// total unless an explicit total is part of the same patch.
    pub fn apply(&self, app: &mut Application) {
        if let Some(name) = &self.name {
            app.name = name.clone();
        }
        if let Some(code) = &self.code {
            app.code = code.clone();
        }
        if let Some(tier) = self.tier {
            app.tier = tier;
        }
        if let Some(value) = self.value {
            app.value = value;
        }
        if let Some(health) = self.health {
            app.health = health;
        }
        if let Some(capability) = &self.capability {
            app.capability_id = capability.clone();
        }
        if let Some(domain) = &self.domain {
            app.domain = domain.clone();
        }
        if let Some(owner) = &self.owner {
            app.owner = owner.clone();
        }
        if let Some(description) = &self.description {
            app.description = description.clone();
        }
        if let Some(status) = self.status {
            app.lifecycle.status = status;
        }
        if let Some(pii) = self.pii {
            app.security.pii_risk = pii;
        }
        if let Some(gdpr) = self.gdpr {
            app.security.gdpr_compliant = gdpr;
        }
        if let Some(debt) = self.debt {
            app.technical_debt = debt;
        }
        if let Some(sensitivity) = self.sensitivity {
            app.data_sensitivity = sensitivity;
        }

        if self.license.is_some() || self.maintenance.is_some() {
            let license = self.license.unwrap_or(app.costs.license);
            let maintenance = self.maintenance.unwrap_or(app.costs.maintenance);
            app.costs = Costs::from_components(license, maintenance);
        }
        if let Some(total) = self.cost {
            app.costs = app.costs.with_total(total);
        }
    }
}

pub struct PortfolioUseCase<R>
where
    R: PortfolioRepository,
{
    repository: R,
    events: Arc<dyn PortfolioEventSink>,
}

impl<R> PortfolioUseCase<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn PortfolioEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn load(&self, path: &Path) -> NexusResult<Portfolio> {
        Ok(self.repository.load(path)?)
    }

    /// Create a portfolio seeded with the default vocabularies
    pub fn init(&self, path: &Path, force: bool) -> NexusResult<Portfolio> {
        if self.repository.exists(path) && !force {
            return Err(NexusError::PortfolioExists {
                path: path.to_path_buf(),
            });
        }
        let portfolio = Portfolio::with_default_vocabularies();
        self.repository.save(&portfolio, path)?;
        tracing::info!(path = %path.display(), "initialised portfolio");
        Ok(portfolio)
    }

    /// Create a record with a fresh id. Name and code are required.
    pub fn add(
        &self,
        path: &Path,
        name: &str,
        code: &str,
        patch: &ApplicationPatch,
    ) -> NexusResult<Application> {
        let name = required("name", name)?;
        let code = required("code", code)?;
        let patch = patch.normalized()?;

        let mut portfolio = self.load(path)?;
        let mut app = portfolio.create_application(name, code);
        patch.apply(&mut app);

        if portfolio.find_by_code(&app.code).is_some() {
            tracing::warn!(code = %app.code, "code already in use");
        }
        portfolio.add(app.clone());
        self.repository.save(&portfolio, path)?;

        self.events.on_event(PortfolioEvent::ApplicationAdded {
            id: app.id.clone(),
            code: app.code.clone(),
        });
        Ok(app)
    }

    pub fn edit(
        &self,
        path: &Path,
        key: &str,
        patch: &ApplicationPatch,
    ) -> NexusResult<Application> {
        let patch = patch.normalized()?;
        let mut portfolio = self.load(path)?;
        let mut app = find(&portfolio, key)?.clone();
        patch.apply(&mut app);

        if portfolio.update(app.clone()).is_none() {
            return Err(not_found(key));
        }
        self.repository.save(&portfolio, path)?;

        self.events.on_event(PortfolioEvent::ApplicationUpdated {
            id: app.id.clone(),
            code: app.code.clone(),
        });
        Ok(app)
    }

    /// Hard delete. Dependency ids pointing at the record stay behind on
    /// other records.
    pub fn remove(&self, path: &Path, key: &str) -> NexusResult<Application> {
        let mut portfolio = self.load(path)?;
        let id = find(&portfolio, key)?.id.clone();
        let removed = portfolio.delete(&id).ok_or_else(|| not_found(key))?;
        self.repository.save(&portfolio, path)?;

        self.events.on_event(PortfolioEvent::ApplicationDeleted {
            id: removed.id.clone(),
            code: removed.code.clone(),
        });
        Ok(removed)
    }

    /// Add `to` to one of `from`'s dependency lists. Returns `false` when the
    /// link already existed.
    pub fn link(
        &self,
        path: &Path,
        from: &str,
        to: &str,
        direction: Direction,
    ) -> NexusResult<bool> {
        self.edit_dependency(path, from, to, |app, id| app.add_dependency(direction, id))
    }

    /// Returns `false` when there was no such link
    pub fn unlink(
        &self,
        path: &Path,
        from: &str,
        to: &str,
        direction: Direction,
    ) -> NexusResult<bool> {
        self.edit_dependency(path, from, to, |app, id| app.remove_dependency(direction, &id))
    }

    /// Flip a link. Returns whether the link exists afterwards.
    pub fn toggle(
        &self,
        path: &Path,
        from: &str,
        to: &str,
        direction: Direction,
    ) -> NexusResult<bool> {
        self.edit_dependency(path, from, to, |app, id| app.toggle_dependency(direction, id))
    }

    fn edit_dependency<F>(&self, path: &Path, from: &str, to: &str, change: F) -> NexusResult<bool>
    where
        F: FnOnce(&mut Application, AppId) -> bool,
    {
        let mut portfolio = self.load(path)?;
        let mut source = find(&portfolio, from)?.clone();
        let target_id = find(&portfolio, to)?.id.clone();

        if source.id == target_id {
            return Err(NexusError::SelfDependency { code: source.code });
        }

        let result = change(&mut source, target_id);
        let code = source.code.clone();
        let id = source.id.clone();
        portfolio.update(source);
        self.repository.save(&portfolio, path)?;

        self.events.on_event(PortfolioEvent::ApplicationUpdated { id, code });
        Ok(result)
    }

    pub fn add_vocabulary(
        &self,
        path: &Path,
        kind: VocabularyKind,
        name: &str,
    ) -> NexusResult<bool> {
        self.edit_vocabulary(path, |p| match kind {
            VocabularyKind::Capability => p.add_capability(name),
            VocabularyKind::Domain => p.add_domain(name),
        })
    }

    /// Remove a name. Applications referencing it keep the dangling value.
    pub fn remove_vocabulary(
        &self,
        path: &Path,
        kind: VocabularyKind,
        name: &str,
    ) -> NexusResult<bool> {
        self.edit_vocabulary(path, |p| match kind {
            VocabularyKind::Capability => p.remove_capability(name),
            VocabularyKind::Domain => p.remove_domain(name),
        })
    }

    fn edit_vocabulary<F>(&self, path: &Path, change: F) -> NexusResult<bool>
    where
        F: FnOnce(&mut Portfolio) -> bool,
    {
        let mut portfolio = self.load(path)?;
        let changed = change(&mut portfolio);
        if changed {
            self.repository.save(&portfolio, path)?;
        }
        Ok(changed)
    }
}

/// Which controlled vocabulary an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Capability,
    Domain,
}

fn required(field: &'static str, value: &str) -> NexusResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NexusError::InvalidField {
            field,
            value: value.to_string(),
            expected: "a non-blank value".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn find<'a>(portfolio: &'a Portfolio, key: &str) -> NexusResult<&'a Application> {
    portfolio.lookup(key).ok_or_else(|| not_found(key))
}

fn not_found(key: &str) -> NexusError {
    NexusError::ApplicationNotFound {
        key: key.to_string(),
    }
}
