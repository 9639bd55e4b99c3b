//! In-memory doubles for use case tests

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;

use crate::domain::entities::Portfolio;
use crate::domain::ports::{
    PortfolioEvent, PortfolioEventSink, PortfolioRepository, RepositoryError, RepositoryResult,
};

/// Repository backed by a shared cell. Clones see the same portfolio.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    portfolio: Rc<RefCell<Option<Portfolio>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryRepository {
    pub fn with(portfolio: Portfolio) -> Self {
        let repo = Self::default();
        *repo.portfolio.borrow_mut() = Some(portfolio);
        repo
    }

    pub fn current(&self) -> Portfolio {
        self.portfolio.borrow().clone().unwrap_or_default()
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl PortfolioRepository for MemoryRepository {
    fn exists(&self, _path: &Path) -> bool {
        self.portfolio.borrow().is_some()
    }

    fn load(&self, path: &Path) -> RepositoryResult<Portfolio> {
        self.portfolio
            .borrow()
            .clone()
            .ok_or_else(|| RepositoryError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&self, portfolio: &Portfolio, _path: &Path) -> RepositoryResult<()> {
        *self.portfolio.borrow_mut() = Some(portfolio.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEventSink {
    pub events: Mutex<Vec<PortfolioEvent>>,
}

impl PortfolioEventSink for RecordingEventSink {
    fn on_event(&self, event: PortfolioEvent) {
        self.events.lock().unwrap().push(event);
    }
}
