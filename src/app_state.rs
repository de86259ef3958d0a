//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, RwLock},
};

use crate::{Error, selectors::TransactionSelectors, state::BudgetState};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The file the budget snapshot is read from.
    pub snapshot_path: PathBuf,

    /// The current budget snapshot.
    pub budget: Arc<RwLock<BudgetState>>,

    /// The caches for the derived transaction data.
    pub selectors: Arc<Mutex<TransactionSelectors>>,
}

impl AppState {
    /// Create a new [AppState] by loading the snapshot at `snapshot_path`.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or parsed.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let snapshot_path = snapshot_path.into();
        let budget = BudgetState::from_path(&snapshot_path)?;

        Ok(Self::with_budget(snapshot_path, budget))
    }

    /// Create a new [AppState] from a snapshot that has already been loaded.
    pub fn with_budget(snapshot_path: impl Into<PathBuf>, budget: BudgetState) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            budget: Arc::new(RwLock::new(budget)),
            selectors: Arc::new(Mutex::new(TransactionSelectors::new())),
        }
    }

    /// A copy of the current snapshot.
    ///
    /// # Errors
    /// Returns [Error::StateLockError] if the lock is poisoned.
    pub fn budget(&self) -> Result<BudgetState, Error> {
        self.budget
            .read()
            .map(|budget| budget.clone())
            .inspect_err(|error| tracing::error!("could not acquire the budget lock: {error}"))
            .map_err(|_| Error::StateLockError)
    }

    /// Run `select` against the current snapshot with the shared selector caches.
    ///
    /// If an earlier call panicked while holding the caches, they are cleared
    /// and used again, so one failed page does not break every later page.
    ///
    /// # Errors
    /// Returns [Error::StateLockError] if the budget lock is poisoned.
    pub fn select<T>(
        &self,
        select: impl FnOnce(&mut TransactionSelectors, &BudgetState) -> T,
    ) -> Result<T, Error> {
        let budget = self.budget()?;
        let mut selectors = self.selectors.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("A selector panicked, clearing the selector caches");
            self.selectors.clear_poison();
            let mut selectors = poisoned.into_inner();
            *selectors = TransactionSelectors::new();
            selectors
        });

        Ok(select(&mut *selectors, &budget))
    }

    /// Re-read the snapshot file and make it the current snapshot.
    ///
    /// The selector caches notice the new inputs on their next call.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be loaded, in which case the
    /// current snapshot is kept, or if the lock is poisoned.
    pub fn reload(&self) -> Result<(), Error> {
        let budget = BudgetState::from_path(&self.snapshot_path)?;

        let mut current = self
            .budget
            .write()
            .inspect_err(|error| tracing::error!("could not acquire the budget lock: {error}"))
            .map_err(|_| Error::StateLockError)?;
        *current = budget;

        tracing::debug!("Reloaded budget snapshot from {}", self.snapshot_path.display());

        Ok(())
    }
}
