//! The state store: the single source of truth for [`AppData`].
//!
//! `dispatch` runs the ledger reducer and, when it succeeds, swaps the new
//! state in and writes the whole blob back to storage. A failed write is
//! reported through [`PersistStatus`] and never undoes the in-memory change;
//! persistence simply lags until a later write succeeds.
//!
//! The state sits behind an `Rc` so clones of the store, and the views built
//! from it, share one copy of the embedded proof images.

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use shared::{AppData, FinancialSummary, StorageUsage};

use super::commands::Command;
use super::errors::DomainError;
use super::ledger_service;
use super::totals_service;
use crate::storage::{measure_usage, AppDataRepository, KeyValueStorage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Saved { bytes: usize },
    /// The slot was removed (after a reset)
    Cleared,
    /// Quota exhausted; in-memory state is ahead of storage
    StorageFull,
    Failed { message: String },
}

impl PersistStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistStatus::Saved { .. } | PersistStatus::Cleared)
    }
}

#[derive(Debug, Clone)]
pub struct AppStore<S> {
    data: Rc<AppData>,
    repository: AppDataRepository<S>,
}

impl<S: KeyValueStorage> AppStore<S> {
    /// Load from `key`, falling back to defaults on an empty or corrupt slot
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let repository = AppDataRepository::new(storage, key);
        let data = Rc::new(repository.load());
        Self { data, repository }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// A handle on the current state that stays valid after later dispatches
    pub fn shared_data(&self) -> Rc<AppData> {
        Rc::clone(&self.data)
    }

    pub fn repository(&self) -> &AppDataRepository<S> {
        &self.repository
    }

    pub fn summary(&self) -> FinancialSummary {
        totals_service::summarize(&self.data)
    }

    pub fn usage(&self) -> StorageUsage {
        measure_usage(&self.data)
    }

    /// Apply a command dated today (local time)
    pub fn dispatch(&mut self, command: Command) -> Result<PersistStatus, DomainError> {
        self.dispatch_on(command, Local::now().date_naive())
    }

    pub fn dispatch_on(&mut self, command: Command, today: NaiveDate) -> Result<PersistStatus, DomainError> {
        let is_reset = matches!(command, Command::ResetAll { .. });
        self.data = Rc::new(ledger_service::apply(&self.data, command, today)?);

        if is_reset {
            return Ok(self.clear_persisted());
        }
        Ok(self.persist())
    }

    /// Write the current state to storage
    pub fn persist(&self) -> PersistStatus {
        match self.repository.save(&self.data) {
            Ok(bytes) => PersistStatus::Saved { bytes },
            Err(e) if e.is_quota_exceeded() => {
                warn!(
                    "Storage full, keeping changes in memory only ({} pending donations hold {} bytes of images)",
                    self.data.pending_incomes.len(),
                    self.usage().pending_proof_bytes
                );
                PersistStatus::StorageFull
            }
            Err(e) => {
                error!("Failed to persist data: {}", e);
                PersistStatus::Failed { message: e.to_string() }
            }
        }
    }

    fn clear_persisted(&self) -> PersistStatus {
        match self.repository.clear() {
            Ok(()) => {
                info!("All data reset to defaults");
                PersistStatus::Cleared
            }
            Err(e) => {
                error!("Failed to clear stored data: {}", e);
                PersistStatus::Failed { message: e.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::NewIncome;
    use crate::storage::test_utils::{date, income_input, memory_store, pending_income, TEST_KEY};
    use crate::storage::MemoryStorage;
    use shared::Collection;

    fn today() -> NaiveDate {
        date(2025, 12, 26)
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = memory_store();
        let status = store
            .dispatch_on(Command::AddIncome(income_input("Bu Ani", 500_000)), today())
            .unwrap();
        assert!(matches!(status, PersistStatus::Saved { bytes } if bytes > 0));

        let reloaded = AppStore::load(store.repository().storage().clone(), TEST_KEY);
        assert_eq!(reloaded.data(), store.data());
        assert_eq!(reloaded.summary().total_income, 1_250_000);
    }

    #[test]
    fn test_failed_command_changes_nothing() {
        let mut store = memory_store();
        let before = store.data().clone();

        let result = store.dispatch_on(
            Command::DeleteItem {
                collection: Collection::Incomes,
                id: "missing".to_string(),
            },
            today(),
        );
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(store.data(), &before);
        // nothing was written either
        assert_eq!(store.repository().storage().get_item(TEST_KEY).unwrap(), None);
    }

    #[test]
    fn test_quota_exceeded_keeps_in_memory_state() {
        let storage = MemoryStorage::new().with_quota(3_000);
        let mut store = AppStore::load(storage.clone(), TEST_KEY);
        store.persist();

        let huge = NewIncome {
            proof_image: Some(format!("data:image/png;base64,{}", "A".repeat(10_000))),
            ..income_input("Donatur", 50_000)
        };
        let status = store.dispatch_on(Command::AddPendingIncome(huge), today()).unwrap();

        assert_eq!(status, PersistStatus::StorageFull);
        assert_eq!(store.data().pending_incomes.len(), 1);
        // storage still holds the last successful write
        assert!(AppStore::load(storage.clone(), TEST_KEY).data().pending_incomes.is_empty());

        // clearing the pending queue frees the space and the next write lands
        let status = store.dispatch_on(Command::ClearPendingQueue, today()).unwrap();
        assert!(status.is_saved());
        assert!(store.data().pending_incomes.is_empty());
    }

    #[test]
    fn test_approve_then_persisted() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::load(storage.clone(), TEST_KEY);
        store
            .dispatch_on(Command::AddPendingIncome(income_input("", 50_000)), today())
            .unwrap();
        let id = store.data().pending_incomes[0].id.clone();

        store.dispatch_on(Command::ApprovePending { id: id.clone() }, today()).unwrap();
        let reloaded = AppStore::load(storage, TEST_KEY);
        assert!(reloaded.data().incomes.iter().any(|i| i.id == id));
        assert!(reloaded.data().pending_incomes.is_empty());
        assert_eq!(reloaded.summary().total_income, 800_000);
    }

    #[test]
    fn test_reset_clears_storage() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::load(storage.clone(), TEST_KEY);
        store
            .dispatch_on(Command::AddIncome(income_input("x", 5)), today())
            .unwrap();
        assert!(storage.get_item(TEST_KEY).unwrap().is_some());

        assert_eq!(
            store.dispatch_on(Command::ResetAll { confirmed: false }, today()),
            Err(DomainError::ConfirmationRequired)
        );
        assert_eq!(store.data().incomes.len(), 3);

        let status = store.dispatch_on(Command::ResetAll { confirmed: true }, today()).unwrap();
        assert_eq!(status, PersistStatus::Cleared);
        assert_eq!(store.data(), &AppData::default());
        assert_eq!(storage.get_item(TEST_KEY).unwrap(), None);
    }

    #[test]
    fn test_clones_share_state_until_dispatch() {
        let mut store = memory_store();
        let copy = store.clone();
        assert!(Rc::ptr_eq(&store.shared_data(), &copy.shared_data()));

        let snapshot = store.shared_data();
        store
            .dispatch_on(Command::AddIncome(income_input("Bu Ani", 1)), today())
            .unwrap();
        assert!(!Rc::ptr_eq(&snapshot, &store.shared_data()));
        assert_eq!(snapshot.incomes.len() + 1, store.data().incomes.len());
    }

    #[test]
    fn test_usage_tracks_pending_images() {
        let mut store = memory_store();
        assert_eq!(store.usage().pending_proof_bytes, 0);

        let mut data = store.data().clone();
        data.pending_incomes.push(pending_income("p", 1));
        store.data = Rc::new(data);
        assert!(store.usage().pending_proof_bytes > 0);
    }
}
