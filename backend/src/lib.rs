//! # Jum'at Berkah Backend
//!
//! Contains all non-UI logic for the donation tracker.
//!
//! This crate brings together:
//! - **Domain**: the ledger reducer, derived totals, the admin access gate,
//!   the donation confirmation flow and the headless view controller
//! - **Storage**: the key-value slot the whole application state lives in
//! - **Config**: operator-set constants (credentials, storage key, delays)
//!
//! The backend is UI-agnostic. The Yew frontend drives a [`ViewController`]
//! backed by browser `localStorage`; tests drive the same controller over
//! [`MemoryStorage`] or [`FileStorage`].
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓  UiEvent
//! ViewController (auth gate, donation flow, notices)
//!     ↓  Command
//! AppStore (pure reducer + persist after every change)
//!     ↓
//! KeyValueStorage (localStorage, file, memory)
//! ```

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;

pub use config::AppConfig;
pub use domain::*;
pub use storage::*;

/// Build a view controller over any storage backend
pub fn initialize_backend<S: KeyValueStorage>(storage: S, config: &AppConfig) -> ViewController<S> {
    info!("Setting up state store under key '{}'", config.storage_key);
    let controller = ViewController::new(storage, config);

    let summary = controller.summary();
    info!(
        "Backend ready: {} incomes, {} pending, balance {}",
        controller.data().incomes.len(),
        summary.pending_count,
        summary.balance
    );
    controller
}

/// Build a view controller persisting to JSON files under `data_directory`,
/// with the configured storage quota applied
pub fn initialize_file_backend<P: AsRef<Path>>(
    data_directory: P,
    config: &AppConfig,
) -> Result<ViewController<FileStorage>> {
    info!("Setting up file storage in {}", data_directory.as_ref().display());
    let mut storage = FileStorage::new(data_directory)?;
    if let Some(quota) = config.storage_quota_bytes {
        storage = storage.with_quota(quota);
    }
    Ok(initialize_backend(storage, config))
}
