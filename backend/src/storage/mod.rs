//! # Storage Module
//!
//! Handles persistence of the single application-data blob.
//!
//! The whole state lives in one named key-value slot, the same contract a
//! browser's `localStorage` offers. The domain layer only sees the
//! [`KeyValueStorage`] trait, so the slot can be backed by:
//!
//! - **MemoryStorage**: in-process map, used by tests and previews
//! - **FileStorage**: one JSON file per key in a data directory
//! - **BrowserStorage**: `window.localStorage` (lives in the frontend crate)
//!
//! Storage has a finite quota. A write that would exceed it fails with
//! [`StorageError::QuotaExceeded`] and leaves the previously stored value
//! untouched.

pub mod app_data_repository;
pub mod file_storage;
pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use app_data_repository::{measure_usage, AppDataRepository};
pub use file_storage::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{KeyValueStorage, StorageError, StorageResult};
