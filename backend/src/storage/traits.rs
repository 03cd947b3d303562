//! # Storage Traits
//!
//! Defines the storage abstraction the state store is written against.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing {attempted_bytes} bytes to '{key}'")]
    QuotaExceeded { key: String, attempted_bytes: usize },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string key-value storage
///
/// Implementations must leave the previous value in place when a write
/// fails, so a failed persist never destroys what was saved before.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Best-effort count of bytes currently held
    fn used_bytes(&self) -> StorageResult<usize>;
}
