//! In-process storage. Clones share the same underlying map, so two handles
//! behave like two tabs of the same browser profile.

use log::warn;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{KeyValueStorage, StorageError, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys plus values
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut items = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let used: usize = items.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = items.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = used - replaced + key.len() + value.len();
            if needed > quota {
                warn!("Memory storage quota of {} bytes exceeded ({} needed)", quota, needed);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    attempted_bytes: value.len(),
                });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn used_bytes(&self) -> StorageResult<usize> {
        Ok(self.lock()?.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}
