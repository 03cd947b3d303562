//! `window.localStorage` behind the backend's storage trait.

use jumat_berkah_backend::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

/// Legacy numeric code some browsers still report for a full store
const QUOTA_EXCEEDED_ERR: u16 = 22;
/// Older Firefox reports its own name and code instead
const FIREFOX_QUOTA_REACHED: &str = "NS_ERROR_DOM_QUOTA_REACHED";
const FIREFOX_QUOTA_REACHED_CODE: u16 = 1014;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

fn local_storage() -> StorageResult<Storage> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(describe(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

fn describe(error: &JsValue) -> String {
    error
        .dyn_ref::<DomException>()
        .map(|e| format!("{}: {}", e.name(), e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

fn is_quota_exception(name: &str, code: u16) -> bool {
    matches!(name, "QuotaExceededError" | FIREFOX_QUOTA_REACHED)
        || code == QUOTA_EXCEEDED_ERR
        || code == FIREFOX_QUOTA_REACHED_CODE
}

fn is_quota_error(error: &JsValue) -> bool {
    error
        .dyn_ref::<DomException>()
        .map(|e| is_quota_exception(&e.name(), e.code()))
        .unwrap_or(false)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                    attempted_bytes: value.len(),
                }
            } else {
                StorageError::Unavailable(describe(&e))
            }
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))
    }

    fn used_bytes(&self) -> StorageResult<usize> {
        let storage = local_storage()?;
        let length = storage.length().map_err(|e| StorageError::Unavailable(describe(&e)))?;

        let mut total = 0;
        for index in 0..length {
            if let Ok(Some(key)) = storage.key(index) {
                let value = storage.get_item(&key).ok().flatten().unwrap_or_default();
                total += key.len() + value.len();
            }
        }
        Ok(total)
    }
}
