//! # App Data Repository
//!
//! Loads and saves the whole [`AppData`] blob in one storage slot.
//!
//! Loading never fails. An empty slot yields the seeded defaults, a corrupt
//! blob is logged and replaced by defaults, and a blob written by an older
//! build gets the current default for every layout field it does not know
//! about (the stored layout is shallow-merged over the default layout).
//! A layout field whose stored value this build cannot read falls back to its
//! default instead of discarding the records stored next to it.

use log::{debug, info, warn};
use serde::de::Error as _;
use serde_json::Value;
use shared::{AppData, LayoutConfig, StorageUsage};

use super::traits::{KeyValueStorage, StorageResult};

#[derive(Debug, Clone)]
pub struct AppDataRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> AppDataRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> AppData {
        match self.storage.get_item(&self.key) {
            Ok(None) => {
                info!("No saved data under '{}', starting from defaults", self.key);
                AppData::default()
            }
            Ok(Some(raw)) => match parse_app_data(&raw) {
                Ok(data) => {
                    info!(
                        "Loaded saved data: {} incomes, {} pending, {} expenses, {} distributions",
                        data.incomes.len(),
                        data.pending_incomes.len(),
                        data.expenses.len(),
                        data.distributions.len()
                    );
                    data
                }
                Err(e) => {
                    warn!("Saved data under '{}' is unreadable ({}), using defaults", self.key, e);
                    AppData::default()
                }
            },
            Err(e) => {
                warn!("Could not read '{}' from storage ({}), using defaults", self.key, e);
                AppData::default()
            }
        }
    }

    /// Serialize and write the full state, returning the number of bytes written
    pub fn save(&self, data: &AppData) -> StorageResult<usize> {
        let serialized = serde_json::to_string(data)?;
        self.storage.set_item(&self.key, &serialized)?;
        debug!("Persisted {} bytes under '{}'", serialized.len(), self.key);
        Ok(serialized.len())
    }

    /// Remove the slot entirely; the next load starts from defaults
    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove_item(&self.key)?;
        info!("Cleared saved data under '{}'", self.key);
        Ok(())
    }
}

/// Parse a stored blob, treating `null` members as missing and filling
/// unknown layout fields from [`LayoutConfig::default`]
pub fn parse_app_data(raw: &str) -> serde_json::Result<AppData> {
    let mut value: Value = serde_json::from_str(raw)?;
    let root = value
        .as_object_mut()
        .ok_or_else(|| serde_json::Error::custom("saved data is not a JSON object"))?;
    root.retain(|_, member| !member.is_null());

    let layout = match root.get("layout") {
        Some(Value::Object(stored)) => merge_layout(stored)?,
        _ => serde_json::to_value(LayoutConfig::default())?,
    };
    root.insert("layout".to_string(), layout);

    serde_json::from_value(value)
}

/// Overlay stored layout fields on the defaults one at a time, keeping the
/// default for any field whose stored value does not deserialize
fn merge_layout(stored: &serde_json::Map<String, Value>) -> serde_json::Result<Value> {
    let mut merged = serde_json::to_value(LayoutConfig::default())?;
    let Some(fields) = merged.as_object_mut() else {
        return Err(serde_json::Error::custom("default layout is not a JSON object"));
    };

    for (field, stored_value) in stored {
        if stored_value.is_null() {
            continue;
        }
        let previous = fields.insert(field.clone(), stored_value.clone());
        let candidate = Value::Object(fields.clone());
        if let Err(e) = serde_json::from_value::<LayoutConfig>(candidate) {
            warn!("Ignoring stored layout field '{}' ({}), using the default", field, e);
            match previous {
                Some(default_value) => fields.insert(field.clone(), default_value),
                None => fields.remove(field),
            };
        }
    }
    Ok(merged)
}

/// How much of the serialized blob is taken up by embedded proof images
pub fn measure_usage(data: &AppData) -> StorageUsage {
    let total_bytes = serde_json::to_string(data).map(|s| s.len()).unwrap_or(0);
    StorageUsage {
        total_bytes,
        pending_proof_bytes: data.pending_incomes.iter().map(|i| i.proof_image_bytes()).sum(),
        confirmed_proof_bytes: data.incomes.iter().map(|i| i.proof_image_bytes()).sum(),
    }
}
