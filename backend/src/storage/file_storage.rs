//! # File Storage
//!
//! Stores each key as `<key>.json` inside a data directory.
//!
//! ```text
//! data/
//! └── jumat_berkah_data_v2.json
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write leaves the previous value intact.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{KeyValueStorage, StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct FileStorage {
    base_directory: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStorage {
    /// Open (and create if needed) a data directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> StorageResult<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
            quota_bytes: None,
        })
    }

    /// Limit the combined size of all stored values
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Keys become file names, so anything outside `[A-Za-z0-9_-]` is replaced
    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base_directory.join(format!("{}.json", file_stem))
    }

    fn file_len(path: &Path) -> StorageResult<usize> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.len() as usize),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key);

        if let Some(quota) = self.quota_bytes {
            let used = self.used_bytes()?;
            let needed = used - Self::file_len(&path)? + value.len();
            if needed > quota {
                warn!("File storage quota of {} bytes exceeded ({} needed)", quota, needed);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    attempted_bytes: value.len(),
                });
            }
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn used_bytes(&self) -> StorageResult<usize> {
        let mut total = 0;
        for entry in fs::read_dir(&self.base_directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                total += Self::file_len(&path)?;
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.base_directory(), nested.as_path());
    }

    #[test]
    fn test_round_trip_and_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get_item("jumat_berkah_data_v2").unwrap(), None);
        storage.set_item("jumat_berkah_data_v2", "{\"incomes\":[]}").unwrap();
        assert!(dir.path().join("jumat_berkah_data_v2.json").exists());
        assert_eq!(
            storage.get_item("jumat_berkah_data_v2").unwrap().as_deref(),
            Some("{\"incomes\":[]}")
        );
        assert!(!dir.path().join("jumat_berkah_data_v2.tmp").exists());

        storage.remove_item("jumat_berkah_data_v2").unwrap();
        assert_eq!(storage.get_item("jumat_berkah_data_v2").unwrap(), None);
    }

    #[test]
    fn test_key_is_sanitized() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("../escape/me", "x").unwrap();
        assert!(dir.path().join("___escape_me.json").exists());
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap().with_quota(10);
        storage.set_item("slot", "12345").unwrap();

        let err = storage.set_item("slot", "this is far too long").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.get_item("slot").unwrap().as_deref(), Some("12345"));
        assert_eq!(storage.used_bytes().unwrap(), 5);
    }
}
