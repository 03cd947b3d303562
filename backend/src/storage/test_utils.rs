//! Helpers shared by the backend's unit tests.

use chrono::NaiveDate;
use shared::{Income, DEFAULT_DONOR_NAME};

use crate::domain::app_store::AppStore;
use crate::domain::commands::NewIncome;
use crate::storage::memory::MemoryStorage;

pub const TEST_KEY: &str = "jumat_berkah_data_v2";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A pending claim with a small fake proof image
pub fn pending_income(id: &str, amount: u64) -> Income {
    Income {
        id: id.to_string(),
        donor_name: DEFAULT_DONOR_NAME.to_string(),
        amount,
        date: date(2025, 12, 20),
        proof_image: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
    }
}

pub fn income_input(donor_name: &str, amount: i64) -> NewIncome {
    NewIncome {
        donor_name: donor_name.to_string(),
        amount,
        date: None,
        proof_image: None,
    }
}

/// Store over fresh memory storage, starting from the seeded defaults
pub fn memory_store() -> AppStore<MemoryStorage> {
    AppStore::load(MemoryStorage::new(), TEST_KEY)
}
