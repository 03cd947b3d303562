//! Turning raw admin form fields into command inputs.

use chrono::NaiveDate;
use jumat_berkah_backend::domain::ledger_service::coerce_amount;

/// Lenient whole-number parse for amount, price, qty and count fields
pub fn whole_number(text: &str) -> i64 {
    i64::try_from(coerce_amount(text)).unwrap_or(i64::MAX)
}

/// Value of an `<input type="date">`; blank means today
pub fn optional_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
