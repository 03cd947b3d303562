//! Indonesian display formatting for amounts and dates.

use chrono::{Datelike, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Group digits in threes with `.` separators: 1250000 -> "1.250.000"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rupiah without decimals: 750000 -> "Rp 750.000", -1000 -> "-Rp 1.000"
pub fn format_rupiah(amount: i64) -> String {
    let formatted = format!("Rp {}", format_thousands(amount.unsigned_abs()));
    if amount < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn month_name_id(month: u32) -> &'static str {
    MONTHS_ID
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Januari")
}

/// Long date: "19 Desember 2025"
pub fn format_date_id(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name_id(date.month()), date.year())
}

/// Day and month for table rows: "19/12"
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}
