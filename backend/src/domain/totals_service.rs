//! Derived totals for the summary cards.
//!
//! Nothing here is stored; totals are recomputed from the collections every
//! time they are needed.

use shared::{AppData, Distribution, FinancialSummary, Income};

/// Sum of confirmed donations. Pending claims are excluded until approved.
pub fn total_income(data: &AppData) -> u64 {
    data.incomes.iter().fold(0u64, |acc, i| acc.saturating_add(i.amount))
}

/// Sum of unit price times quantity over all expenses
pub fn total_expense(data: &AppData) -> u64 {
    data.expenses.iter().fold(0u64, |acc, e| acc.saturating_add(e.total()))
}

/// Income minus expense, not clamped at zero
pub fn balance(data: &AppData) -> i64 {
    let difference = total_income(data) as i128 - total_expense(data) as i128;
    difference.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// The distribution with the latest date.
///
/// When several share the latest date the one inserted first wins.
pub fn latest_distribution(data: &AppData) -> Option<&Distribution> {
    data.distributions.iter().fold(None, |latest: Option<&Distribution>, candidate| match latest {
        Some(current) if current.date >= candidate.date => Some(current),
        _ => Some(candidate),
    })
}

/// Confirmed donations newest first, optionally capped at `limit`.
/// Donations on the same day keep their insertion order.
pub fn recent_incomes(data: &AppData, limit: Option<usize>) -> Vec<&Income> {
    let mut incomes: Vec<&Income> = data.incomes.iter().collect();
    incomes.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        incomes.truncate(limit);
    }
    incomes
}

pub fn summarize(data: &AppData) -> FinancialSummary {
    FinancialSummary {
        total_income: total_income(data),
        total_expense: total_expense(data),
        balance: balance(data),
        latest_distribution: latest_distribution(data).cloned(),
        pending_count: data.pending_incomes.len(),
        pending_amount: data
            .pending_incomes
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::NewExpense;
    use crate::domain::ledger_service::{add_expense, add_income, add_pending_income};
    use crate::storage::test_utils::{date, income_input};

    fn blank() -> AppData {
        AppData {
            incomes: Vec::new(),
            expenses: Vec::new(),
            distributions: Vec::new(),
            ..AppData::default()
        }
    }

    fn distribution(id: &str, count: u32, on: chrono::NaiveDate) -> Distribution {
        Distribution {
            id: id.to_string(),
            count,
            item_type: "Paket Nasi".to_string(),
            date: on,
        }
    }

    #[test]
    fn test_seed_totals() {
        let summary = summarize(&AppData::default());
        assert_eq!(summary.total_income, 750_000);
        assert_eq!(summary.total_expense, 200_000);
        assert_eq!(summary.balance, 550_000);
        assert_eq!(summary.latest_distribution.map(|d| d.id), Some("1".to_string()));
        assert_eq!(summary.pending_count, 0);
    }

    #[test]
    fn test_income_sums() {
        let today = date(2025, 12, 26);
        let data = add_income(&blank(), income_input("A", 500_000), today);
        let data = add_income(&data, income_input("B", 250_000), today);
        assert_eq!(total_income(&data), 750_000);
    }

    #[test]
    fn test_balance_may_go_negative() {
        let today = date(2025, 12, 26);
        let data = add_income(&blank(), income_input("A", 10_000), today);
        let data = add_expense(
            &data,
            NewExpense {
                item_name: "Nasi Kotak".to_string(),
                unit_price: 20_000,
                qty: 3,
                date: None,
            },
            today,
        )
        .unwrap();

        assert_eq!(total_expense(&data), 60_000);
        assert_eq!(balance(&data), -50_000);
    }

    #[test]
    fn test_pending_excluded_from_income() {
        let today = date(2025, 12, 26);
        let data = add_pending_income(&AppData::default(), income_input("", 50_000), today);
        let summary = summarize(&data);
        assert_eq!(summary.total_income, 750_000);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.pending_amount, 50_000);
    }

    #[test]
    fn test_latest_distribution_by_date() {
        let mut data = blank();
        assert!(latest_distribution(&data).is_none());

        data.distributions.push(distribution("a", 10, date(2025, 12, 19)));
        data.distributions.push(distribution("b", 12, date(2025, 12, 18)));
        assert_eq!(latest_distribution(&data).unwrap().id, "a");

        data.distributions.push(distribution("c", 15, date(2025, 12, 26)));
        assert_eq!(latest_distribution(&data).unwrap().id, "c");
    }

    #[test]
    fn test_latest_distribution_tie_keeps_first_inserted() {
        let mut data = blank();
        data.distributions.push(distribution("first", 10, date(2025, 12, 19)));
        data.distributions.push(distribution("second", 20, date(2025, 12, 19)));
        assert_eq!(latest_distribution(&data).unwrap().id, "first");
    }

    #[test]
    fn test_recent_incomes_newest_first() {
        let data = AppData::default();
        let recent = recent_incomes(&data, None);
        assert_eq!(recent[0].id, "2");
        assert_eq!(recent[1].id, "1");

        assert_eq!(recent_incomes(&data, Some(1)).len(), 1);
    }
}
