//! The ledger reducer.
//!
//! Every function here takes the current [`AppData`] by reference and
//! returns a new value; the input is never modified. The store swaps the
//! result in and persists it.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{
    AppData, Article, Collection, Distribution, Expense, GalleryItem, Income, LayoutConfig,
    DEFAULT_DONOR_NAME,
};
use uuid::Uuid;

use super::commands::{Command, NewArticle, NewDistribution, NewExpense, NewGalleryItem, NewIncome};
use super::errors::DomainError;

/// Records that can be removed by id
trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($t:ty),*) => {
        $(impl Identified for $t {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Income, Expense, Distribution, Article, GalleryItem);

/// Fresh random identifier for a new record
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parse a typed amount the lenient way a form field does: leading
/// whitespace is skipped, an optional sign and the leading digits are read,
/// and anything unparseable counts as 0. The result is clamped at 0.
pub fn coerce_amount(input: &str) -> u64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Apply one command, producing the next state
pub fn apply(data: &AppData, command: Command, today: NaiveDate) -> Result<AppData, DomainError> {
    info!("Applying {}", command.name());

    match command {
        Command::AddIncome(input) => Ok(add_income(data, input, today)),
        Command::AddPendingIncome(input) => Ok(add_pending_income(data, input, today)),
        Command::AddExpense(input) => add_expense(data, input, today),
        Command::AddDistribution(input) => add_distribution(data, input, today),
        Command::AddArticle(input) => add_article(data, input, today),
        Command::AddGalleryItem(input) => add_gallery_item(data, input),
        Command::ApprovePending { id } => approve_pending(data, &id),
        Command::RejectPending { id } => delete_item(data, Collection::PendingIncomes, &id),
        Command::DeleteItem { collection, id } => delete_item(data, collection, &id),
        Command::UpdateLayout(layout) => Ok(update_layout(data, layout)),
        Command::ClearPendingQueue => Ok(clear_pending_queue(data)),
        Command::ResetAll { confirmed } => reset_all(confirmed),
    }
}

fn build_income(input: NewIncome, today: NaiveDate) -> Income {
    let donor_name = input.donor_name.trim();
    Income {
        id: new_record_id(),
        donor_name: if donor_name.is_empty() {
            DEFAULT_DONOR_NAME.to_string()
        } else {
            donor_name.to_string()
        },
        amount: input.amount.max(0) as u64,
        date: input.date.unwrap_or(today),
        proof_image: input.proof_image.filter(|p| !p.is_empty()),
    }
}

pub fn add_income(data: &AppData, input: NewIncome, today: NaiveDate) -> AppData {
    let mut next = data.clone();
    next.incomes.push(build_income(input, today));
    next
}

pub fn add_pending_income(data: &AppData, input: NewIncome, today: NaiveDate) -> AppData {
    let mut next = data.clone();
    next.pending_incomes.push(build_income(input, today));
    next
}

pub fn add_expense(data: &AppData, input: NewExpense, today: NaiveDate) -> Result<AppData, DomainError> {
    let item_name = input.item_name.trim();
    if item_name.is_empty() {
        return Err(DomainError::Validation("item name cannot be empty".to_string()));
    }
    if input.unit_price < 0 {
        return Err(DomainError::Validation("unit price cannot be negative".to_string()));
    }
    let qty = u32::try_from(input.qty)
        .ok()
        .filter(|q| *q >= 1)
        .ok_or_else(|| DomainError::Validation("quantity must be at least 1".to_string()))?;

    let mut next = data.clone();
    next.expenses.push(Expense {
        id: new_record_id(),
        item_name: item_name.to_string(),
        unit_price: input.unit_price as u64,
        qty,
        date: input.date.unwrap_or(today),
    });
    Ok(next)
}

pub fn add_distribution(
    data: &AppData,
    input: NewDistribution,
    today: NaiveDate,
) -> Result<AppData, DomainError> {
    let item_type = input.item_type.trim();
    if item_type.is_empty() {
        return Err(DomainError::Validation("item type cannot be empty".to_string()));
    }
    let count = u32::try_from(input.count)
        .ok()
        .filter(|c| *c >= 1)
        .ok_or_else(|| DomainError::Validation("count must be at least 1".to_string()))?;

    let mut next = data.clone();
    next.distributions.push(Distribution {
        id: new_record_id(),
        count,
        item_type: item_type.to_string(),
        date: input.date.unwrap_or(today),
    });
    Ok(next)
}

pub fn add_article(data: &AppData, input: NewArticle, today: NaiveDate) -> Result<AppData, DomainError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation("article title cannot be empty".to_string()));
    }

    let mut next = data.clone();
    next.articles.push(Article {
        id: new_record_id(),
        title: title.to_string(),
        content: input.content,
        date: input.date.unwrap_or(today),
        image_url: input.image_url.trim().to_string(),
    });
    Ok(next)
}

pub fn add_gallery_item(data: &AppData, input: NewGalleryItem) -> Result<AppData, DomainError> {
    let url = input.url.trim();
    if url.is_empty() {
        return Err(DomainError::Validation("gallery url cannot be empty".to_string()));
    }

    let mut next = data.clone();
    next.gallery.push(GalleryItem {
        id: new_record_id(),
        url: url.to_string(),
        caption: input.caption.trim().to_string(),
        media_type: input.media_type,
    });
    Ok(next)
}

/// Move a pending claim into confirmed income.
///
/// Both collections change in the same new value, so no observer can see the
/// record in neither or both.
pub fn approve_pending(data: &AppData, id: &str) -> Result<AppData, DomainError> {
    let position = data
        .pending_incomes
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| {
            warn!("Cannot approve unknown pending donation {}", id);
            DomainError::NotFound {
                collection: Collection::PendingIncomes,
                id: id.to_string(),
            }
        })?;

    let mut next = data.clone();
    let approved = next.pending_incomes.remove(position);
    info!("Approved pending donation {} ({})", approved.id, approved.amount);
    next.incomes.push(approved);
    Ok(next)
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    match items.iter().position(|item| item.id() == id) {
        Some(position) => {
            items.remove(position);
            true
        }
        None => false,
    }
}

/// Remove exactly one record from one collection
pub fn delete_item(data: &AppData, collection: Collection, id: &str) -> Result<AppData, DomainError> {
    let mut next = data.clone();
    let removed = match collection {
        Collection::Incomes => remove_by_id(&mut next.incomes, id),
        Collection::PendingIncomes => remove_by_id(&mut next.pending_incomes, id),
        Collection::Expenses => remove_by_id(&mut next.expenses, id),
        Collection::Distributions => remove_by_id(&mut next.distributions, id),
        Collection::Articles => remove_by_id(&mut next.articles, id),
        Collection::Gallery => remove_by_id(&mut next.gallery, id),
    };

    if removed {
        Ok(next)
    } else {
        warn!("Nothing to delete: {} has no record {}", collection, id);
        Err(DomainError::NotFound {
            collection,
            id: id.to_string(),
        })
    }
}

pub fn update_layout(data: &AppData, layout: LayoutConfig) -> AppData {
    AppData {
        layout,
        ..data.clone()
    }
}

pub fn clear_pending_queue(data: &AppData) -> AppData {
    info!("Clearing {} pending donations", data.pending_incomes.len());
    AppData {
        pending_incomes: Vec::new(),
        ..data.clone()
    }
}

fn reset_all(confirmed: bool) -> Result<AppData, DomainError> {
    if !confirmed {
        return Err(DomainError::ConfirmationRequired);
    }
    Ok(AppData::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{date, income_input, pending_income};
    use shared::{MediaType, PrimaryColor};
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        date(2025, 12, 26)
    }

    fn empty() -> AppData {
        AppData {
            incomes: Vec::new(),
            expenses: Vec::new(),
            distributions: Vec::new(),
            ..AppData::default()
        }
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("50000"), 50_000);
        assert_eq!(coerce_amount("  250000 "), 250_000);
        assert_eq!(coerce_amount("12abc"), 12);
        assert_eq!(coerce_amount("abc"), 0);
        assert_eq!(coerce_amount(""), 0);
        assert_eq!(coerce_amount("-500"), 0);
        assert_eq!(coerce_amount("+75"), 75);
        assert_eq!(coerce_amount("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_add_income_defaults() {
        let before = empty();
        let after = add_income(&before, income_input("   ", -10), today());

        assert!(before.incomes.is_empty(), "input state must not change");
        let income = &after.incomes[0];
        assert_eq!(income.donor_name, "Hamba Allah");
        assert_eq!(income.amount, 0);
        assert_eq!(income.date, today());
        assert!(!income.id.is_empty());
    }

    #[test]
    fn test_add_income_keeps_given_values() {
        let input = NewIncome {
            donor_name: " Warga RT 02 ".to_string(),
            amount: 125_000,
            date: Some(date(2025, 12, 1)),
            proof_image: Some(String::new()),
        };
        let after = add_income(&empty(), input, today());
        let income = &after.incomes[0];
        assert_eq!(income.donor_name, "Warga RT 02");
        assert_eq!(income.amount, 125_000);
        assert_eq!(income.date, date(2025, 12, 1));
        assert_eq!(income.proof_image, None);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut data = empty();
        for i in 0..50 {
            data = add_income(&data, income_input("x", i), today());
        }
        let ids: HashSet<_> = data.incomes.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_pending_income_does_not_touch_incomes() {
        let before = AppData::default();
        let after = add_pending_income(&before, income_input("", 50_000), today());
        assert_eq!(after.incomes, before.incomes);
        assert_eq!(after.pending_incomes.len(), 1);
        assert_eq!(after.pending_incomes[0].donor_name, "Hamba Allah");
    }

    #[test]
    fn test_add_expense_validation() {
        let base = empty();
        let valid = NewExpense {
            item_name: "Air Mineral".to_string(),
            unit_price: 3_000,
            qty: 24,
            date: None,
        };
        let after = add_expense(&base, valid.clone(), today()).unwrap();
        assert_eq!(after.expenses[0].total(), 72_000);

        let zero_qty = NewExpense { qty: 0, ..valid.clone() };
        assert!(matches!(add_expense(&base, zero_qty, today()), Err(DomainError::Validation(_))));

        let negative_price = NewExpense { unit_price: -1, ..valid.clone() };
        assert!(add_expense(&base, negative_price, today()).is_err());

        let unnamed = NewExpense { item_name: "  ".to_string(), ..valid };
        assert!(add_expense(&base, unnamed, today()).is_err());
    }

    #[test]
    fn test_add_distribution_validation() {
        let base = empty();
        let ok = add_distribution(
            &base,
            NewDistribution {
                count: 25,
                item_type: "Paket Sembako".to_string(),
                date: Some(date(2025, 12, 26)),
            },
            today(),
        )
        .unwrap();
        assert_eq!(ok.distributions[0].count, 25);

        for (count, item_type) in [(0, "Paket Nasi"), (-3, "Paket Nasi"), (5, "")] {
            let result = add_distribution(
                &base,
                NewDistribution {
                    count,
                    item_type: item_type.to_string(),
                    date: None,
                },
                today(),
            );
            assert!(result.is_err(), "count {} type '{}' should be rejected", count, item_type);
        }
    }

    #[test]
    fn test_articles_and_gallery() {
        let with_article = add_article(
            &empty(),
            NewArticle {
                title: "Laporan Desember".to_string(),
                content: "Terima kasih para donatur".to_string(),
                image_url: String::new(),
                date: None,
            },
            today(),
        )
        .unwrap();
        assert_eq!(with_article.articles[0].date, today());

        let with_video = add_gallery_item(
            &with_article,
            NewGalleryItem {
                url: "https://example.org/v.mp4".to_string(),
                caption: "Pembagian".to_string(),
                media_type: MediaType::Video,
            },
        )
        .unwrap();
        assert_eq!(with_video.gallery[0].media_type, MediaType::Video);
        assert_eq!(with_video.articles, with_article.articles);

        let untitled = NewArticle {
            title: String::new(),
            content: String::new(),
            image_url: String::new(),
            date: None,
        };
        assert!(add_article(&empty(), untitled, today()).is_err());
    }

    #[test]
    fn test_approve_pending_moves_record() {
        let mut data = AppData::default();
        data.pending_incomes.push(pending_income("p1", 50_000));
        data.pending_incomes.push(pending_income("p2", 20_000));

        let approved = approve_pending(&data, "p1").unwrap();
        assert!(approved.incomes.iter().any(|i| i.id == "p1"));
        assert!(!approved.pending_incomes.iter().any(|i| i.id == "p1"));
        assert_eq!(approved.pending_incomes.len(), 1);
        assert_eq!(approved.incomes.len(), data.incomes.len() + 1);

        // second approval of the same id reports not-found and inserts nothing
        let again = approve_pending(&approved, "p1");
        assert_eq!(
            again,
            Err(DomainError::NotFound {
                collection: Collection::PendingIncomes,
                id: "p1".to_string()
            })
        );
    }

    #[test]
    fn test_reject_pending_removes_record() {
        let mut data = AppData::default();
        data.pending_incomes.push(pending_income("p1", 50_000));

        let rejected = apply(&data, Command::RejectPending { id: "p1".to_string() }, today()).unwrap();
        assert!(rejected.pending_incomes.is_empty());
        assert_eq!(rejected.incomes, data.incomes);
    }

    #[test]
    fn test_delete_item_removes_exactly_one() {
        let data = AppData::default();
        let after = delete_item(&data, Collection::Incomes, "1").unwrap();

        assert_eq!(after.incomes.len(), 1);
        assert_eq!(after.incomes[0].id, "2");
        assert_eq!(after.expenses, data.expenses);
        assert_eq!(after.distributions, data.distributions);
        assert_eq!(after.pending_incomes, data.pending_incomes);
        assert_eq!(after.layout, data.layout);
    }

    #[test]
    fn test_delete_uses_named_collection() {
        // the seed expense and distribution share id "1" with an income
        let data = AppData::default();
        let after = delete_item(&data, Collection::Expenses, "1").unwrap();
        assert!(after.expenses.is_empty());
        assert_eq!(after.incomes.len(), 2);
        assert_eq!(after.distributions.len(), 1);
    }

    #[test]
    fn test_delete_missing_id() {
        let data = AppData::default();
        let result = delete_item(&data, Collection::Gallery, "nope");
        assert!(matches!(result, Err(DomainError::NotFound { collection: Collection::Gallery, .. })));
    }

    #[test]
    fn test_update_layout_replaces_whole_config() {
        let mut layout = LayoutConfig::default();
        layout.primary_color = PrimaryColor::Indigo;
        layout.show_donation_section = false;

        let after = update_layout(&AppData::default(), layout.clone());
        assert_eq!(after.layout, layout);
        assert_eq!(after.incomes, AppData::default().incomes);
    }

    #[test]
    fn test_clear_pending_queue() {
        let mut data = AppData::default();
        data.pending_incomes.push(pending_income("p1", 1));
        data.pending_incomes.push(pending_income("p2", 2));

        let after = apply(&data, Command::ClearPendingQueue, today()).unwrap();
        assert!(after.pending_incomes.is_empty());
        assert_eq!(after.incomes, data.incomes);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let data = add_income(&AppData::default(), income_input("x", 1), today());
        assert_eq!(
            apply(&data, Command::ResetAll { confirmed: false }, today()),
            Err(DomainError::ConfirmationRequired)
        );
        assert_eq!(
            apply(&data, Command::ResetAll { confirmed: true }, today()).unwrap(),
            AppData::default()
        );
    }
}
