//! Domain-level command types.
//!
//! Every state change goes through a [`Command`]. The `New*` inputs carry
//! what a form collected; signed amounts let the reducer see (and coerce or
//! reject) negative input instead of failing to parse it.

use chrono::NaiveDate;
use shared::{Collection, LayoutConfig, MediaType};

/// Input for recording a donation, confirmed or pending
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    /// Blank names become "Hamba Allah"
    pub donor_name: String,
    /// Negative amounts are recorded as 0
    pub amount: i64,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub proof_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub item_name: String,
    pub unit_price: i64,
    pub qty: i64,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDistribution {
    pub count: i64,
    pub item_type: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGalleryItem {
    pub url: String,
    pub caption: String,
    pub media_type: MediaType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddIncome(NewIncome),
    /// Public donation confirmation; waits for operator review
    AddPendingIncome(NewIncome),
    AddExpense(NewExpense),
    AddDistribution(NewDistribution),
    AddArticle(NewArticle),
    AddGalleryItem(NewGalleryItem),
    ApprovePending { id: String },
    RejectPending { id: String },
    DeleteItem { collection: Collection, id: String },
    UpdateLayout(LayoutConfig),
    /// Drop every pending claim (and its embedded proof image)
    ClearPendingQueue,
    /// Back to the seeded defaults with the stored slot removed
    ResetAll { confirmed: bool },
}

impl Command {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddIncome(_) => "add_income",
            Command::AddPendingIncome(_) => "add_pending_income",
            Command::AddExpense(_) => "add_expense",
            Command::AddDistribution(_) => "add_distribution",
            Command::AddArticle(_) => "add_article",
            Command::AddGalleryItem(_) => "add_gallery_item",
            Command::ApprovePending { .. } => "approve_pending",
            Command::RejectPending { .. } => "reject_pending",
            Command::DeleteItem { .. } => "delete_item",
            Command::UpdateLayout(_) => "update_layout",
            Command::ClearPendingQueue => "clear_pending_queue",
            Command::ResetAll { .. } => "reset_all",
        }
    }
}
