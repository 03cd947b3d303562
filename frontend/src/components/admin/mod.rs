pub mod content_tab;
pub mod dashboard;
pub mod distribution_tab;
pub mod expense_tab;
pub mod fields;
pub mod income_tab;
pub mod layout_tab;
pub mod storage_tab;

pub use dashboard::AdminDashboard;
