use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name substituted when a donor leaves the name field blank
pub const DEFAULT_DONOR_NAME: &str = "Hamba Allah";

/// A confirmed donation.
///
/// Pending donation claims share the same shape (see [`PendingIncome`]) but
/// live in their own collection until an operator approves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub donor_name: String,
    /// Amount in rupiah (smallest currency unit)
    pub amount: u64,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Proof of transfer as a data URI or plain URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_image: Option<String>,
}

/// Donor-submitted claim awaiting operator review
pub type PendingIncome = Income;

impl Income {
    /// Length of the embedded proof image, in bytes of serialized text
    pub fn proof_image_bytes(&self) -> usize {
        self.proof_image.as_ref().map(|p| p.len()).unwrap_or(0)
    }
}

/// Money spent on an item. The line total is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub item_name: String,
    pub unit_price: u64,
    pub qty: u32,
    pub date: NaiveDate,
}

impl Expense {
    pub fn total(&self) -> u64 {
        self.unit_price.saturating_mul(self.qty as u64)
    }
}

/// A relief event: `count` units of `item_type` handed out on `date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub id: String,
    pub count: u32,
    pub item_type: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryColor {
    #[default]
    Emerald,
    Blue,
    Indigo,
    Rose,
    Amber,
    Slate,
}

impl PrimaryColor {
    pub const ALL: [PrimaryColor; 6] = [
        PrimaryColor::Emerald,
        PrimaryColor::Blue,
        PrimaryColor::Indigo,
        PrimaryColor::Rose,
        PrimaryColor::Amber,
        PrimaryColor::Slate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryColor::Emerald => "emerald",
            PrimaryColor::Blue => "blue",
            PrimaryColor::Indigo => "indigo",
            PrimaryColor::Rose => "rose",
            PrimaryColor::Amber => "amber",
            PrimaryColor::Slate => "slate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Plus Jakarta Sans")]
    PlusJakartaSans,
    #[serde(rename = "Inter")]
    Inter,
    #[serde(rename = "Merriweather")]
    Merriweather,
    #[serde(rename = "Roboto Mono")]
    RobotoMono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] = [
        FontFamily::PlusJakartaSans,
        FontFamily::Inter,
        FontFamily::Merriweather,
        FontFamily::RobotoMono,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::PlusJakartaSans => "Plus Jakarta Sans",
            FontFamily::Inter => "Inter",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::RobotoMono => "Roboto Mono",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BorderRadius {
    #[serde(rename = "rounded-none")]
    Square,
    #[serde(rename = "rounded-xl")]
    Rounded,
    #[serde(rename = "rounded-3xl")]
    RoundedLarge,
    #[default]
    #[serde(rename = "rounded-[3rem]")]
    RoundedExtraLarge,
}

impl BorderRadius {
    pub const ALL: [BorderRadius; 4] = [
        BorderRadius::Square,
        BorderRadius::Rounded,
        BorderRadius::RoundedLarge,
        BorderRadius::RoundedExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorderRadius::Square => "rounded-none",
            BorderRadius::Rounded => "rounded-xl",
            BorderRadius::RoundedLarge => "rounded-3xl",
            BorderRadius::RoundedExtraLarge => "rounded-[3rem]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    #[default]
    Gradient,
    Solid,
}

impl HeaderStyle {
    pub const ALL: [HeaderStyle; 2] = [HeaderStyle::Gradient, HeaderStyle::Solid];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderStyle::Gradient => "gradient",
            HeaderStyle::Solid => "solid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Soft,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Soft];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Soft => "soft",
        }
    }
}

/// Cosmetic and textual settings edited from the admin dashboard.
///
/// Every field has a default; a stored blob missing a field picks up the
/// default on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub primary_color: PrimaryColor,
    pub font_family: FontFamily,
    pub animation_enabled: bool,
    pub hero_image_url: String,
    pub border_radius: BorderRadius,
    pub header_style: HeaderStyle,
    pub theme_mode: ThemeMode,
    pub show_donation_section: bool,
    pub qris_image_url: String,
    pub donation_title: String,
    pub donation_description: String,
    pub foundation_name: String,
    pub foundation_description: String,
    pub about_us: String,
    pub vision: String,
    pub mission: String,
    pub goals: String,
    pub instagram_url: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            primary_color: PrimaryColor::Emerald,
            font_family: FontFamily::PlusJakartaSans,
            animation_enabled: true,
            hero_image_url: String::new(),
            border_radius: BorderRadius::RoundedExtraLarge,
            header_style: HeaderStyle::Gradient,
            theme_mode: ThemeMode::Light,
            show_donation_section: true,
            qris_image_url:
                "https://upload.wikimedia.org/wikipedia/commons/d/d0/QR_code_for_mobile_English_Wikipedia.svg"
                    .to_string(),
            donation_title: "Mari Jadi Bagian dari Kebaikan".to_string(),
            donation_description: "Setiap donasi Anda sangat berarti bagi mereka yang membutuhkan. \
                Mari berbagi kebahagiaan di hari Jum'at yang penuh berkah."
                .to_string(),
            foundation_name: "Ogah Ribet Foundation".to_string(),
            foundation_description: String::new(),
            about_us: String::new(),
            vision: String::new(),
            mission: String::new(),
            goals: String::new(),
            instagram_url: String::new(),
        }
    }
}

/// The whole persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub pending_incomes: Vec<PendingIncome>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl Default for AppData {
    /// First-run data: a couple of seed records so the public view is not empty
    fn default() -> Self {
        Self {
            incomes: vec![
                Income {
                    id: "1".to_string(),
                    donor_name: DEFAULT_DONOR_NAME.to_string(),
                    amount: 500_000,
                    date: seed_date(2025, 12, 18),
                    proof_image: None,
                },
                Income {
                    id: "2".to_string(),
                    donor_name: "Warga RT 01".to_string(),
                    amount: 250_000,
                    date: seed_date(2025, 12, 19),
                    proof_image: None,
                },
            ],
            pending_incomes: Vec::new(),
            expenses: vec![Expense {
                id: "1".to_string(),
                item_name: "Nasi Kotak Ayam Bakar".to_string(),
                unit_price: 20_000,
                qty: 10,
                date: seed_date(2025, 12, 19),
            }],
            distributions: vec![Distribution {
                id: "1".to_string(),
                count: 10,
                item_type: "Paket Nasi".to_string(),
                date: seed_date(2025, 12, 19),
            }],
            articles: Vec::new(),
            gallery: Vec::new(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Collections an operator can delete records from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Incomes,
    PendingIncomes,
    Expenses,
    Distributions,
    Articles,
    Gallery,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Incomes => "incomes",
            Collection::PendingIncomes => "pendingIncomes",
            Collection::Expenses => "expenses",
            Collection::Distributions => "distributions",
            Collection::Articles => "articles",
            Collection::Gallery => "gallery",
        };
        write!(f, "{}", name)
    }
}

/// Which top-level view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewMode {
    #[default]
    Public,
    Admin,
}

/// Derived totals shown on the summary cards. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: u64,
    pub total_expense: u64,
    /// May be negative when spending outruns donations
    pub balance: i64,
    pub latest_distribution: Option<Distribution>,
    pub pending_count: usize,
    pub pending_amount: u64,
}

/// Validation errors for the public donation confirmation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DonationValidationError {
    MissingAmount,
    InvalidAmount(String),
    AmountNotPositive,
    MissingProofImage,
}

/// Validation result for the donation confirmation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationFormValidation {
    pub is_valid: bool,
    pub errors: Vec<DonationValidationError>,
    pub cleaned_amount: Option<u64>,
}

/// Breakdown of how much of the persisted blob each part takes up
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageUsage {
    pub total_bytes: usize,
    pub pending_proof_bytes: usize,
    pub confirmed_proof_bytes: usize,
}

impl StorageUsage {
    /// Bytes taken by everything except embedded proof images
    pub fn structured_bytes(&self) -> usize {
        self.total_bytes
            .saturating_sub(self.pending_proof_bytes)
            .saturating_sub(self.confirmed_proof_bytes)
    }
}

/// A user-visible, non-fatal message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Notice {
    Info(String),
    /// Persisting failed because the storage quota is exhausted
    StorageFull(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(m) | Notice::StorageFull(m) | Notice::Error(m) => m,
        }
    }
}
