pub mod admin;
pub mod donation_modal;
pub mod header;
pub mod login_modal;
pub mod notice_banner;
pub mod public_view;
pub mod summary_cards;
