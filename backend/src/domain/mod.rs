//! # Domain Module
//!
//! Business logic for the donation tracker, independent of any UI framework
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **commands**: inputs for every state mutation
//! - **ledger_service**: the pure reducer `(AppData, Command) -> AppData`
//! - **totals_service**: derived totals (income, expense, balance, latest relief)
//! - **app_store**: current state plus persist-after-every-change
//! - **auth_gate_service**: hidden secret code and admin login
//! - **donation_flow**: the public donation confirmation state machine
//! - **proof_image**: turning an uploaded file into an embeddable data URI
//! - **formatting**: rupiah and Indonesian date display
//! - **view_controller**: translates UI events into the calls above
//!
//! ## Business Rules
//!
//! - Pending donations do not count toward income until approved
//! - Approving moves a claim from pending to income in one step
//! - Balance is income minus expense and may go negative
//! - Every mutation is persisted immediately; a failed persist keeps the
//!   in-memory change and raises a notice

pub mod app_store;
pub mod auth_gate_service;
pub mod commands;
pub mod donation_flow;
pub mod errors;
pub mod formatting;
pub mod ledger_service;
pub mod proof_image;
pub mod totals_service;
pub mod view_controller;

pub use app_store::{AppStore, PersistStatus};
pub use auth_gate_service::{AuthGateService, LoginResult};
pub use commands::*;
pub use donation_flow::{DonationFlow, DonationFlowError, DonationPhase, FlowTimer, ScheduledTransition};
pub use errors::DomainError;
pub use proof_image::{ProofImage, ProofImageError};
pub use view_controller::{UiEvent, ViewController};
