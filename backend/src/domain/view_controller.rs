//! Headless view controller.
//!
//! Owns everything a screen needs besides rendering: the store, the access
//! gate, the donation flow, the hidden secret field and the current notice.
//! The UI turns DOM events into [`UiEvent`]s, hands them to
//! [`ViewController::handle`] and re-renders from the accessors.
//!
//! Admin commands are only honoured in admin mode. The public page can do
//! exactly one write: queueing a donation claim once its submit delay has
//! elapsed.

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use shared::{AppData, FinancialSummary, Notice, StorageUsage, ViewMode};

use super::app_store::{AppStore, PersistStatus};
use super::auth_gate_service::AuthGateService;
use super::commands::Command;
use super::donation_flow::{DonationFlow, FlowTimer};
use super::errors::DomainError;
use super::proof_image::ProofImage;
use crate::config::AppConfig;
use crate::storage::KeyValueStorage;

pub const STORAGE_FULL_MESSAGE: &str =
    "Penyimpanan browser penuh. Perubahan hanya tersimpan sementara; hapus antrian konfirmasi donasi untuk mengosongkan ruang.";

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Live value of the hidden code input on the public page
    SecretCodeTyped(String),
    LoginSubmitted { username: String, password: String },
    LoginDismissed,
    Logout,
    DonationModalOpened,
    DonationModalClosed,
    DonorNameChanged(String),
    DonationAmountChanged(String),
    ProofImageSelected { mime_type: String, bytes: Vec<u8> },
    /// The browser could not read the chosen file
    ProofImageUnreadable(String),
    DonationSubmitted,
    DonationTimerElapsed(FlowTimer),
    Admin(Command),
    NoticeDismissed,
    HistoryToggled,
}

#[derive(Debug, Clone)]
pub struct ViewController<S> {
    store: AppStore<S>,
    auth: AuthGateService,
    donation: DonationFlow,
    secret_field: String,
    notice: Option<Notice>,
    history_expanded: bool,
    max_proof_image_bytes: usize,
}

impl<S: KeyValueStorage> ViewController<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        Self {
            store: AppStore::load(storage, config.storage_key.clone()),
            auth: AuthGateService::new(config),
            donation: DonationFlow::new(config),
            secret_field: String::new(),
            notice: None,
            history_expanded: false,
            max_proof_image_bytes: config.max_proof_image_bytes,
        }
    }

    pub fn data(&self) -> &AppData {
        self.store.data()
    }

    pub fn shared_data(&self) -> Rc<AppData> {
        self.store.shared_data()
    }

    pub fn summary(&self) -> FinancialSummary {
        self.store.summary()
    }

    pub fn usage(&self) -> StorageUsage {
        self.store.usage()
    }

    pub fn mode(&self) -> ViewMode {
        self.auth.mode()
    }

    pub fn auth(&self) -> &AuthGateService {
        &self.auth
    }

    pub fn donation(&self) -> &DonationFlow {
        &self.donation
    }

    pub fn secret_field(&self) -> &str {
        &self.secret_field
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn history_expanded(&self) -> bool {
        self.history_expanded
    }

    pub fn handle(&mut self, event: UiEvent) {
        self.handle_on(event, Local::now().date_naive())
    }

    pub fn handle_on(&mut self, event: UiEvent, today: NaiveDate) {
        match event {
            UiEvent::SecretCodeTyped(value) => {
                if self.auth.on_secret_input(&value) {
                    self.secret_field.clear();
                } else {
                    self.secret_field = value;
                }
            }
            UiEvent::LoginSubmitted { username, password } => {
                if !self.auth.is_login_prompt_open() {
                    debug!("Ignoring login submitted without the secret code");
                    return;
                }
                self.auth.login(&username, &password);
            }
            UiEvent::LoginDismissed => self.auth.dismiss_prompt(),
            UiEvent::Logout => self.auth.logout(),
            UiEvent::DonationModalOpened => self.donation.open_modal(),
            UiEvent::DonationModalClosed => {
                self.donation.close_modal();
            }
            UiEvent::DonorNameChanged(name) => {
                self.donation.set_donor_name(name);
            }
            UiEvent::DonationAmountChanged(amount) => {
                self.donation.set_amount_input(amount);
            }
            UiEvent::ProofImageSelected { mime_type, bytes } => {
                match ProofImage::from_bytes(&mime_type, &bytes, self.max_proof_image_bytes) {
                    Ok(image) => {
                        self.donation.attach_proof_image(image);
                    }
                    Err(e) => {
                        debug!("Rejected proof image: {}", e);
                        self.donation.reject_proof_image(e.user_message());
                    }
                }
            }
            UiEvent::ProofImageUnreadable(reason) => {
                warn!("Could not read proof image: {}", reason);
                self.donation.reject_proof_image("Gagal membaca file bukti transfer");
            }
            UiEvent::DonationSubmitted => {
                if let Err(e) = self.donation.submit() {
                    debug!("Donation confirmation not submitted: {}", e);
                }
            }
            UiEvent::DonationTimerElapsed(FlowTimer::SubmitDelayElapsed) => {
                if let Some(claim) = self.donation.complete_submission(today) {
                    self.run(Command::AddPendingIncome(claim), today);
                }
            }
            UiEvent::DonationTimerElapsed(FlowTimer::SuccessDelayElapsed) => self.donation.finish(),
            UiEvent::Admin(command) => {
                if !self.auth.is_admin() {
                    warn!("Rejected '{}' outside admin mode", command.name());
                    self.notice = Some(Notice::Error(DomainError::AccessDenied.to_string()));
                    return;
                }
                self.run(command, today);
            }
            UiEvent::NoticeDismissed => self.notice = None,
            UiEvent::HistoryToggled => self.history_expanded = !self.history_expanded,
        }
    }

    fn run(&mut self, command: Command, today: NaiveDate) {
        let name = command.name();
        let is_approval = matches!(command, Command::ApprovePending { .. });

        match self.store.dispatch_on(command, today) {
            Ok(PersistStatus::StorageFull) => {
                self.notice = Some(Notice::StorageFull(STORAGE_FULL_MESSAGE.to_string()));
            }
            Ok(PersistStatus::Failed { message }) => {
                self.notice = Some(Notice::Error(format!("Gagal menyimpan data: {}", message)));
            }
            Ok(PersistStatus::Cleared) => {
                self.notice = Some(Notice::Info("Semua data telah dikembalikan ke awal".to_string()));
            }
            Ok(PersistStatus::Saved { bytes }) => {
                info!("'{}' applied, {} bytes stored", name, bytes);
                if is_approval {
                    self.notice = Some(Notice::Info("Donasi telah disetujui".to_string()));
                } else if matches!(self.notice, Some(Notice::StorageFull(_))) {
                    self.notice = None;
                }
            }
            Err(e) => {
                warn!("'{}' rejected: {}", name, e);
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::NewIncome;
    use crate::domain::donation_flow::DonationPhase;
    use crate::storage::test_utils::{date, income_input, TEST_KEY};
    use crate::storage::MemoryStorage;
    use shared::{Collection, DEFAULT_DONOR_NAME};

    fn today() -> NaiveDate {
        date(2025, 12, 26)
    }

    fn controller() -> ViewController<MemoryStorage> {
        ViewController::new(MemoryStorage::new(), &AppConfig::default())
    }

    fn admin_controller(storage: MemoryStorage) -> ViewController<MemoryStorage> {
        let mut controller = ViewController::new(storage, &AppConfig::default());
        controller.handle_on(UiEvent::SecretCodeTyped("911".to_string()), today());
        controller.handle_on(
            UiEvent::LoginSubmitted {
                username: "ogahribet".to_string(),
                password: "jaticempaka16".to_string(),
            },
            today(),
        );
        assert_eq!(controller.mode(), ViewMode::Admin);
        controller
    }

    fn send_donation(controller: &mut ViewController<MemoryStorage>, name: &str, amount: &str) {
        controller.handle_on(UiEvent::DonationModalOpened, today());
        controller.handle_on(UiEvent::DonorNameChanged(name.to_string()), today());
        controller.handle_on(UiEvent::DonationAmountChanged(amount.to_string()), today());
        controller.handle_on(
            UiEvent::ProofImageSelected {
                mime_type: "image/jpeg".to_string(),
                bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            },
            today(),
        );
        controller.handle_on(UiEvent::DonationSubmitted, today());
    }

    #[test]
    fn test_secret_field_clears_on_match() {
        let mut controller = controller();
        controller.handle_on(UiEvent::SecretCodeTyped("91".to_string()), today());
        assert_eq!(controller.secret_field(), "91");
        assert!(!controller.auth().is_login_prompt_open());

        controller.handle_on(UiEvent::SecretCodeTyped("911".to_string()), today());
        assert_eq!(controller.secret_field(), "");
        assert!(controller.auth().is_login_prompt_open());
    }

    #[test]
    fn test_login_needs_secret_code_first() {
        let mut controller = controller();
        let credentials = || UiEvent::LoginSubmitted {
            username: "ogahribet".to_string(),
            password: "jaticempaka16".to_string(),
        };

        controller.handle_on(credentials(), today());
        assert_eq!(controller.mode(), ViewMode::Public);
        assert_eq!(controller.auth().failed_attempts(), 0);

        controller.handle_on(UiEvent::SecretCodeTyped("911".to_string()), today());
        controller.handle_on(UiEvent::LoginDismissed, today());
        controller.handle_on(credentials(), today());
        assert_eq!(controller.mode(), ViewMode::Public);

        controller.handle_on(UiEvent::SecretCodeTyped("911".to_string()), today());
        controller.handle_on(credentials(), today());
        assert_eq!(controller.mode(), ViewMode::Admin);
    }

    #[test]
    fn test_anonymous_donation_waits_for_approval() {
        let storage = MemoryStorage::new();
        let mut controller = ViewController::new(storage.clone(), &AppConfig::default());
        let income_before = controller.summary().total_income;

        send_donation(&mut controller, "", "50000");
        assert_eq!(controller.donation().phase(), DonationPhase::Submitting);
        assert!(controller.data().pending_incomes.is_empty());

        controller.handle_on(UiEvent::DonationTimerElapsed(FlowTimer::SubmitDelayElapsed), today());
        assert_eq!(controller.donation().phase(), DonationPhase::Success);

        let pending = &controller.data().pending_incomes;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].donor_name, DEFAULT_DONOR_NAME);
        assert_eq!(pending[0].amount, 50_000);
        assert!(!pending[0].proof_image.as_deref().unwrap_or("").is_empty());
        assert_eq!(controller.summary().total_income, income_before);
        assert_eq!(controller.summary().pending_amount, 50_000);

        controller.handle_on(UiEvent::DonationTimerElapsed(FlowTimer::SuccessDelayElapsed), today());
        assert_eq!(controller.donation().phase(), DonationPhase::Idle);
        assert!(!controller.donation().is_modal_open());

        // the operator approves it from a fresh session
        let mut admin = admin_controller(storage);
        let id = admin.data().pending_incomes[0].id.clone();
        admin.handle_on(UiEvent::Admin(Command::ApprovePending { id }), today());
        assert_eq!(admin.summary().total_income, income_before + 50_000);
        assert!(admin.data().pending_incomes.is_empty());
        assert!(matches!(admin.notice(), Some(Notice::Info(_))));
    }

    #[test]
    fn test_oversized_proof_is_rejected() {
        let config = AppConfig {
            max_proof_image_bytes: 2,
            ..AppConfig::default()
        };
        let mut controller = ViewController::new(MemoryStorage::new(), &config);
        controller.handle_on(UiEvent::DonationAmountChanged("10000".to_string()), today());
        controller.handle_on(
            UiEvent::ProofImageSelected {
                mime_type: "image/png".to_string(),
                bytes: vec![1, 2, 3, 4],
            },
            today(),
        );
        assert!(controller.donation().proof_image().is_none());
        assert!(controller.donation().error_message().is_some());

        controller.handle_on(UiEvent::DonationSubmitted, today());
        assert_eq!(controller.donation().phase(), DonationPhase::Idle);
    }

    #[test]
    fn test_admin_commands_need_admin_mode() {
        let mut controller = controller();
        let before = controller.data().clone();

        controller.handle_on(UiEvent::Admin(Command::AddIncome(income_input("x", 1))), today());
        assert_eq!(controller.data(), &before);
        assert!(matches!(controller.notice(), Some(Notice::Error(_))));

        controller.handle_on(UiEvent::NoticeDismissed, today());
        assert_eq!(controller.notice(), None);
    }

    #[test]
    fn test_domain_errors_become_notices() {
        let mut controller = admin_controller(MemoryStorage::new());
        controller.handle_on(
            UiEvent::Admin(Command::DeleteItem {
                collection: Collection::Expenses,
                id: "nope".to_string(),
            }),
            today(),
        );
        assert!(matches!(controller.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn test_storage_full_notice_clears_after_successful_save() {
        let storage = MemoryStorage::new().with_quota(3_000);
        let mut controller = admin_controller(storage.clone());

        let huge = NewIncome {
            proof_image: Some(format!("data:image/png;base64,{}", "A".repeat(10_000))),
            ..income_input("", 10_000)
        };
        controller.handle_on(UiEvent::Admin(Command::AddIncome(huge)), today());
        assert!(matches!(controller.notice(), Some(Notice::StorageFull(_))));
        assert_eq!(controller.data().incomes.len(), 3);

        let id = controller.data().incomes[2].id.clone();
        controller.handle_on(
            UiEvent::Admin(Command::DeleteItem {
                collection: Collection::Incomes,
                id,
            }),
            today(),
        );
        assert_eq!(controller.notice(), None);
        assert!(storage.get_item(TEST_KEY).unwrap().is_some());
    }

    #[test]
    fn test_reset_and_logout() {
        let mut controller = admin_controller(MemoryStorage::new());
        controller.handle_on(UiEvent::Admin(Command::AddIncome(income_input("x", 5))), today());

        controller.handle_on(UiEvent::Admin(Command::ResetAll { confirmed: true }), today());
        assert_eq!(controller.data(), &AppData::default());
        assert!(matches!(controller.notice(), Some(Notice::Info(_))));

        controller.handle_on(UiEvent::Logout, today());
        assert_eq!(controller.mode(), ViewMode::Public);
    }

    #[test]
    fn test_history_toggle() {
        let mut controller = controller();
        assert!(!controller.history_expanded());
        controller.handle_on(UiEvent::HistoryToggled, today());
        assert!(controller.history_expanded());
    }
}
