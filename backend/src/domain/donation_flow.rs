//! Public donation confirmation flow.
//!
//! ```text
//! Idle --submit--> Submitting --(submit delay)--> Success --(display delay)--> Idle
//! ```
//!
//! While submitting, the form is frozen and there is no way to cancel; the
//! delay is a fixed UX pause, not a network call. When it elapses the claim
//! is handed back as a [`NewIncome`] for the pending queue. After the success
//! message has been shown the form resets and the modal closes.
//!
//! Timers live with the UI. [`DonationFlow::scheduled_transition`] tells it
//! which timer to arm for the current phase.

use chrono::NaiveDate;
use log::{debug, info};
use shared::{DonationFormValidation, DonationValidationError};
use thiserror::Error;

use super::commands::NewIncome;
use super::proof_image::ProofImage;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationPhase {
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTimer {
    SubmitDelayElapsed,
    SuccessDelayElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub after_ms: u32,
    pub timer: FlowTimer,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DonationFlowError {
    #[error("a confirmation is already being processed")]
    NotIdle,

    #[error("donation form is invalid")]
    Invalid(Vec<DonationValidationError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonationFlow {
    phase: DonationPhase,
    modal_open: bool,
    donor_name: String,
    amount_input: String,
    proof_image: Option<ProofImage>,
    error_message: Option<String>,
    submit_delay_ms: u32,
    success_display_ms: u32,
}

/// Read a rupiah amount the way people type it. "Rp 50.000" and "50.000,00"
/// are both 50000: dots separate thousands and must sit in groups of three,
/// a comma starts a sen part of one or two digits which is dropped.
/// Returns `Ok(None)` when nothing but the prefix and spaces was entered.
fn parse_amount_input(input: &str) -> Result<Option<u64>, String> {
    let trimmed = input.trim();
    let unprefixed = ["Rp", "rp", "RP"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    let compact: String = unprefixed.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let whole = match compact.split_once(',') {
        Some((whole, sen)) => {
            if sen.is_empty() || sen.len() > 2 || !sen.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("'{}' is not a valid sen part", sen));
            }
            whole
        }
        None => compact.as_str(),
    };

    let mut groups = whole.split('.');
    let leading = groups.next().unwrap_or_default();
    let thousands: Vec<&str> = groups.collect();
    if !thousands.is_empty()
        && (leading.is_empty() || leading.len() > 3 || thousands.iter().any(|group| group.len() != 3))
    {
        return Err(format!("'{}' has misplaced thousands separators", whole));
    }

    let digits: String = std::iter::once(leading).chain(thousands).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("'{}' is not a whole number", whole));
    }
    digits.parse::<u64>().map(Some).map_err(|e| e.to_string())
}

pub fn validation_message(error: &DonationValidationError) -> &'static str {
    match error {
        DonationValidationError::MissingAmount => "Nominal donasi wajib diisi",
        DonationValidationError::InvalidAmount(_) => "Nominal donasi harus berupa angka",
        DonationValidationError::AmountNotPositive => "Nominal donasi harus lebih dari 0",
        DonationValidationError::MissingProofImage => "Bukti transfer wajib diunggah",
    }
}

impl DonationFlow {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            phase: DonationPhase::Idle,
            modal_open: false,
            donor_name: String::new(),
            amount_input: String::new(),
            proof_image: None,
            error_message: None,
            submit_delay_ms: config.submit_delay_ms,
            success_display_ms: config.success_display_ms,
        }
    }

    pub fn phase(&self) -> DonationPhase {
        self.phase
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn donor_name(&self) -> &str {
        &self.donor_name
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn proof_image(&self) -> Option<&ProofImage> {
        self.proof_image.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Inputs are frozen outside the idle phase
    pub fn is_input_frozen(&self) -> bool {
        self.phase != DonationPhase::Idle
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Closing is ignored mid-submission; there is no cancel path
    pub fn close_modal(&mut self) -> bool {
        if self.phase == DonationPhase::Submitting {
            debug!("Ignoring close while a confirmation is being submitted");
            return false;
        }
        self.modal_open = false;
        if self.phase == DonationPhase::Success {
            self.phase = DonationPhase::Idle;
        }
        true
    }

    pub fn set_donor_name(&mut self, name: impl Into<String>) -> bool {
        if self.is_input_frozen() {
            return false;
        }
        self.donor_name = name.into();
        true
    }

    pub fn set_amount_input(&mut self, amount: impl Into<String>) -> bool {
        if self.is_input_frozen() {
            return false;
        }
        self.amount_input = amount.into();
        self.error_message = None;
        true
    }

    pub fn attach_proof_image(&mut self, image: ProofImage) -> bool {
        if self.is_input_frozen() {
            return false;
        }
        self.proof_image = Some(image);
        self.error_message = None;
        true
    }

    /// Record a problem with the selected file; the previous image is dropped
    pub fn reject_proof_image(&mut self, message: impl Into<String>) {
        if self.is_input_frozen() {
            return;
        }
        self.proof_image = None;
        self.error_message = Some(message.into());
    }

    pub fn validate(&self) -> DonationFormValidation {
        let mut errors = Vec::new();

        let cleaned_amount = match parse_amount_input(&self.amount_input) {
            Ok(None) => {
                errors.push(DonationValidationError::MissingAmount);
                None
            }
            Ok(Some(0)) => {
                errors.push(DonationValidationError::AmountNotPositive);
                None
            }
            Ok(Some(amount)) => Some(amount),
            Err(reason) => {
                errors.push(DonationValidationError::InvalidAmount(reason));
                None
            }
        };

        if self.proof_image.is_none() {
            errors.push(DonationValidationError::MissingProofImage);
        }

        DonationFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
        }
    }

    /// Idle -> Submitting. Invalid input leaves the flow idle with the first
    /// problem recorded as the error message.
    pub fn submit(&mut self) -> Result<(), DonationFlowError> {
        if self.phase != DonationPhase::Idle {
            return Err(DonationFlowError::NotIdle);
        }

        let validation = self.validate();
        if !validation.is_valid {
            self.error_message = validation.errors.first().map(|e| validation_message(e).to_string());
            return Err(DonationFlowError::Invalid(validation.errors));
        }

        info!("Donation confirmation submitted");
        self.error_message = None;
        self.phase = DonationPhase::Submitting;
        Ok(())
    }

    /// Submitting -> Success, handing back the claim to queue and clearing the
    /// form. Outside the submitting phase this does nothing.
    pub fn complete_submission(&mut self, today: NaiveDate) -> Option<NewIncome> {
        if self.phase != DonationPhase::Submitting {
            return None;
        }

        let amount = self.validate().cleaned_amount.unwrap_or(0);
        let claim = NewIncome {
            donor_name: std::mem::take(&mut self.donor_name),
            amount: i64::try_from(amount).unwrap_or(i64::MAX),
            date: Some(today),
            proof_image: self.proof_image.take().map(ProofImage::into_string),
        };
        self.amount_input.clear();
        self.phase = DonationPhase::Success;
        Some(claim)
    }

    /// Success -> Idle, closing the modal
    pub fn finish(&mut self) {
        if self.phase == DonationPhase::Success {
            self.phase = DonationPhase::Idle;
            self.modal_open = false;
        }
    }

    pub fn scheduled_transition(&self) -> Option<ScheduledTransition> {
        match self.phase {
            DonationPhase::Idle => None,
            DonationPhase::Submitting => Some(ScheduledTransition {
                after_ms: self.submit_delay_ms,
                timer: FlowTimer::SubmitDelayElapsed,
            }),
            DonationPhase::Success => Some(ScheduledTransition {
                after_ms: self.success_display_ms,
                timer: FlowTimer::SuccessDelayElapsed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::date;

    fn proof() -> ProofImage {
        ProofImage::from_bytes("image/png", b"\x89PNG", 1024).unwrap()
    }

    fn filled_flow(name: &str, amount: &str) -> DonationFlow {
        let mut flow = DonationFlow::new(&AppConfig::default());
        flow.open_modal();
        flow.set_donor_name(name);
        flow.set_amount_input(amount);
        flow.attach_proof_image(proof());
        flow
    }

    #[test]
    fn test_full_cycle() {
        let mut flow = filled_flow("", "50000");
        assert_eq!(flow.scheduled_transition(), None);

        flow.submit().unwrap();
        assert_eq!(flow.phase(), DonationPhase::Submitting);
        assert_eq!(
            flow.scheduled_transition(),
            Some(ScheduledTransition {
                after_ms: 1200,
                timer: FlowTimer::SubmitDelayElapsed
            })
        );

        let claim = flow.complete_submission(date(2025, 12, 26)).unwrap();
        assert_eq!(claim.donor_name, "");
        assert_eq!(claim.amount, 50_000);
        assert_eq!(claim.date, Some(date(2025, 12, 26)));
        assert!(claim.proof_image.as_deref().unwrap().starts_with("data:image/png"));

        assert_eq!(flow.phase(), DonationPhase::Success);
        assert_eq!(flow.amount_input(), "");
        assert!(flow.proof_image().is_none());
        assert_eq!(flow.scheduled_transition().unwrap().after_ms, 2000);

        flow.finish();
        assert_eq!(flow.phase(), DonationPhase::Idle);
        assert!(!flow.is_modal_open());
    }

    #[test]
    fn test_inputs_frozen_while_submitting() {
        let mut flow = filled_flow("Pak Budi", "10000");
        flow.submit().unwrap();

        assert!(!flow.set_donor_name("Someone else"));
        assert!(!flow.set_amount_input("1"));
        assert!(!flow.attach_proof_image(proof()));
        assert!(!flow.close_modal());
        assert!(flow.is_modal_open());
        assert_eq!(flow.submit(), Err(DonationFlowError::NotIdle));

        let claim = flow.complete_submission(date(2025, 12, 26)).unwrap();
        assert_eq!(claim.donor_name, "Pak Budi");
        assert_eq!(claim.amount, 10_000);
    }

    #[test]
    fn test_validation() {
        let mut flow = DonationFlow::new(&AppConfig::default());
        let validation = flow.validate();
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![DonationValidationError::MissingAmount, DonationValidationError::MissingProofImage]
        );

        flow.set_amount_input("0");
        flow.attach_proof_image(proof());
        assert_eq!(flow.validate().errors, vec![DonationValidationError::AmountNotPositive]);

        flow.set_amount_input("lima puluh");
        assert!(matches!(
            flow.validate().errors.as_slice(),
            [DonationValidationError::InvalidAmount(_)]
        ));

        flow.set_amount_input("Rp 50.000");
        let validation = flow.validate();
        assert!(validation.is_valid);
        assert_eq!(validation.cleaned_amount, Some(50_000));
    }

    #[test]
    fn test_separators_never_inflate_the_amount() {
        let mut flow = DonationFlow::new(&AppConfig::default());
        flow.attach_proof_image(proof());

        let accepted = [
            ("Rp 50.000,00", 50_000),
            ("50000,50", 50_000),
            ("1.250.000", 1_250_000),
            ("rp50000", 50_000),
        ];
        for (input, expected) in accepted {
            flow.set_amount_input(input);
            assert_eq!(flow.validate().cleaned_amount, Some(expected), "input {:?}", input);
        }

        for input in ["50000.5", "50.00", "5,000", "1.2345", ".500", "50.000,", "-5000"] {
            flow.set_amount_input(input);
            let validation = flow.validate();
            assert!(!validation.is_valid, "input {:?} should be rejected", input);
            assert!(
                matches!(validation.errors.as_slice(), [DonationValidationError::InvalidAmount(_)]),
                "input {:?} gave {:?}",
                input,
                validation.errors
            );
        }

        flow.set_amount_input("Rp ");
        assert_eq!(flow.validate().errors, vec![DonationValidationError::MissingAmount]);
    }

    #[test]
    fn test_decimal_amount_is_truncated_in_the_claim() {
        let mut flow = filled_flow("", "Rp 50.000,00");
        flow.submit().unwrap();
        let claim = flow.complete_submission(date(2025, 12, 26)).unwrap();
        assert_eq!(claim.amount, 50_000);

        let mut flow = filled_flow("", "50000.5");
        assert!(matches!(flow.submit(), Err(DonationFlowError::Invalid(_))));
        assert_eq!(flow.error_message(), Some("Nominal donasi harus berupa angka"));
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut flow = DonationFlow::new(&AppConfig::default());
        flow.set_amount_input("25000");

        let err = flow.submit().unwrap_err();
        assert_eq!(err, DonationFlowError::Invalid(vec![DonationValidationError::MissingProofImage]));
        assert_eq!(flow.phase(), DonationPhase::Idle);
        assert_eq!(flow.error_message(), Some("Bukti transfer wajib diunggah"));
        assert!(flow.complete_submission(date(2025, 12, 26)).is_none());
    }

    #[test]
    fn test_rejected_file_clears_previous_image() {
        let mut flow = filled_flow("", "5000");
        flow.reject_proof_image("Bukti transfer harus berupa gambar");
        assert!(flow.proof_image().is_none());
        assert_eq!(flow.error_message(), Some("Bukti transfer harus berupa gambar"));
    }

    #[test]
    fn test_closing_during_success_resets() {
        let mut flow = filled_flow("", "5000");
        flow.submit().unwrap();
        flow.complete_submission(date(2025, 12, 26));

        assert!(flow.close_modal());
        assert_eq!(flow.phase(), DonationPhase::Idle);

        // the late success timer is harmless
        flow.finish();
        assert_eq!(flow.phase(), DonationPhase::Idle);
    }
}
