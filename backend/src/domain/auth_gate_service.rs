//! Admin access gate.
//!
//! Typing the secret code into the hidden input on the public page opens the
//! login prompt; the fixed username/password pair switches to the dashboard.
//!
//! This is an obscurity mechanism only. The code and credentials ship inside
//! the client bundle and are compared as plain strings, with no hashing,
//! lockout or rate limit. It keeps casual visitors out of the dashboard and
//! offers no protection against anyone who looks.

use log::{info, warn};
use shared::ViewMode;

use crate::config::AppConfig;

pub const LOGIN_ERROR_MESSAGE: &str = "Username atau Password salah";

/// Outcome of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthGateService {
    admin_username: String,
    admin_password: String,
    secret_code: String,
    mode: ViewMode,
    login_prompt_open: bool,
    login_error: Option<String>,
    failed_attempts: u32,
}

impl AuthGateService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            secret_code: config.secret_code.clone(),
            mode: ViewMode::Public,
            login_prompt_open: false,
            login_error: None,
            failed_attempts: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_admin(&self) -> bool {
        self.mode == ViewMode::Admin
    }

    pub fn is_login_prompt_open(&self) -> bool {
        self.login_prompt_open
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Check the live value of the hidden input. Returns true when it matched
    /// and the prompt opened; the caller then clears the field.
    pub fn on_secret_input(&mut self, value: &str) -> bool {
        if value != self.secret_code {
            return false;
        }

        info!("Secret code entered, opening login prompt");
        self.login_prompt_open = true;
        self.login_error = None;
        true
    }

    pub fn login(&mut self, username: &str, password: &str) -> LoginResult {
        if username == self.admin_username && password == self.admin_password {
            info!("Admin login succeeded");
            self.mode = ViewMode::Admin;
            self.login_prompt_open = false;
            self.login_error = None;
            LoginResult {
                success: true,
                message: "Selamat datang di Admin Portal".to_string(),
            }
        } else {
            self.failed_attempts += 1;
            warn!(
                "Admin login failed for username of length {} (attempt {})",
                username.len(),
                self.failed_attempts
            );
            self.login_error = Some(LOGIN_ERROR_MESSAGE.to_string());
            LoginResult {
                success: false,
                message: LOGIN_ERROR_MESSAGE.to_string(),
            }
        }
    }

    pub fn dismiss_prompt(&mut self) {
        self.login_prompt_open = false;
        self.login_error = None;
    }

    pub fn logout(&mut self) {
        info!("Admin logged out");
        self.mode = ViewMode::Public;
    }
}
