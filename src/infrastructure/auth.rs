//! Credential verification and the guest/admin session gate.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::infrastructure::config::Config;

/// Verifies a submitted username/password pair.
///
/// The gate's state machine depends only on this trait, so the single
/// static pair can later be swapped for a real credential store.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed credential pair compared by exact string equality.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_username.clone(), config.admin_password.clone())
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Access states of one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    LoggedOut,
    Guest,
    AdminPendingCredentials,
    Admin,
}

/// One interactive session: gate state plus the per-session context that
/// belongs to it (current username, selected category).
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    username: Option<String>,
    selected_category: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::LoggedOut,
            username: None,
            selected_category: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn select_category(&mut self, name: impl Into<String>) {
        self.selected_category = Some(name.into());
    }

    /// Enter the catalog without credentials. Read-only access.
    pub fn view_catalog(&mut self) {
        if self.state == SessionState::LoggedOut {
            self.state = SessionState::Guest;
            self.username = Some("guest".to_string());
        }
    }

    /// Start an admin login attempt.
    pub fn begin_admin_login(&mut self) {
        if self.state == SessionState::LoggedOut {
            self.state = SessionState::AdminPendingCredentials;
        }
    }

    /// Submit admin credentials. A mismatch leaves the session in
    /// `AdminPendingCredentials`; the caller may retry immediately.
    pub fn submit_credentials(
        &mut self,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<(), DomainError> {
        if self.state != SessionState::AdminPendingCredentials {
            return Err(DomainError::Authentication(
                "no admin login in progress".to_string(),
            ));
        }

        if verifier.verify(username, password) {
            self.state = SessionState::Admin;
            self.username = Some(username.to_string());
            tracing::info!("admin '{}' logged in", username);
            Ok(())
        } else {
            tracing::warn!("failed admin login for '{}'", username);
            Err(DomainError::Authentication(
                "invalid credentials".to_string(),
            ))
        }
    }

    /// End the session and clear all per-session state.
    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
        self.username = None;
        self.selected_category = None;
    }

    pub fn can_read(&self) -> bool {
        matches!(self.state, SessionState::Guest | SessionState::Admin)
    }

    pub fn can_write(&self) -> bool {
        self.state == SessionState::Admin
    }

    pub fn authorize_read(&self) -> Result<(), DomainError> {
        if self.can_read() {
            Ok(())
        } else {
            Err(DomainError::Authentication(
                "catalog access requires a session".to_string(),
            ))
        }
    }

    pub fn authorize_write(&self) -> Result<(), DomainError> {
        if self.can_write() {
            Ok(())
        } else {
            Err(DomainError::Authentication(
                "admin access required".to_string(),
            ))
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
