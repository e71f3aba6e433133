//! Session authority: login / logout against the configured credential.

use thiserror::Error;

use crate::{Credential, SessionState};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid password")]
    InvalidPassword,
}

/// Establishes and tears down the single authenticated session of a client.
///
/// - No IO
/// - No panics
/// - Only the passed-in session is mutated
#[derive(Debug, Clone)]
pub struct SessionAuthority {
    credential: Credential,
}

impl SessionAuthority {
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// Log the session in if both fields match the configured credential.
    ///
    /// The username is checked first, so a wrong username reports
    /// `InvalidUsername` whatever the password. On error the session is left
    /// untouched.
    pub fn login(
        &self,
        session: &mut SessionState,
        username: &str,
        password: &str,
    ) -> Result<(), LoginError> {
        if !self.credential.username_matches(username) {
            tracing::warn!(reason = "invalid_username", "login rejected");
            return Err(LoginError::InvalidUsername);
        }
        if !self.credential.password_matches(password) {
            tracing::warn!(reason = "invalid_password", "login rejected");
            return Err(LoginError::InvalidPassword);
        }

        session.set_logged_in(true);
        tracing::info!("login succeeded");
        Ok(())
    }

    /// Log the session out. Logging out twice is not an error.
    pub fn logout(&self, session: &mut SessionState) {
        session.set_logged_in(false);
    }

    pub fn is_authenticated(&self, session: &SessionState) -> bool {
        session.is_logged_in()
    }
}
