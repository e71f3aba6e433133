//! Login precondition for guarded mutations.

use thiserror::Error;

use crate::{SessionAuthority, SessionState};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("Please log in.")]
    LoginRequired,
}

/// Check that the session may perform a mutating action.
///
/// Intended to be called **before** touching the entry store.
pub fn require_login(
    authority: &SessionAuthority,
    session: &SessionState,
) -> Result<(), AuthzError> {
    if authority.is_authenticated(session) {
        Ok(())
    } else {
        Err(AuthzError::LoginRequired)
    }
}
