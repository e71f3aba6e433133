//! The configured login credential.

use subtle::ConstantTimeEq;

/// Fixed `(username, password)` pair configured at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Constant-time comparison against the configured username.
    pub fn username_matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.username.as_bytes(), candidate.as_bytes())
    }

    /// Constant-time comparison against the configured password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.password.as_bytes(), candidate.as_bytes())
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
