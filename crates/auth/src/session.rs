use serde::{Deserialize, Serialize};

/// Per-client authentication state.
///
/// Starts logged out; only [`crate::SessionAuthority`] flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    logged_in: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub(crate) fn set_logged_in(&mut self, value: bool) {
        self.logged_in = value;
    }
}
