//! `microblog-auth` — session authority and login guard.
//!
//! This crate is intentionally decoupled from HTTP and storage: callers hand
//! in the session state they loaded and persist whatever comes back.

pub mod authority;
pub mod credential;
pub mod guard;
pub mod session;

pub use authority::{LoginError, SessionAuthority};
pub use credential::Credential;
pub use guard::{AuthzError, require_login};
pub use session::SessionState;
