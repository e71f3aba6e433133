use tower_sessions::{
    Expiry, MemoryStore, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

use microblog_infra::AppConfig;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "session";

/// Cookie-keyed server-side sessions that expire after the configured idle
/// time.
///
/// Sessions are only stored (and a cookie only issued) once a handler puts
/// something in them.
pub fn session_layer(config: &AppConfig, store: MemoryStore) -> SessionManagerLayer<MemoryStore> {
    let ttl = Duration::seconds(config.session_ttl.num_seconds());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(ttl))
}
