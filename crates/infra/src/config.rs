//! Configuration loading and representation.
//!
//! Values come from the process environment; a `.env` file in the working
//! directory is loaded first when present.

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use microblog_auth::Credential;

pub const ENV_USERNAME: &str = "MICROBLOG_USERNAME";
pub const ENV_PASSWORD: &str = "MICROBLOG_PASSWORD";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND: &str = "MICROBLOG_BIND";
pub const ENV_SESSION_TTL_MINUTES: &str = "MICROBLOG_SESSION_TTL_MINUTES";

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin";
const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddress { var: &'static str, value: String },

    #[error("{var} must be a positive number of minutes, got {value}")]
    InvalidSessionTtl { var: &'static str, value: String },
}

/// Startup configuration. Immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credential: Credential,
    /// `None` selects the in-memory entry store.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Load from the environment (after reading `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let username = non_empty(ENV_USERNAME).unwrap_or_else(|| {
            tracing::warn!("{ENV_USERNAME} not set; using insecure dev default");
            DEFAULT_USERNAME.to_string()
        });
        let password = non_empty(ENV_PASSWORD).unwrap_or_else(|| {
            tracing::warn!("{ENV_PASSWORD} not set; using insecure dev default");
            DEFAULT_PASSWORD.to_string()
        });

        let bind_raw = non_empty(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddress {
                var: ENV_BIND,
                value: bind_raw.clone(),
            })?;

        let session_ttl = match non_empty(ENV_SESSION_TTL_MINUTES) {
            None => Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .and_then(Duration::try_minutes)
                .ok_or(ConfigError::InvalidSessionTtl {
                    var: ENV_SESSION_TTL_MINUTES,
                    value: raw,
                })?,
        };

        Ok(Self {
            credential: Credential::new(username, password),
            database_url: non_empty(ENV_DATABASE_URL),
            bind_addr,
            session_ttl,
        })
    }

    /// Configuration for tests: fixed credential, in-memory store, ephemeral port.
    pub fn for_tests(username: &str, password: &str) -> Self {
        Self {
            credential: Credential::new(username, password),
            database_url: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.credential.username(), "admin");
        assert!(cfg.credential.password_matches("admin"));
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.session_ttl, Duration::minutes(60));
    }

    #[test]
    fn values_are_read_from_lookup() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (ENV_USERNAME, "blogger"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_DATABASE_URL, "sqlite://blog.db"),
            (ENV_BIND, "127.0.0.1:5000"),
            (ENV_SESSION_TTL_MINUTES, "15"),
        ]))
        .unwrap();

        assert_eq!(cfg.credential.username(), "blogger");
        assert!(cfg.credential.password_matches("s3cret"));
        assert_eq!(cfg.database_url.as_deref(), Some("sqlite://blog.db"));
        assert_eq!(cfg.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(cfg.session_ttl, Duration::minutes(15));
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_DATABASE_URL, "  ")])).unwrap();
        assert_eq!(cfg.database_url, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_BIND, "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress { .. }));

        let err = AppConfig::from_lookup(lookup(&[(ENV_SESSION_TTL_MINUTES, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSessionTtl { .. }));

        let err = AppConfig::from_lookup(lookup(&[(ENV_SESSION_TTL_MINUTES, "soon")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MICROBLOG_SESSION_TTL_MINUTES must be a positive number of minutes, got soon"
        );
    }

    #[test]
    fn out_of_range_ttl_is_an_error_not_a_panic() {
        let huge = i64::MAX.to_string();
        let err = AppConfig::from_lookup(lookup(&[(ENV_SESSION_TTL_MINUTES, huge.as_str())]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSessionTtl {
                var: ENV_SESSION_TTL_MINUTES,
                value: huge,
            }
        );
    }
}
