use std::sync::Arc;

use tower_sessions::MemoryStore;

use microblog_auth::SessionAuthority;
use microblog_infra::{AppConfig, EntryStore, InMemoryEntryStore, SqliteEntryStore, StoreError};

/// Shared services handed to every handler.
pub struct AppServices {
    pub config: Arc<AppConfig>,
    pub authority: SessionAuthority,
    pub store: Arc<dyn EntryStore>,
    pub sessions: MemoryStore,
}

impl AppServices {
    pub fn new(config: AppConfig, store: Arc<dyn EntryStore>) -> Self {
        let authority = SessionAuthority::new(config.credential.clone());

        Self {
            config: Arc::new(config),
            authority,
            store,
            sessions: MemoryStore::default(),
        }
    }
}

/// Pick the entry store from configuration: SQLite when `DATABASE_URL` is
/// set, in-memory otherwise.
pub async fn open_entry_store(config: &AppConfig) -> Result<Arc<dyn EntryStore>, StoreError> {
    match config.database_url.as_deref() {
        Some(url) => Ok(Arc::new(SqliteEntryStore::connect(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set; entries are kept in memory only");
            Ok(Arc::new(InMemoryEntryStore::new()))
        }
    }
}
