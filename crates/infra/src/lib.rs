//! Infrastructure layer: entry storage and configuration.

pub mod config;
pub mod entry_store;

pub use config::{AppConfig, ConfigError};
pub use entry_store::{EntryStore, InMemoryEntryStore, SqliteEntryStore, StoreError};
