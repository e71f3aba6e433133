//! Entry store: persistence for blog posts.
//!
//! Two implementations:
//! - `InMemoryEntryStore`: tests/dev, state lives as long as the process.
//! - `SqliteEntryStore`: file-backed (or `sqlite::memory:`) via sqlx.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryEntryStore;
pub use r#trait::{EntryStore, StoreError};
pub use sqlite::SqliteEntryStore;
