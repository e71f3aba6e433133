//! SQLite-backed entry store.
//!
//! The `posts` table is created on connect if it does not exist; there is no
//! other schema management.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use microblog_core::{NewPost, Post, PostId};

use super::r#trait::{EntryStore, StoreError};

#[derive(Debug, Clone)]
pub struct SqliteEntryStore {
    pool: SqlitePool,
}

impl SqliteEntryStore {
    /// Connect to `database_url` (e.g. `sqlite://blog.db`), creating the file
    /// and the `posts` table when missing.
    ///
    /// An in-memory database lives inside its connection, so `sqlite::memory:`
    /// is pinned to one connection that the pool never closes.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        tracing::info!(database_url, "sqlite entry store ready");
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                text  TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    fn row_to_post(row: &SqliteRow) -> Result<Post, StoreError> {
        Ok(Post {
            id: PostId::new(row.try_get::<i64, _>("id")?),
            title: row.try_get("title")?,
            text: row.try_get("text")?,
        })
    }
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let result = sqlx::query("INSERT INTO posts (title, text) VALUES (?1, ?2)")
            .bind(&post.title)
            .bind(&post.text)
            .execute(&self.pool)
            .await?;

        Ok(post.with_id(PostId::new(result.last_insert_rowid())))
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query("SELECT id, title, text FROM posts WHERE id = ?1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn delete(&self, id: PostId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let rows = sqlx::query("SELECT id, title, text FROM posts ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        let needle = query.trim();
        if needle.is_empty() {
            return self.list().await;
        }

        // lower() only folds ASCII in SQLite.
        let rows = sqlx::query(
            r#"
            SELECT id, title, text FROM posts
            WHERE instr(lower(title), lower(?1)) > 0
               OR instr(lower(text), lower(?1)) > 0
            ORDER BY id DESC
            "#,
        )
        .bind(needle)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_post).collect()
    }
}
