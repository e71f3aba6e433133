use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use microblog_core::{NewPost, Post, PostId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Persistence contract for posts.
///
/// Every operation touches at most one record and is atomic on its own; there
/// are no multi-record transactions.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persist a new post and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError>;

    /// Remove a post. Returns `false` when no post had that id.
    async fn delete(&self, id: PostId) -> Result<bool, StoreError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Posts whose title or text contains `query` (case-insensitive), newest
    /// first. A blank query returns every post.
    async fn search(&self, query: &str) -> Result<Vec<Post>, StoreError>;
}

#[async_trait]
impl<S> EntryStore for Arc<S>
where
    S: EntryStore + ?Sized,
{
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        (**self).insert(post).await
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        (**self).get(id).await
    }

    async fn delete(&self, id: PostId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        (**self).list().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        (**self).search(query).await
    }
}
