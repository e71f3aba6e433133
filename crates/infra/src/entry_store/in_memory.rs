use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use microblog_core::{NewPost, Post, PostId};

use super::r#trait::{EntryStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    posts: BTreeMap<PostId, Post>,
}

/// In-memory entry store.
///
/// Intended for tests/dev. Ids start at 1 and are never reused, even after a
/// delete.
#[derive(Debug, Default)]
pub struct InMemoryEntryStore {
    inner: RwLock<Inner>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first<'a>(posts: impl DoubleEndedIterator<Item = &'a Post>) -> Vec<Post> {
        posts.rev().cloned().collect()
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.last_id += 1;
        let post = post.with_id(PostId::new(inner.last_id));
        inner.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.posts.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(Self::newest_first(inner.posts.values()))
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(Self::newest_first(inner.posts.values().filter(|p| p.matches(query))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryEntryStore::new();
        let a = store.insert(NewPost::new("a", "1")).await.unwrap();
        let b = store.insert(NewPost::new("b", "2")).await.unwrap();

        assert_eq!(a.id, PostId::new(1));
        assert_eq!(b.id, PostId::new(2));
        assert_eq!(store.get(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_ids_are_not_reused() {
        let store = InMemoryEntryStore::new();
        let post = store.insert(NewPost::new("t", "x")).await.unwrap();

        assert!(store.delete(post.id).await.unwrap());
        assert!(!store.delete(post.id).await.unwrap());
        assert!(store.get(post.id).await.unwrap().is_none());

        let next = store.insert(NewPost::new("u", "y")).await.unwrap();
        assert_ne!(next.id, post.id);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_other_posts_alone() {
        let store = InMemoryEntryStore::new();
        let post = store.insert(NewPost::new("keep", "me")).await.unwrap();

        assert!(!store.delete(PostId::new(999)).await.unwrap());
        assert_eq!(store.list().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn list_and_search_are_newest_first() {
        let store = InMemoryEntryStore::new();
        store.insert(NewPost::new("First", "Lorem ipsum")).await.unwrap();
        store.insert(NewPost::new("Second", "dolor")).await.unwrap();
        store.insert(NewPost::new("Third", "IPSUM again")).await.unwrap();

        let titles: Vec<_> = store.list().await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        let hits: Vec<_> = store.search("ipsum").await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(hits, vec!["Third", "First"]);

        assert!(store.search("hello").await.unwrap().is_empty());
        assert_eq!(store.search("").await.unwrap().len(), 3);
    }
}
