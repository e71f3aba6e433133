//! Guarded mutations.
//!
//! Every operation that changes the entry store checks the session with the
//! [`SessionAuthority`] first and only then touches storage, so a denied
//! request leaves the store untouched.

use thiserror::Error;

use microblog_auth::{AuthzError, SessionAuthority, require_login};
use microblog_core::{NewPost, Post, PostId};
use microblog_infra::{EntryStore, StoreError};

use crate::context::RequestContext;

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Unauthorized(#[from] AuthzError),

    #[error("post {0} not found")]
    NotFound(PostId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("session unavailable: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Delete a post on behalf of the request's session.
///
/// Deleting an id that does not exist (including one deleted earlier) is
/// reported as `NotFound` and changes nothing.
pub async fn delete_post(
    store: &dyn EntryStore,
    authority: &SessionAuthority,
    ctx: &RequestContext,
    post_id: PostId,
) -> Result<(), MutationError> {
    require_login(authority, &ctx.session_state().await?)?;

    if !store.delete(post_id).await? {
        return Err(MutationError::NotFound(post_id));
    }

    tracing::info!(post_id = %post_id, "entry deleted");
    Ok(())
}

/// Create a post on behalf of the request's session.
pub async fn add_post(
    store: &dyn EntryStore,
    authority: &SessionAuthority,
    ctx: &RequestContext,
    post: NewPost,
) -> Result<Post, MutationError> {
    require_login(authority, &ctx.session_state().await?)?;

    let post = store.insert(post).await?;
    tracing::info!(post_id = %post.id, "entry added");
    Ok(post)
}
