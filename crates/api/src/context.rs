use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use tower_sessions::Session;

use microblog_auth::SessionState;

/// Session key holding the [`SessionState`].
pub const SESSION_STATE_KEY: &str = "auth";
/// Session key holding pending flash messages.
pub const FLASHES_KEY: &str = "flashes";

pub type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Per-request context, extracted from the session layer.
///
/// Handlers read and mutate the client's session through this object. Values
/// are only written when they change, so a read-only request never marks the
/// session as modified.
#[derive(Debug, Clone)]
pub struct RequestContext {
    session: Session,
}

impl RequestContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn session_state(&self) -> SessionResult<SessionState> {
        Ok(self
            .session
            .get::<SessionState>(SESSION_STATE_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn is_logged_in(&self) -> SessionResult<bool> {
        Ok(self.session_state().await?.is_logged_in())
    }

    /// Run `f` against the session state; persisted only if `f` changed it.
    pub async fn update_session<R>(
        &self,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> SessionResult<R> {
        let before = self.session_state().await?;
        let mut state = before;
        let out = f(&mut state);
        if state != before {
            self.session.insert(SESSION_STATE_KEY, state).await?;
        }
        Ok(out)
    }

    /// Issue a fresh session id, keeping the data. Called after login.
    pub async fn rotate_id(&self) -> SessionResult<()> {
        self.session.cycle_id().await
    }

    /// Queue a message for the next rendered page.
    pub async fn flash(&self, message: impl Into<String>) -> SessionResult<()> {
        let mut flashes = self.pending_flashes().await?;
        flashes.push(message.into());
        self.session.insert(FLASHES_KEY, flashes).await
    }

    /// Drain pending flash messages (they are shown once).
    pub async fn take_flashes(&self) -> SessionResult<Vec<String>> {
        let flashes = self.pending_flashes().await?;
        if !flashes.is_empty() {
            self.session.remove::<Vec<String>>(FLASHES_KEY).await?;
        }
        Ok(flashes)
    }

    async fn pending_flashes(&self) -> SessionResult<Vec<String>> {
        Ok(self
            .session
            .get::<Vec<String>>(FLASHES_KEY)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state)
            .await
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use microblog_auth::{Credential, SessionAuthority};
    use tower_sessions::MemoryStore;

    use super::*;

    fn authority() -> SessionAuthority {
        SessionAuthority::new(Credential::new("admin", "default"))
    }

    fn open(store: &Arc<MemoryStore>, id: Option<tower_sessions::session::Id>) -> RequestContext {
        RequestContext::new(Session::new(id, store.clone(), None))
    }

    #[tokio::test]
    async fn flashes_are_drained_once() {
        let store = Arc::new(MemoryStore::default());
        let ctx = open(&store, None);
        ctx.flash("one").await.unwrap();
        ctx.flash("two").await.unwrap();

        assert_eq!(
            ctx.take_flashes().await.unwrap(),
            vec!["one".to_string(), "two".to_string()]
        );
        assert!(ctx.take_flashes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reads_do_not_modify_the_session() {
        let store = Arc::new(MemoryStore::default());
        let ctx = open(&store, None);

        assert!(!ctx.is_logged_in().await.unwrap());
        assert!(ctx.take_flashes().await.unwrap().is_empty());
        ctx.update_session(|s| authority().logout(s)).await.unwrap();

        assert!(!ctx.session().is_modified());
    }

    #[tokio::test]
    async fn slow_reader_does_not_undo_a_logout() {
        let store = Arc::new(MemoryStore::default());
        let auth = authority();

        let login = open(&store, None);
        login
            .update_session(|s| auth.login(s, "admin", "default"))
            .await
            .unwrap()
            .unwrap();
        login.session().save().await.unwrap();
        let id = login.session().id();

        // A long-running page load reads the session before the logout lands.
        let slow = open(&store, id);
        assert!(slow.is_logged_in().await.unwrap());

        let logout = open(&store, id);
        logout.update_session(|s| auth.logout(s)).await.unwrap();
        logout.session().save().await.unwrap();

        // The slow request finishes rendering without touching the session.
        assert!(slow.take_flashes().await.unwrap().is_empty());
        assert!(!slow.session().is_modified());

        let next = open(&store, id);
        assert!(!next.is_logged_in().await.unwrap());
    }
}
