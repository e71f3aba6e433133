use std::sync::Arc;

use axum::{
    extract::{Extension, Query, RawQuery},
    response::{Html, IntoResponse, Redirect},
};

use crate::app::{dto, errors, render, services::AppServices};
use crate::context::RequestContext;

use super::entries::page_session;

/// Always 200: an absent or blank query lists every entry, otherwise entries
/// whose title or text contains the query (case-insensitive).
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let term = params.term();

    let posts = match services.store.search(term.unwrap_or_default()).await {
        Ok(posts) => posts,
        Err(e) => return errors::store_error_page(e),
    };

    tracing::debug!(query = term.unwrap_or_default(), hits = posts.len(), "search");
    let (logged_in, flashes) = match page_session(&ctx).await {
        Ok(parts) => parts,
        Err(e) => return errors::session_error_page(e),
    };
    Html(render::search_page(term, &posts, logged_in, &flashes)).into_response()
}

/// `/search` → `/search/`, keeping the query string.
pub async fn search_without_slash(RawQuery(query): RawQuery) -> Redirect {
    match query {
        Some(query) => Redirect::permanent(&format!("/search/?{query}")),
        None => Redirect::permanent("/search/"),
    }
}
