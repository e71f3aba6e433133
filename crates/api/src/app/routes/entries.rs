use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use microblog_core::{NewPost, PostId};

use crate::app::{dto, errors, render, services::AppServices};
use crate::context::RequestContext;
use crate::gateway;

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
) -> axum::response::Response {
    let posts = match services.store.list().await {
        Ok(posts) => posts,
        Err(e) => return errors::store_error_page(e),
    };

    let (logged_in, flashes) = match page_session(&ctx).await {
        Ok(parts) => parts,
        Err(e) => return errors::session_error_page(e),
    };
    Html(render::index_page(&posts, logged_in, &flashes)).into_response()
}

pub async fn add_entry(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
    Form(form): Form<dto::AddEntryForm>,
) -> axum::response::Response {
    let post = NewPost::new(form.title, form.text);

    let added = gateway::add_post(services.store.as_ref(), &services.authority, &ctx, post).await;
    if let Err(e) = added {
        return errors::mutation_error_to_html(e);
    }

    match ctx.flash("New entry was successfully posted").await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => errors::session_error_page(e),
    }
}

pub async fn delete_entry(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
    Path(post_id): Path<String>,
) -> axum::response::Response {
    let post_id: PostId = match post_id.parse() {
        Ok(id) => id,
        Err(_) => return errors::json_status(StatusCode::BAD_REQUEST, "Invalid post id"),
    };

    let deleted =
        gateway::delete_post(services.store.as_ref(), &services.authority, &ctx, post_id).await;
    if let Err(e) = deleted {
        return errors::mutation_error_to_json(e);
    }

    if let Err(e) = ctx.flash("The entry was deleted.").await {
        return errors::mutation_error_to_json(e.into());
    }
    (StatusCode::OK, Json(dto::StatusResponse::ok("Post Deleted"))).into_response()
}

/// Login flag and pending flashes for a rendered page.
pub(crate) async fn page_session(
    ctx: &RequestContext,
) -> Result<(bool, Vec<String>), tower_sessions::session::Error> {
    let logged_in = ctx.is_logged_in().await?;
    let flashes = ctx.take_flashes().await?;
    Ok((logged_in, flashes))
}
