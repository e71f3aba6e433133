use axum::{
    Router,
    routing::{get, post},
};

pub mod entries;
pub mod search;
pub mod session;
pub mod system;

/// Router for all page and mutation endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(entries::index))
        .route("/add", post(entries::add_entry))
        .route("/delete/:post_id", get(entries::delete_entry))
        .route("/login", get(session::login_form).post(session::login))
        .route("/logout", get(session::logout))
        .route("/search", get(search::search_without_slash))
        .route("/search/", get(search::search))
}
