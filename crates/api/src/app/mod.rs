//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: entry store selection, session store, session authority
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: form/query/JSON shapes
//! - `render.rs`: HTML pages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<AppServices>) -> Router {
    let sessions = middleware::session_layer(&services.config, services.sessions.clone());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(sessions)
                .layer(Extension(services)),
        )
}
