use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use microblog_infra::StoreError;

use crate::app::{dto::StatusResponse, render};
use crate::gateway::MutationError;

/// Map a failed guarded mutation to the JSON contract of the delete endpoint.
pub fn mutation_error_to_json(err: MutationError) -> axum::response::Response {
    match err {
        MutationError::Unauthorized(e) => json_status(StatusCode::UNAUTHORIZED, e.to_string()),
        MutationError::NotFound(_) => json_status(StatusCode::NOT_FOUND, "Post not found"),
        MutationError::Store(e) => {
            tracing::error!(error = %e, "entry store failure");
            json_status(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
        MutationError::Session(e) => {
            tracing::error!(error = %e, "session store failure");
            json_status(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

/// Map a failed guarded mutation to an HTML error page (form endpoints).
pub fn mutation_error_to_html(err: MutationError) -> axum::response::Response {
    match err {
        MutationError::Unauthorized(e) => html_error(StatusCode::UNAUTHORIZED, &e.to_string()),
        MutationError::NotFound(_) => html_error(StatusCode::NOT_FOUND, "Post not found"),
        MutationError::Store(e) => store_error_page(e),
        MutationError::Session(e) => session_error_page(e),
    }
}

pub fn store_error_page(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "entry store failure");
    html_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

pub fn session_error_page(err: tower_sessions::session::Error) -> axum::response::Response {
    tracing::error!(error = %err, "session store failure");
    html_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

pub fn json_status(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(StatusResponse::failed(message))).into_response()
}

pub fn html_error(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Html(render::error_page(status, message))).into_response()
}
