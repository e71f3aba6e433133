use std::sync::Arc;

use axum::{
    Form,
    extract::Extension,
    response::{Html, IntoResponse, Redirect},
};

use crate::app::{dto, errors, render, services::AppServices};
use crate::context::RequestContext;

pub async fn login_form(ctx: RequestContext) -> axum::response::Response {
    match ctx.take_flashes().await {
        Ok(flashes) => Html(render::login_page(None, &flashes)).into_response(),
        Err(e) => errors::session_error_page(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
    Form(form): Form<dto::LoginForm>,
) -> axum::response::Response {
    let result = ctx
        .update_session(|session| {
            services
                .authority
                .login(session, &form.username, &form.password)
        })
        .await;

    match result {
        Ok(Ok(())) => {
            let established = async {
                ctx.rotate_id().await?;
                ctx.flash("You were logged in").await
            };
            if let Err(e) = established.await {
                return errors::session_error_page(e);
            }
            tracing::info!("session logged in");
            Redirect::to("/").into_response()
        }
        Ok(Err(e)) => match ctx.take_flashes().await {
            Ok(flashes) => Html(render::login_page(Some(&e.to_string()), &flashes)).into_response(),
            Err(e) => errors::session_error_page(e),
        },
        Err(e) => errors::session_error_page(e),
    }
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    ctx: RequestContext,
) -> axum::response::Response {
    let logged_out = async {
        ctx.update_session(|session| services.authority.logout(session))
            .await?;
        ctx.flash("You were logged out").await
    };
    if let Err(e) = logged_out.await {
        return errors::session_error_page(e);
    }
    tracing::info!("session logged out");
    Redirect::to("/").into_response()
}
