use std::sync::Arc;

use anyhow::Context;

use microblog_api::app::{self, AppServices, services};
use microblog_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    microblog_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let bind_addr = config.bind_addr;

    let store = services::open_entry_store(&config)
        .await
        .context("failed to open entry store")?;

    let shared = Arc::new(AppServices::new(config, store));
    let router = app::build_app(shared);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
