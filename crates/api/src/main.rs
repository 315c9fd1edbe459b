use std::sync::Arc;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rollcall_observability::init();

    let config = rollcall_api::config::ApiConfig::from_env();
    let services = Arc::new(rollcall_api::app::services::build_services().await?);
    let app = rollcall_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{}", config.port))?;

    match &config.author {
        Some(author) => tracing::info!("listening on {} (author: {})", listener.local_addr()?, author),
        None => tracing::info!("listening on {}", listener.local_addr()?),
    }

    axum::serve(listener, app).await?;
    Ok(())
}
