use std::sync::Arc;

use anyhow::Context;
use ev_chat_proxy::{config::Settings, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if settings.gateway.api_key.is_none() {
        tracing::warn!("LOVABLE_API_KEY is not set, /chat-ai requests will fail");
    }
    if settings.inference.api_key.is_none() {
        tracing::warn!("HUGGING_FACE_API_KEY is not set, /chat requests will fail");
    }

    let state = Arc::new(AppState::from_settings(&settings));
    let app = routes::create_router().with_state(state);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("EV chat proxy running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
