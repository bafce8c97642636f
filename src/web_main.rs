use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qask::AnswerProvider;
use qask::web::{AppState, router};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = listen_port()?;
    let provider = AnswerProvider::from_env();
    if !provider.is_configured() {
        warn!("GEMINI_API_KEY not set; serving simulated responses");
    }

    let app = router(Arc::new(AppState { provider }));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Reads the listen port from `PORT`, defaulting to 5000.
fn listen_port() -> Result<u16> {
    match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {value}")),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
