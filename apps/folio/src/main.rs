mod config;
mod errors;
mod export;
mod host;
mod layout;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::export_page;
use crate::models::default_content;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let content = default_content();
    info!(
        "Content loaded: {} skill groups, {} experience, {} projects, {} certifications",
        content.skills.len(),
        content.experience.len(),
        content.projects.len(),
        content.certifications.len()
    );

    let state = AppState::new(&config, content);
    info!("Scene viewer locator: {}", state.scene.locator);

    // Static export mode: render once, write, exit.
    if let Some(path) = &config.export_path {
        export_page(path, &state.html_now()).await?;
        return Ok(());
    }

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
