mod config;
mod errors;
mod llm_client;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::backends::build_extractor;
use crate::skills::matcher::compiled_entries;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid or missing backend settings)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Uni-Pilot skills service v{}", env!("CARGO_PKG_VERSION"));

    // Compile keyword matchers up front so the first request doesn't pay for it
    let compiled = compiled_entries();
    let keyword_count: usize = compiled.iter().map(|c| c.matchers.len()).sum();
    info!(
        "Skill taxonomy loaded: {} skills, {} keywords",
        compiled.len(),
        keyword_count
    );

    let extractor = build_extractor(&config)?;
    info!("Skill extraction backend: {}", extractor.backend_name());

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    // The onboarding frontend is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
