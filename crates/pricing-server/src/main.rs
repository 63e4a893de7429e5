//! Pricing Section HTTP Server
//!
//! Axum-based server that hosts the compiled WASM frontend and exposes the
//! plan catalog and section content as read-only JSON.

mod config;
mod handlers;
mod router;
mod state;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::router::{build_router, ENDPOINTS};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let catalog = config.load_catalog()?;
    match &config.catalog_path {
        Some(path) => tracing::info!("✓ Plan catalog loaded from {}", path.display()),
        None => tracing::info!("✓ Using builtin plan catalog"),
    }
    for plan in &catalog {
        tracing::info!(
            "  {}{}: {} / {}",
            plan.name,
            if plan.featured { " (featured)" } else { "" },
            plan.price.monthly,
            plan.price.annually,
        );
    }

    if !config.static_dir.is_dir() {
        tracing::warn!("⚠ Static dir {} not found - frontend will 404", config.static_dir.display());
        tracing::warn!("  Build pricing-web with trunk and set STATIC_DIR");
    }

    let app = build_router(AppState::new(catalog), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 pricing server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    for (route, what) in ENDPOINTS {
        tracing::info!("  {:<28} - {}", route, what);
    }
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
