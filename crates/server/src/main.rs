use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let catalog = std::sync::Arc::new(aflam_catalog::CatalogStore::new());

    // Demo records on by default; AFLAM_SEED=0 disables them.
    let seed_enabled = std::env::var("AFLAM_SEED")
        .map(|v| v != "0" && v != "false")
        .unwrap_or(true);
    if seed_enabled {
        let report = aflam_server::seed::seed_demo_catalog(&catalog);
        info!(
            movies = report.movies,
            series = report.series,
            episodes = report.episodes,
            categories = report.categories,
            "demo catalog seeded"
        );
    }

    let app_state = aflam_server::state::AppState { catalog };
    let app = aflam_server::routes::build_router(app_state);

    let bind_addr = std::env::var("AFLAM_BIND").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
