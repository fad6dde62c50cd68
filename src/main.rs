use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::store::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ConfigLoader::server_settings()?;
    let config = ConfigLoader::load(&settings.config_dir)
        .with_context(|| format!("loading rules from {}", settings.config_dir))?;

    info!(
        config_dir = %settings.config_dir,
        mode = ?config.aggregation().mode,
        "Starting attendance server"
    );

    let app = create_router(AppState::new(config, InMemoryStore::new()));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.bind_addr))?;
    info!("Listening on http://{}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
