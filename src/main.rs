//! Timecard Engine API Server
//!
//! Serves the attendance, timecard and tenure endpoints over HTTP.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timecard_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("TIMECARD_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load policy from {}", config_dir))?;
    info!(
        policy = %config.metadata().code,
        version = %config.metadata().version,
        overtime_threshold = %config.policy().overtime_threshold,
        "Accounting policy loaded"
    );

    let app = create_router(AppState::new(config));

    let addr =
        std::env::var("TIMECARD_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
