use anyhow::Context;
use elevator_events::config::Config;
use elevator_events::constants::API_NAME;
use elevator_events::repository::store;
use elevator_events::service::ElevatorService;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting elevator events server on port {}", API_NAME, config.server_port);

    let pool = store::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;

    store::migrate(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("{} Connected to database {}", API_NAME, config.database_url);

    let app = elevator_events::app(ElevatorService::new(pool));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
