//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use messages::PgMessageRepository;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// How often and how long to wait for the database at startup
const DB_CONNECT_ATTEMPTS: u32 = 30;
const DB_CONNECT_BACKOFF: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,gate=info,messages=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Startup configuration summary
    tracing::info!(port = config.gate.port, "Server configuration loaded");
    tracing::info!(database = %config.database.target(), "Database target");
    tracing::info!(
        requests = config.gate.rate_limit.requests(),
        period_seconds = config.gate.rate_limit.period_secs(),
        rate_per_second = config.gate.rate_limit.rate_per_second(),
        "Rate limiter configured"
    );
    if config.gate.throttle.enabled() {
        tracing::info!(
            min_ms = config.gate.throttle.min_ms(),
            max_ms = config.gate.throttle.max_ms(),
            "Throttling enabled"
        );
    } else {
        tracing::info!("Throttling disabled (THROTTLE_MAX_MS = 0)");
    }

    // Database connection, waiting for the container to come up
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations completed");

    // Shaped routes live under /api; health stays outside the pipeline
    let shaping = gate::shape_state(&config.gate);
    let api_routes = Router::new()
        .merge(gate::echo_router())
        .merge(messages::messages_router(PgMessageRepository::new(
            pool.clone(),
        )));

    let app = Router::new()
        .merge(gate::health_router(pool.clone(), config.gate.clone()))
        .nest("/api", gate::shape(api_routes, shaping))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.gate.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect to the database, retrying while it boots.
///
/// Mirrors container start order: the database may accept connections
/// seconds after the API process launches, so failed attempts are
/// logged and retried before startup is abandoned.
async fn connect_with_retry(config: &AppConfig) -> anyhow::Result<PgPool> {
    let url = config.database.url();

    for attempt in 1..=DB_CONNECT_ATTEMPTS {
        match PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < DB_CONNECT_ATTEMPTS => {
                tracing::warn!(
                    attempt,
                    max_attempts = DB_CONNECT_ATTEMPTS,
                    error = %e,
                    "Waiting for database"
                );
                tokio::time::sleep(DB_CONNECT_BACKOFF).await;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Database unreachable after {DB_CONNECT_ATTEMPTS} attempts")
                });
            }
        }
    }

    unreachable!("loop either returns a pool or the final error")
}
