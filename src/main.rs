mod api;
mod config;
mod error;
mod records;
mod store;

use crate::api::{
    create_course, create_score, create_student, get_scores, health_check, update_score,
};
use crate::config::Config;
use crate::store::StoreGateway;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup log directory
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "/var/log/gradebook-api".to_string());

    // Create log directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).unwrap_or_else(|e| {
        eprintln!("Warning: Could not create log directory {}: {}", log_dir, e);
    });

    // Create file appender with daily rotation
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "gradebook-api.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - both stdout and file
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gradebook_api=debug")),
        )
        // Console output
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        // File output with JSON format for easy parsing
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .json()
                .with_writer(non_blocking),
        )
        .init();

    debug!("Logging initialized - log directory: {}", log_dir);

    // Load environment from .env file if present
    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env file found or error loading it: {}", e);
    }

    // Load configuration
    let config = Config::from_env()?;
    let socket_addr = config.socket_addr()?;

    info!("Starting gradebook API on {}", socket_addr);
    info!("Pool max size: {}", config.pool_max_size);

    // Connect to the store; startup aborts if it is unreachable or the
    // schema cannot be ensured.
    let gateway = Arc::new(StoreGateway::connect(&config).await?);

    // Start time for uptime tracking
    let start_time = Instant::now();

    let app = Router::new()
        // Health check (for load balancer)
        .route("/health", get(health_check))
        .nest(
            "/api",
            Router::new()
                .route("/students", post(create_student))
                .route("/courses", post(create_course))
                .route("/scores", post(create_score))
                .route("/students/:id/scores", get(get_scores))
                .route("/score/:id/:scoreid", put(update_score)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state((gateway, start_time));

    // Create listener
    let listener = tokio::net::TcpListener::bind(&socket_addr).await?;
    info!("Server listening on {}", socket_addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
