use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    postgres_connected: bool,
    pool_size: usize,
    available_connections: usize,
    uptime_seconds: u64,
}

pub async fn health_check(State((gateway, start_time)): State<AppState>) -> Json<HealthResponse> {
    // Test PostgreSQL connection
    let postgres_connected = gateway.is_connected().await;
    let status = gateway.pool_status();

    Json(HealthResponse {
        status: if postgres_connected {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        postgres_connected,
        pool_size: status.size,
        available_connections: status.available,
        uptime_seconds: start_time.elapsed().as_secs(),
    })
}
