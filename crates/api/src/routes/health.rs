//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when any check fails.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The document storage directory exists.
    pub storage_ready: bool,
}

/// GET /health
///
/// Answers 503 while degraded so load balancers can route around the node.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = agora_db::health_check(&state.pool).await.is_ok();
    let storage_ready = tokio::fs::metadata(&state.config.document_storage_dir)
        .await
        .is_ok_and(|m| m.is_dir());

    let (code, status) = if db_healthy && storage_ready {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(db_healthy, storage_ready, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            storage_ready,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
