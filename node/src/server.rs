// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::engine::Engine;
use crate::errors::EngineError;
use crate::messages;

pub type SharedEngine = Arc<Mutex<Engine>>;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/search", post(search))
        .route("/metadata", post(add_metadata).get(list_metadata))
        .route("/metadata/count", get(metadata_count))
        .route("/metadata/entries/:id", get(get_metadata).delete(remove_metadata))
        .route("/health", get(health))
        // Admin V1
        .route("/v1/snapshot/save", post(snapshot_save))
        // Observability
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Flush the registry every `secs` seconds until the runtime shuts down.
pub fn spawn_auto_snapshot(state: SharedEngine, secs: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(secs));
        // The first tick completes immediately; nothing has changed yet.
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("Auto-snapshotting...");
            let engine = state.lock().await;
            match engine.save_snapshot() {
                Ok(n) => tracing::info!("Auto-snapshot saved {} entries", n),
                Err(e) => tracing::error!("Auto-snapshot failed: {}", e),
            }
        }
    })
}

async fn search(
    State(state): State<SharedEngine>,
    Json(payload): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let engine = state.lock().await;
    Json(SearchResponse {
        results: engine.search(&payload.term),
    })
}

async fn add_metadata(
    State(state): State<SharedEngine>,
    Json(payload): Json<AddMetadataRequest>,
) -> (StatusCode, Json<StatusResponse>) {
    let mut engine = state.lock().await;
    let result = engine.add(&payload.id, &payload.description);
    let message = messages::add_message(&payload.id, &result);

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => EngineError::Kernel(e.clone()).status(),
    };
    (status, Json(StatusResponse { ok: result.is_ok(), message }))
}

async fn get_metadata(
    State(state): State<SharedEngine>,
    Path(id): Path<String>,
) -> Json<MetadataGetResponse> {
    let engine = state.lock().await;
    let description = engine.get_metadata(&id);
    Json(MetadataGetResponse { id, description })
}

async fn list_metadata(State(state): State<SharedEngine>) -> Json<MetadataListResponse> {
    let engine = state.lock().await;
    Json(MetadataListResponse {
        entries: engine.list_all_metadata(),
    })
}

async fn metadata_count(State(state): State<SharedEngine>) -> Json<MetadataCountResponse> {
    let engine = state.lock().await;
    Json(MetadataCountResponse {
        count: engine.get_metadata_count(),
    })
}

async fn remove_metadata(
    State(state): State<SharedEngine>,
    Path(id): Path<String>,
) -> (StatusCode, Json<StatusResponse>) {
    let mut engine = state.lock().await;
    let result = engine.remove(&id);
    let message = messages::remove_message(&id, &result);

    let (ok, status) = match &result {
        Ok(outcome) if outcome.is_removed() => (true, StatusCode::OK),
        Ok(_) => (false, StatusCode::NOT_FOUND),
        Err(e) => (false, EngineError::Kernel(e.clone()).status()),
    };
    (status, Json(StatusResponse { ok, message }))
}

async fn health(State(state): State<SharedEngine>) -> Json<HealthResponse> {
    let engine = state.lock().await;
    Json(HealthResponse {
        status: engine.health_check(),
    })
}

async fn snapshot_save(
    State(state): State<SharedEngine>,
) -> Result<Json<SnapshotSaveResponse>, EngineError> {
    let engine = state.lock().await;
    let entries = engine.save_snapshot()?;
    let path = engine
        .snapshot_path
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Json(SnapshotSaveResponse {
        success: true,
        entries,
        path,
    }))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
