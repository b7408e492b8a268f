// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::sync::OnceLock;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry() -> anyhow::Result<()> {
    // 1. Initialize Tracing (Logs)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "seeker_node=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    // 2. Initialize Metrics (Prometheus)
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Store handle for /metrics endpoint
    if PROM_HANDLE.set(handle).is_err() {
        tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
    }

    metrics::describe_counter!("seeker_metadata_added_total", "Successful add/update operations");
    metrics::describe_counter!("seeker_metadata_removed_total", "Entries removed");
    metrics::describe_counter!("seeker_searches_total", "Search requests served");
    metrics::describe_counter!("seeker_snapshots_saved_total", "Snapshots flushed to disk");
    metrics::describe_gauge!("seeker_metadata_entries", "Entries currently in the registry");
    metrics::describe_gauge!("seeker_snapshot_size_bytes", "Size of the last saved snapshot in bytes");
    metrics::describe_histogram!("seeker_restore_duration_seconds", "Time taken to rebuild the registry at startup");

    metrics::gauge!("seeker_node_up", 1.0);
    Ok(())
}

/// Get the Prometheus handle to render metrics
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}
