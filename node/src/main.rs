// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use seeker_node::config::NodeConfig;
use seeker_node::engine::Engine;
use seeker_node::server::{build_router, spawn_auto_snapshot, SharedEngine};
use seeker_node::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry()?;

    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing Seeker Node with config: {:?}", cfg);

    let mut engine = Engine::new(&cfg);

    // Restore before accepting any request. A snapshot that exists but cannot
    // be read is fatal: starting empty would overwrite it on the next flush.
    let restored = engine.start()?;
    tracing::info!("Registry ready with {} entries", restored);

    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));

    if let Some(secs) = cfg.auto_snapshot_interval_secs {
        if cfg.snapshot_path.is_some() {
            tracing::info!("Auto-snapshot every {}s", secs);
            spawn_auto_snapshot(shared_state.clone(), secs);
        }
    }

    let app = build_router(shared_state.clone());

    let listener = TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Final flush once in-flight requests have drained.
    let engine = shared_state.lock().await;
    if engine.has_snapshot_store() {
        let written = engine.save_snapshot()?;
        tracing::info!("Shutdown snapshot saved ({} entries)", written);
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
