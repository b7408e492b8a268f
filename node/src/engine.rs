// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use seeker_kernel::{
    AddOutcome, KernelError, MetadataEntry, MetadataStore, RemoveOutcome, SearchIndex,
    SnapshotStore, StaticCorpusIndex,
};
use seeker_persistence::FileSnapshotStore;

use crate::config::NodeConfig;
use crate::errors::EngineError;
use crate::messages;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub type SharedSnapshotStore = Arc<dyn SnapshotStore + Send + Sync>;

/// The registry as the node serves it: one metadata store, one search index
/// and an optional durable snapshot slot.
pub struct Engine {
    store: MetadataStore,
    index: Box<dyn SearchIndex + Send + Sync>,
    snapshots: Option<SharedSnapshotStore>,
    pub snapshot_path: Option<PathBuf>,
    clear_after_restore: bool,
}

impl Engine {
    pub fn new(cfg: &NodeConfig) -> Self {
        let snapshots = cfg.snapshot_path.as_ref().map(|path| {
            tracing::info!("Snapshot file: {:?}", path);
            Arc::new(FileSnapshotStore::new(path)) as SharedSnapshotStore
        });
        if snapshots.is_none() {
            tracing::warn!("No snapshot path configured; registry will not survive restarts");
        }

        Self {
            store: MetadataStore::new(),
            index: Box::new(StaticCorpusIndex::new()),
            snapshots,
            snapshot_path: cfg.snapshot_path.clone(),
            clear_after_restore: cfg.clear_snapshot_after_restore,
        }
    }

    /// Engine over explicit collaborators.
    pub fn with_parts(
        index: Box<dyn SearchIndex + Send + Sync>,
        snapshots: Option<SharedSnapshotStore>,
    ) -> Self {
        Self {
            store: MetadataStore::new(),
            index,
            snapshots,
            snapshot_path: None,
            clear_after_restore: false,
        }
    }

    pub fn set_clear_after_restore(&mut self, clear: bool) {
        self.clear_after_restore = clear;
    }

    // --- Lifecycle -------------------------------------------------------

    /// Rebuild the registry from the durable snapshot. Must run before the
    /// engine serves any request. Returns the number of restored entries.
    pub fn start(&mut self) -> Result<usize, EngineError> {
        let Some(snapshots) = self.snapshots.clone() else {
            return Ok(0);
        };

        let started = Instant::now();
        let restored = self.store.on_after_restart(&*snapshots)?;
        metrics::histogram!("seeker_restore_duration_seconds", started.elapsed().as_secs_f64());
        self.record_count();
        tracing::info!("Restored {} metadata entries", restored);

        if self.clear_after_restore {
            snapshots.clear()?;
            tracing::info!("Snapshot slot cleared after restore");
        }
        Ok(restored)
    }

    /// Flush the registry to the durable snapshot. Returns the number of
    /// entries written.
    pub fn save_snapshot(&self) -> Result<usize, EngineError> {
        let snapshots = self
            .snapshots
            .as_ref()
            .ok_or_else(|| EngineError::InvalidInput("No snapshot path configured".to_string()))?;

        let written = self.store.on_before_restart(&**snapshots)?;
        metrics::increment_counter!("seeker_snapshots_saved_total");
        if let Some(path) = &self.snapshot_path {
            if let Ok(meta) = std::fs::metadata(path) {
                metrics::gauge!("seeker_snapshot_size_bytes", meta.len() as f64);
            }
        }
        tracing::debug!("Flushed {} entries to snapshot", written);
        Ok(written)
    }

    pub fn has_snapshot_store(&self) -> bool {
        self.snapshots.is_some()
    }

    // --- Typed operations -------------------------------------------------

    pub fn search(&self, term: &str) -> Vec<String> {
        metrics::increment_counter!("seeker_searches_total");
        let results = self.index.search(term);
        tracing::debug!("search {:?}: {} hits", term, results.len());
        results
    }

    pub fn add(&mut self, id: &str, description: &str) -> Result<AddOutcome, KernelError> {
        let result = self.store.add(id, description);
        match &result {
            Ok(outcome) => {
                metrics::increment_counter!("seeker_metadata_added_total");
                tracing::debug!("add {:?}: {:?}", id, outcome);
                self.record_count();
            }
            Err(e) => tracing::debug!("add {:?} rejected: {}", id, e),
        }
        result
    }

    pub fn remove(&mut self, id: &str) -> Result<RemoveOutcome, KernelError> {
        let result = self.store.remove(id);
        if let Ok(RemoveOutcome::Removed) = result {
            metrics::increment_counter!("seeker_metadata_removed_total");
            self.record_count();
        }
        tracing::debug!("remove {:?}: {:?}", id, result);
        result
    }

    // --- Canister-compatible surface ---------------------------------------

    pub fn add_metadata(&mut self, id: &str, description: &str) -> String {
        let result = self.add(id, description);
        messages::add_message(id, &result)
    }

    pub fn get_metadata(&self, id: &str) -> Option<String> {
        self.store.get(id)
    }

    pub fn list_all_metadata(&self) -> Vec<MetadataEntry> {
        self.store.list_all()
    }

    pub fn get_metadata_count(&self) -> usize {
        self.store.count()
    }

    pub fn remove_metadata(&mut self, id: &str) -> String {
        let result = self.remove(id);
        messages::remove_message(id, &result)
    }

    pub fn health_check(&self) -> String {
        self.store.health_status()
    }

    fn record_count(&self) {
        metrics::gauge!("seeker_metadata_entries", self.store.count() as f64);
    }
}
