// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! In-memory metadata registry with explicit snapshot hooks.

use rustc_hash::FxHashMap;

use crate::config::HEALTH_PREFIX;
use crate::error::{KernelError, Result};
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::types::entry::MetadataEntry;
use crate::types::enums::{AddOutcome, RemoveOutcome};

/// Map from canister id to description.
///
/// Mutations take `&mut self`; callers that share a store across threads wrap
/// it in a lock. Only [`MetadataStore::on_before_restart`] and
/// [`MetadataStore::on_after_restart`] touch the durable snapshot.
#[derive(Debug, Default, Clone)]
pub struct MetadataStore {
    entries: FxHashMap<String, String>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the description for `id`.
    ///
    /// The id is validated before the description, so a call with both empty
    /// reports [`KernelError::EmptyId`]. Validation happens before any write.
    pub fn add(&mut self, id: &str, description: &str) -> Result<AddOutcome> {
        if id.is_empty() {
            return Err(KernelError::EmptyId);
        }
        if description.is_empty() {
            return Err(KernelError::EmptyDescription);
        }

        match self.entries.insert(id.to_owned(), description.to_owned()) {
            Some(_) => Ok(AddOutcome::Updated),
            None => Ok(AddOutcome::Created),
        }
    }

    /// Description stored under `id`. An empty id is simply not found.
    pub fn get(&self, id: &str) -> Option<String> {
        if id.is_empty() {
            return None;
        }
        self.entries.get(id).cloned()
    }

    pub fn remove(&mut self, id: &str) -> Result<RemoveOutcome> {
        if id.is_empty() {
            return Err(KernelError::EmptyId);
        }
        match self.entries.remove(id) {
            Some(_) => Ok(RemoveOutcome::Removed),
            None => Ok(RemoveOutcome::NotFound),
        }
    }

    /// Copy of every entry. Order is unspecified.
    pub fn list_all(&self) -> Vec<MetadataEntry> {
        self.entries
            .iter()
            .map(|(id, description)| MetadataEntry::new(id.as_str(), description.as_str()))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn health_status(&self) -> String {
        format!("{}{}", HEALTH_PREFIX, self.count())
    }

    /// Flatten the map into a snapshot sorted by id, so equal maps always
    /// produce equal snapshots.
    pub fn to_snapshot(&self) -> Snapshot {
        let mut entries = self.list_all();
        entries.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        Snapshot::new(entries)
    }

    /// Rebuild a store from a snapshot. Later duplicates overwrite earlier ones.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let mut store = Self::new();
        for entry in snapshot.into_entries() {
            store.add(&entry.id, &entry.description)?;
        }
        Ok(store)
    }

    /// Flush the whole map into `target`, replacing whatever it held.
    /// Returns the number of entries written.
    pub fn on_before_restart(&self, target: &dyn SnapshotStore) -> Result<usize> {
        let snapshot = self.to_snapshot();
        let written = snapshot.len();
        target.save(&snapshot)?;
        Ok(written)
    }

    /// Replace the in-memory map with the durable snapshot in `source`.
    /// With no snapshot on record the store starts empty.
    /// Returns the number of restored entries.
    pub fn on_after_restart(&mut self, source: &dyn SnapshotStore) -> Result<usize> {
        let restored = match source.load()? {
            Some(snapshot) => Self::from_snapshot(snapshot)?,
            None => Self::new(),
        };
        *self = restored;
        Ok(self.count())
    }
}
