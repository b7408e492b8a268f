// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Durable snapshot of the registry and the collaborator that stores it.

pub mod encode;
pub mod decode;
pub mod memory;

use crate::error::Result;
use crate::types::entry::MetadataEntry;

/// Flat ordered sequence of `(id, description)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<MetadataEntry>,
}

impl Snapshot {
    pub fn new(entries: Vec<MetadataEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MetadataEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Persistence collaborator for [`crate::MetadataStore`].
///
/// `save` must replace the previous snapshot as a whole: after a crash the
/// next `load` sees either the old snapshot or the new one, never a mix.
pub trait SnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
    /// `Ok(None)` when nothing has ever been saved.
    fn load(&self) -> Result<Option<Snapshot>>;
    fn clear(&self) -> Result<()>;
}
