// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Process-local snapshot slot.

use std::sync::Mutex;

use crate::error::{KernelError, Result};
use crate::snapshot::encode::encode_snapshot;
use crate::snapshot::decode::decode_snapshot;
use crate::snapshot::{Snapshot, SnapshotStore};

/// Keeps the encoded snapshot in memory. Survives a store being dropped and
/// rebuilt, not a process exit; used for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded bytes of the current snapshot, if any.
    pub fn raw(&self) -> Option<Vec<u8>> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let encoded = encode_snapshot(snapshot)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| KernelError::Storage("snapshot slot poisoned".to_string()))?;
        *slot = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| KernelError::Storage("snapshot slot poisoned".to_string()))?;
        slot.as_deref().map(decode_snapshot).transpose()
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| KernelError::Storage("snapshot slot poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}
