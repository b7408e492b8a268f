//! File-backed [`SnapshotStore`].

use crate::error::PersistenceError;
use crate::snapshot::{self, SnapshotHeader};
use seeker_kernel::error::Result as KernelResult;
use seeker_kernel::snapshot::decode::decode_snapshot;
use seeker_kernel::snapshot::encode::encode_snapshot;
use seeker_kernel::{KernelError, Snapshot, SnapshotStore};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Snapshot slot backed by a single file. See [`snapshot::write_to`] for the
/// crash-safety of `save`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode and write `snapshot`, returning the size of the file on disk.
    pub fn write(&self, snapshot: &Snapshot) -> crate::Result<u64> {
        let body = encode_snapshot(snapshot)?;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let header = SnapshotHeader::for_body(snapshot.len() as u64, timestamp, &body);
        snapshot::write_to(&self.path, &header, &body)?;
        Ok((SnapshotHeader::SIZE + body.len()) as u64)
    }

    /// Read, verify and decode the snapshot file. `Ok(None)` if neither the
    /// file nor its previous generation exists.
    ///
    /// A missing file next to an existing `.prev` is left by an interrupted
    /// rotation; the previous generation is loaded.
    pub fn read(&self) -> crate::Result<Option<Snapshot>> {
        if self.path.exists() {
            return Self::read_file(&self.path).map(Some);
        }
        let prev = snapshot::previous_path(&self.path);
        if prev.exists() {
            tracing::warn!("{:?} is missing, restoring from {:?}", self.path, prev);
            return Self::read_file(&prev).map(Some);
        }
        Ok(None)
    }

    fn read_file(path: &Path) -> crate::Result<Snapshot> {
        let (header, body) = snapshot::read_verified(path)?;
        let decoded = decode_snapshot(&body)?;
        if decoded.len() as u64 != header.entry_count {
            return Err(PersistenceError::InvalidFormat(format!(
                "Header claims {} entries, body holds {}",
                header.entry_count,
                decoded.len()
            )));
        }
        Ok(decoded)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> KernelResult<()> {
        let bytes = self.write(snapshot).map_err(KernelError::from)?;
        tracing::debug!("Wrote {} entries ({} bytes) to {:?}", snapshot.len(), bytes, self.path);
        Ok(())
    }

    fn load(&self) -> KernelResult<Option<Snapshot>> {
        self.read().map_err(KernelError::from)
    }

    /// Removes the file and its previous generation, so a later `load`
    /// cannot fall back to stale data.
    fn clear(&self) -> KernelResult<()> {
        for path in [self.path.clone(), snapshot::previous_path(&self.path)] {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(KernelError::Storage(e.to_string())),
            }
        }
        Ok(())
    }
}
