//! Snapshot files for tests and demos.

use crate::error::Result;
use crate::file_store::FileSnapshotStore;
use seeker_kernel::{MetadataEntry, Snapshot};

use std::fs;
use std::path::{Path, PathBuf};

/// Entries written by [`generate_test_scenario`].
pub fn sample_entries() -> Vec<MetadataEntry> {
    vec![
        MetadataEntry::new("ryjl3-tyaaa-aaaaa-aaaba-cai", "ICP Ledger Canister"),
        MetadataEntry::new("rdmx6-jaaaa-aaaaa-aaadq-cai", "Internet Identity"),
        MetadataEntry::new("qoctq-giaaa-aaaaa-aaaea-cai", "NNS Dapp"),
    ]
}

pub struct TestPaths {
    pub snapshot: PathBuf,
    pub previous: PathBuf,
}

/// Write two generations of a snapshot into `dir`: the first holds the
/// first two sample entries, the current one holds all three.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let snapshot_path = dir.join("registry.snap");
    let store = FileSnapshotStore::new(&snapshot_path);

    let entries = sample_entries();
    store.write(&Snapshot::new(entries[..2].to_vec()))?;
    store.write(&Snapshot::new(entries))?;

    Ok(TestPaths {
        previous: crate::snapshot::previous_path(&snapshot_path),
        snapshot: snapshot_path,
    })
}
