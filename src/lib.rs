// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! seeker-kernel: the metadata registry and corpus search behind the Seeker
//! discovery backend.
//!
//! The kernel owns no I/O. Durability is delegated to an injected
//! [`snapshot::SnapshotStore`], invoked only at the two lifecycle hooks of
//! [`store::MetadataStore`].

pub mod config;
pub mod error;
pub mod types;
pub mod store;
pub mod index;
pub mod snapshot;

pub use error::{KernelError, KernelResult};
pub use index::{SearchIndex, static_corpus::StaticCorpusIndex};
pub use snapshot::{Snapshot, SnapshotStore};
pub use store::MetadataStore;
pub use types::entry::MetadataEntry;
pub use types::enums::{AddOutcome, RemoveOutcome};

#[cfg(test)]
pub mod tests;
