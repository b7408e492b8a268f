//! seeker-persistence: on-disk home for registry snapshots.
//!
//! A snapshot file is a fixed header followed by the kernel's encoded body.
//! [`file_store::FileSnapshotStore`] plugs that format into the kernel's
//! [`seeker_kernel::SnapshotStore`] seam.

pub mod error;
pub mod snapshot;
pub mod file_store;
pub mod fixtures;

pub use error::{PersistenceError, Result};
pub use file_store::FileSnapshotStore;
