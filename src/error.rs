//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Empty identifier passed to a keyed operation.
    #[error("ID cannot be empty")]
    EmptyId,
    /// Empty description passed to `add`.
    #[error("Description cannot be empty")]
    EmptyDescription,
    /// No entry under the given id.
    #[error("No metadata found for ID: {0}")]
    NotFound(String),
    /// Snapshot body could not be decoded.
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(&'static str),
    /// The durable snapshot medium failed.
    #[error("Snapshot storage failure: {0}")]
    Storage(String),
}

impl KernelError {
    /// True for errors caused by caller input (empty id or description).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KernelError::EmptyId | KernelError::EmptyDescription)
    }
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
pub type Result<T> = KernelResult<T>;
