use seeker_kernel::KernelError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Invalid magic bytes in header")]
    InvalidMagic,
    #[error("Checksum mismatch: expected {expected:016x}, found {found:016x}")]
    ChecksumMismatch {
        expected: u64,
        found: u64,
    },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
    #[error("Snapshot body rejected: {0}")]
    Kernel(#[from] KernelError),
}

impl From<PersistenceError> for KernelError {
    fn from(e: PersistenceError) -> Self {
        match e {
            PersistenceError::Kernel(inner) => inner,
            other => KernelError::Storage(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
