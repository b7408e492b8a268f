use crate::error::{PersistenceError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use crc64fast::Digest;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub entry_count: u64,
    pub timestamp: u64,
    pub checksum: u64,
    pub reserved: [u8; 8],
}

impl SnapshotHeader {
    pub const SIZE: usize = 4 + 4 + 8 + 8 + 8 + 8; // 40 bytes
    pub const MAGIC: [u8; 4] = *b"SEEK";
    pub const VERSION: u32 = 1;

    /// Header for `body`, checksum included.
    pub fn for_body(entry_count: u64, timestamp: u64, body: &[u8]) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            entry_count,
            timestamp,
            checksum: compute_crc64(body),
            reserved: [0; 8],
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..16].copy_from_slice(&self.entry_count.to_le_bytes());
        buf[16..24].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[24..32].copy_from_slice(&self.checksum.to_le_bytes());
        buf[32..40].copy_from_slice(&self.reserved);
        buf
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != Self::MAGIC {
            return Err(PersistenceError::InvalidMagic);
        }

        let version = reader.read_u32::<LittleEndian>()?;
        if version != Self::VERSION {
            return Err(PersistenceError::InvalidFormat(format!(
                "Unsupported snapshot version {}",
                version
            )));
        }
        let entry_count = reader.read_u64::<LittleEndian>()?;
        let timestamp = reader.read_u64::<LittleEndian>()?;
        let checksum = reader.read_u64::<LittleEndian>()?;
        let mut reserved = [0u8; 8];
        reader.read_exact(&mut reserved)?;

        Ok(Self {
            magic,
            version,
            entry_count,
            timestamp,
            checksum,
            reserved,
        })
    }
}

pub fn compute_crc64(data: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(data);
    digest.sum64()
}

/// Path of the copy kept from the save before last.
pub fn previous_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".prev");
    PathBuf::from(name)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write header and body so that `path` holds either the old file or the
/// complete new one at every instant.
///
/// The body goes to `<path>.tmp` and is fsynced. The current file (if any) is
/// then hard-linked (or copied) to `<path>.prev` while staying in place, and
/// the temp file is renamed over `path`.
pub fn write_to(path: impl AsRef<Path>, header: &SnapshotHeader, body: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(&header.to_bytes())?;
        file.write_all(body)?;
        file.sync_all()?;
    }

    if let Err(e) = keep_previous(path) {
        tracing::error!("Could not keep previous snapshot of {:?}: {}", path, e);
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;

    sync_parent(path);
    Ok(())
}

/// Copy the current generation to `<path>.prev` without moving it.
fn keep_previous(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let prev = previous_path(path);
    match fs::remove_file(&prev) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    if fs::hard_link(path, &prev).is_err() {
        fs::copy(path, &prev)?;
    }
    Ok(())
}

/// Persist the rename itself.
#[cfg(unix)]
fn sync_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) {}

pub fn read_header(path: impl AsRef<Path>) -> Result<SnapshotHeader> {
    let file = File::open(path)?;
    SnapshotHeader::read_from(file)
}

/// Header and body, without checksum verification.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<(SnapshotHeader, Vec<u8>)> {
    let mut file = File::open(path)?;
    let header = SnapshotHeader::read_from(&mut file)?;
    let mut body = Vec::new();
    file.read_to_end(&mut body)?;
    Ok((header, body))
}

/// Header and body, rejecting a body whose CRC64 does not match the header.
pub fn read_verified(path: impl AsRef<Path>) -> Result<(SnapshotHeader, Vec<u8>)> {
    let (header, body) = read_snapshot(path)?;
    let found = compute_crc64(&body);
    if found != header.checksum {
        return Err(PersistenceError::ChecksumMismatch {
            expected: header.checksum,
            found,
        });
    }
    Ok((header, body))
}
