//! Snapshot encoding.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{KernelError, Result};
use crate::snapshot::Snapshot;

pub const MAGIC: &[u8; 4] = b"SKSN";
pub const SCHEMA_VERSION: u32 = 1;

/// Length prefix for a field or the entry count.
pub(crate) fn len_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        KernelError::Storage(format!("{} exceeds the u32 length prefix of the snapshot format", len))
    })
}

fn write_str(buf: &mut Vec<u8>, s: &str) -> Result<()> {
    // Writes into a Vec never fail.
    let _ = buf.write_u32::<LittleEndian>(len_prefix(s.len())?);
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}

/// Serialize a snapshot body: header, entry count, then length-prefixed
/// UTF-8 id and description for every entry in order.
///
/// Fails only when a field or the entry count does not fit in a `u32`.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let payload: usize = snapshot
        .entries()
        .iter()
        .map(|e| 8 + e.id.len() + e.description.len())
        .sum();
    let mut buf = Vec::with_capacity(12 + payload);

    buf.extend_from_slice(MAGIC);
    let _ = buf.write_u32::<LittleEndian>(SCHEMA_VERSION);
    let _ = buf.write_u32::<LittleEndian>(len_prefix(snapshot.len())?);

    for entry in snapshot.entries() {
        write_str(&mut buf, &entry.id)?;
        write_str(&mut buf, &entry.description)?;
    }
    Ok(buf)
}
