// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot decoding.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Cursor, Read};

use crate::error::{KernelError, Result};
use crate::snapshot::encode::{MAGIC, SCHEMA_VERSION};
use crate::snapshot::Snapshot;
use crate::types::entry::MetadataEntry;

// Cursor reads only fail by running off the end of the buffer.
fn truncated(_: io::Error) -> KernelError {
    KernelError::MalformedSnapshot("unexpected end of snapshot")
}

fn read_str(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let len = cursor.read_u32::<LittleEndian>().map_err(truncated)? as usize;
    // Bounded by the buffer, so a corrupt prefix never drives the allocation.
    let remaining = cursor.get_ref().len() as u64 - cursor.position();
    if len as u64 > remaining {
        return Err(KernelError::MalformedSnapshot("field length out of bounds"));
    }
    let mut bytes = vec![0u8; len];
    cursor.read_exact(&mut bytes).map_err(truncated)?;
    String::from_utf8(bytes).map_err(|_| KernelError::MalformedSnapshot("field is not valid UTF-8"))
}

/// Parse a body written by [`crate::snapshot::encode::encode_snapshot`].
///
/// Every entry must satisfy the store invariant (non-empty id and
/// description), and the buffer must be consumed exactly.
pub fn decode_snapshot(buf: &[u8]) -> Result<Snapshot> {
    if buf.len() < 12 {
        return Err(KernelError::MalformedSnapshot("snapshot too short"));
    }
    if &buf[0..4] != MAGIC {
        return Err(KernelError::MalformedSnapshot("bad magic"));
    }

    let mut cursor = Cursor::new(buf);
    cursor.set_position(4);

    let version = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
    if version != SCHEMA_VERSION {
        return Err(KernelError::MalformedSnapshot("unsupported schema version"));
    }

    let count = cursor.read_u32::<LittleEndian>().map_err(truncated)? as usize;
    // Each entry needs at least its two length prefixes.
    if count > (buf.len() - 12) / 8 {
        return Err(KernelError::MalformedSnapshot("entry count exceeds body"));
    }

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let id = read_str(&mut cursor)?;
        let description = read_str(&mut cursor)?;
        if id.is_empty() || description.is_empty() {
            return Err(KernelError::MalformedSnapshot("empty field in entry"));
        }
        entries.push(MetadataEntry { id, description });
    }

    if cursor.position() as usize != buf.len() {
        return Err(KernelError::MalformedSnapshot("trailing bytes after last entry"));
    }

    Ok(Snapshot::new(entries))
}
