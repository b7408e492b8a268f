use seeker_kernel::snapshot::decode::decode_snapshot;
use seeker_persistence::{snapshot, PersistenceError};

pub fn run(snapshot_path: &str) -> anyhow::Result<()> {
    // Header and body in one read; checksum compared below.
    let (header, body) = snapshot::read_snapshot(snapshot_path)?;
    let computed = snapshot::compute_crc64(&body);

    if computed != header.checksum {
        println!("\n❌ CORRUPTED\n");
        println!("Expected Crc64: {:016x}", header.checksum);
        println!("Found Crc64:    {:016x}", computed);
        return Err(PersistenceError::ChecksumMismatch {
            expected: header.checksum,
            found: computed,
        }
        .into());
    }

    // A matching checksum over an undecodable body still fails.
    let decoded = decode_snapshot(&body)?;
    if decoded.len() as u64 != header.entry_count {
        anyhow::bail!(
            "Header claims {} entries, body holds {}",
            header.entry_count,
            decoded.len()
        );
    }

    println!("\n✅ VERIFIED\n");
    println!("Computed Crc64: {:016x}", computed);
    println!("Entries:        {}\n", decoded.len());
    Ok(())
}
