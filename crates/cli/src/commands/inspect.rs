use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use seeker_persistence::snapshot;
use std::path::Path;

pub fn run(snapshot_path: &str) -> anyhow::Result<()> {
    let s_path = Path::new(snapshot_path);
    let prev_path = snapshot::previous_path(s_path);

    println!("\nSeeker Snapshot Report");
    println!("----------------------");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Status", "Details"]);

    add_snapshot_row(&mut table, "Snapshot", s_path);
    add_snapshot_row(&mut table, "Previous", &prev_path);

    println!("{table}\n");

    Ok(())
}

fn add_snapshot_row(table: &mut Table, label: &str, path: &Path) {
    if !path.exists() {
        table.add_row(vec![label, "MISSING", ""]);
        return;
    }

    match snapshot::read_header(path) {
        Ok(header) => {
            let msg = format!(
                "Magic: {:?}, Ver: {}, Entries: {}, Crc64: {:016x}, Ts: {}",
                std::str::from_utf8(&header.magic).unwrap_or("BAD"),
                header.version,
                header.entry_count,
                header.checksum,
                chrono::DateTime::from_timestamp(header.timestamp as i64, 0)
                    .unwrap_or_default()
                    .to_rfc3339()
            );
            table.add_row(vec![label, "FOUND", &msg]);
        }
        Err(e) => {
            table.add_row(vec![label, "CORRUPT", &e.to_string()]);
        }
    }
}
