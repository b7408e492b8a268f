use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use seeker_persistence::FileSnapshotStore;

/// Print every entry of a snapshot file, as a table or as a JSON array.
pub fn run(snapshot_path: &str, json: bool) -> anyhow::Result<()> {
    let store = FileSnapshotStore::new(snapshot_path);
    let snapshot = store
        .read()?
        .ok_or_else(|| anyhow::anyhow!("No snapshot at {}", snapshot_path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(snapshot.entries())?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Description"]);
    for entry in snapshot.entries() {
        table.add_row(vec![entry.id.as_str(), entry.description.as_str()]);
    }

    println!("{table}");
    println!("{} entries", snapshot.len());
    Ok(())
}
