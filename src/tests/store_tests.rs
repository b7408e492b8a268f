// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::KernelError;
use crate::store::MetadataStore;
use crate::types::entry::MetadataEntry;
use crate::types::enums::{AddOutcome, RemoveOutcome};
use std::collections::HashSet;

#[test]
fn test_add_then_get() {
    let mut store = MetadataStore::new();
    let outcome = store.add("ryjl3-tyaaa-aaaaa-aaaba-cai", "ICP ledger").unwrap();
    assert_eq!(outcome, AddOutcome::Created);
    assert_eq!(store.get("ryjl3-tyaaa-aaaaa-aaaba-cai").as_deref(), Some("ICP ledger"));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_add_rejects_empty_fields_without_mutation() {
    let mut store = MetadataStore::new();
    store.add("a", "first").unwrap();

    assert_eq!(store.add("", "desc"), Err(KernelError::EmptyId));
    assert_eq!(store.add("b", ""), Err(KernelError::EmptyDescription));
    // Both empty: the id is reported.
    assert_eq!(store.add("", ""), Err(KernelError::EmptyId));
    // Empty description on an existing id must not clobber it.
    assert_eq!(store.add("a", ""), Err(KernelError::EmptyDescription));

    assert_eq!(store.count(), 1);
    assert_eq!(store.get("a").as_deref(), Some("first"));
    assert!(store.get("b").is_none());
}

#[test]
fn test_readd_overwrites_and_reports_update() {
    let mut store = MetadataStore::new();
    assert_eq!(store.add("dapp", "v1").unwrap(), AddOutcome::Created);
    assert_eq!(store.add("dapp", "v2").unwrap(), AddOutcome::Updated);
    assert_eq!(store.get("dapp").as_deref(), Some("v2"));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_get_empty_id_is_absent() {
    let store = MetadataStore::new();
    assert_eq!(store.get(""), None);
    assert_eq!(store.get("missing"), None);
}

#[test]
fn test_remove() {
    let mut store = MetadataStore::new();
    store.add("x", "desc").unwrap();
    store.add("y", "desc").unwrap();

    assert_eq!(store.remove("x").unwrap(), RemoveOutcome::Removed);
    assert!(store.get("x").is_none());
    assert_eq!(store.count(), 1);

    assert_eq!(store.remove("x").unwrap(), RemoveOutcome::NotFound);
    assert_eq!(store.count(), 1);

    assert_eq!(store.remove(""), Err(KernelError::EmptyId));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_count_tracks_distinct_ids() {
    let mut store = MetadataStore::new();
    for i in 0..50 {
        store.add(&format!("id-{}", i), "d").unwrap();
    }
    // Overwrites do not change the count.
    for i in 0..10 {
        store.add(&format!("id-{}", i), "again").unwrap();
    }
    for i in 40..50 {
        store.remove(&format!("id-{}", i)).unwrap();
    }
    // Removing an unknown id leaves it unchanged.
    store.remove("id-999").unwrap();
    assert_eq!(store.count(), 40);
}

#[test]
fn test_list_all_as_set() {
    let mut store = MetadataStore::new();
    store.add("a", "alpha").unwrap();
    store.add("b", "beta").unwrap();
    store.add("c", "gamma").unwrap();
    store.remove("b").unwrap();

    let listed: HashSet<MetadataEntry> = store.list_all().into_iter().collect();
    let expected: HashSet<MetadataEntry> = [
        MetadataEntry::new("a", "alpha"),
        MetadataEntry::new("c", "gamma"),
    ]
    .into_iter()
    .collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_health_status_embeds_count() {
    let mut store = MetadataStore::new();
    assert_eq!(store.health_status(), "Seeker backend is operational. Metadata entries: 0");
    store.add("a", "b").unwrap();
    store.add("c", "d").unwrap();
    assert_eq!(store.health_status(), "Seeker backend is operational. Metadata entries: 2");
}

#[test]
fn test_unicode_ids_and_descriptions() {
    let mut store = MetadataStore::new();
    store.add("キャニスター", "Ünïcødé description ✓").unwrap();
    assert_eq!(store.get("キャニスター").as_deref(), Some("Ünïcødé description ✓"));
}
