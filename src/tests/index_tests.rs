// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::index::static_corpus::{StaticCorpusIndex, CORPUS};
use crate::index::SearchIndex;

#[test]
fn test_empty_term_returns_full_corpus_in_order() {
    let index = StaticCorpusIndex::new();
    let all = index.search("");
    assert_eq!(all.len(), 14);
    assert_eq!(all, CORPUS.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    assert_eq!(index.len(), 14);
}

#[test]
fn test_icp_matches_regardless_of_case() {
    let index = StaticCorpusIndex::new();
    let hits = index.search("icp");
    assert!(hits.contains(&"ICP Ledger Canister".to_string()));
    assert!(hits.contains(&"DAppStore was launched on the ICP July 24th, 2025".to_string()));
    assert_eq!(
        hits,
        vec![
            "ICP Ledger Canister".to_string(),
            "ICPSwap".to_string(),
            "DAppStore was launched on the ICP July 24th, 2025".to_string(),
        ]
    );
}

#[test]
fn test_no_match_is_empty() {
    let index = StaticCorpusIndex::new();
    assert!(index.search("zzz-no-match").is_empty());
}

#[test]
fn test_case_insensitive_equivalence() {
    let index = StaticCorpusIndex::new();
    let upper = index.search("NFT");
    let lower = index.search("nft");
    let mixed = index.search("nFt");
    assert_eq!(upper, lower);
    assert_eq!(lower, mixed);
    assert_eq!(upper.len(), 2);
}

#[test]
fn test_results_preserve_corpus_order() {
    let index = StaticCorpusIndex::new();
    let hits = index.search("a");
    let positions: Vec<usize> = hits
        .iter()
        .map(|h| CORPUS.iter().position(|c| c == h).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_fold_is_ascii_only() {
    static CORPUS_UNICODE: [&str; 3] = ["ÉCOLE canister", "école canister", "Straße"];
    let index = StaticCorpusIndex::with_corpus(&CORPUS_UNICODE);

    // Non-ASCII letters are not folded.
    assert_eq!(index.search("école"), vec!["école canister".to_string()]);
    assert_eq!(index.search("ÉCOLE"), vec!["ÉCOLE canister".to_string()]);
    // ASCII part of the term still folds.
    assert_eq!(index.search("STRAßE"), vec!["Straße".to_string()]);
    assert_eq!(index.search("CANISTER").len(), 2);
}

#[test]
fn test_whole_entry_and_multiword_terms() {
    let index = StaticCorpusIndex::new();
    assert_eq!(index.search("internet identity"), vec!["Internet Identity".to_string()]);
    assert_eq!(index.search("july 24th"), vec!["DAppStore was launched on the ICP July 24th, 2025".to_string()]);
}
