// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-list index.

use crate::index::SearchIndex;

/// The built-in corpus, in declared order.
pub const CORPUS: [&str; 14] = [
    "ICP Ledger Canister",
    "Internet Identity",
    "NNS Dapp",
    "OpenChat",
    "DSCVR",
    "Distrikt",
    "Sonic DEX",
    "ICPSwap",
    "Entrepot NFT Marketplace",
    "Yuku NFT Marketplace",
    "Kinic Search",
    "Taggr",
    "Funded",
    "DAppStore was launched on the ICP July 24th, 2025",
];

/// Linear case-insensitive substring scan over a fixed list of strings.
///
/// Case folding is ASCII only: `A..=Z` map to `a..=z`, every other character
/// (non-ASCII included) compares as-is.
#[derive(Clone, Debug)]
pub struct StaticCorpusIndex {
    corpus: &'static [&'static str],
}

impl StaticCorpusIndex {
    pub fn new() -> Self {
        Self { corpus: &CORPUS }
    }

    /// Index over a caller-supplied list, mainly for tests.
    pub fn with_corpus(corpus: &'static [&'static str]) -> Self {
        Self { corpus }
    }
}

impl Default for StaticCorpusIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchIndex for StaticCorpusIndex {
    fn search(&self, term: &str) -> Vec<String> {
        if term.is_empty() {
            return self.corpus.iter().map(|s| s.to_string()).collect();
        }

        let needle = term.to_ascii_lowercase();
        self.corpus
            .iter()
            .filter(|entry| entry.to_ascii_lowercase().contains(&needle))
            .map(|entry| entry.to_string())
            .collect()
    }

    fn len(&self) -> usize {
        self.corpus.len()
    }
}
