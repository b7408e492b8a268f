// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Text search over the discovery corpus.

pub mod static_corpus;

/// Seam for the search backend. The store never depends on it, so a ranked
/// engine can replace [`static_corpus::StaticCorpusIndex`] on its own.
pub trait SearchIndex {
    /// Entries matching `term`, in the index's own order.
    /// An empty term returns everything.
    fn search(&self, term: &str) -> Vec<String>;

    /// Number of searchable entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
