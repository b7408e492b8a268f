// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Registry entry.

use serde::{Deserialize, Serialize};

/// One `(id, description)` pair. Both fields are non-empty once stored.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub id: String,
    pub description: String,
}

impl MetadataEntry {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl From<(String, String)> for MetadataEntry {
    fn from((id, description): (String, String)) -> Self {
        Self { id, description }
    }
}
