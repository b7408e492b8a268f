// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Operation outcomes.

use serde::{Deserialize, Serialize};

/// Result of a successful `add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOutcome {
    /// The id was absent and has been inserted.
    Created,
    /// The id was present and its description overwritten.
    Updated,
}

/// Result of a `remove` with a non-empty id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}
