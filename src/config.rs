// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Prefix of the liveness string returned by [`crate::MetadataStore::health_status`].
pub const HEALTH_PREFIX: &str = "Seeker backend is operational. Metadata entries: ";

