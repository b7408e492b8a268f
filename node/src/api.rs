// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};
use seeker_kernel::MetadataEntry;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SearchResponse {
    pub results: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AddMetadataRequest {
    pub id: String,
    pub description: String,
}

/// Reply of add/remove. `message` carries the exact legacy status text.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct StatusResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MetadataGetResponse {
    pub id: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MetadataListResponse {
    pub entries: Vec<MetadataEntry>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MetadataCountResponse {
    pub count: usize,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SnapshotSaveResponse {
    pub success: bool,
    pub entries: usize,
    pub path: String,
}
