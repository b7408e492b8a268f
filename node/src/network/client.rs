use crate::api::*;
use crate::errors::EngineError;
use reqwest::{Client, Response};
use seeker_kernel::MetadataEntry;
use serde::de::DeserializeOwned;

/// Typed client for a running Seeker node.
#[derive(Debug, Clone)]
pub struct SeekerClient {
    base_url: String,
    client: Client,
}

impl SeekerClient {
    pub fn new(url: String) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, term: &str) -> Result<Vec<String>, EngineError> {
        let url = format!("{}/search", self.base_url);
        let resp = self.client.post(&url)
            .json(&SearchRequest { term: term.to_string() })
            .send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        let body: SearchResponse = Self::json_ok(resp, "Search").await?;
        Ok(body.results)
    }

    /// Add or update an entry. Rejections (empty id/description) come back as
    /// a `StatusResponse` with `ok == false`, not as an error.
    pub async fn add_metadata(&self, id: &str, description: &str) -> Result<StatusResponse, EngineError> {
        let url = format!("{}/metadata", self.base_url);
        let resp = self.client.post(&url)
            .json(&AddMetadataRequest { id: id.to_string(), description: description.to_string() })
            .send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        Self::json_status(resp).await
    }

    pub async fn get_metadata(&self, id: &str) -> Result<Option<String>, EngineError> {
        if id.is_empty() {
            return Ok(None);
        }
        let url = format!("{}/metadata/entries/{}", self.base_url, encode_segment(id));
        let resp = self.client.get(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        let body: MetadataGetResponse = Self::json_ok(resp, "Get metadata").await?;
        Ok(body.description)
    }

    pub async fn list_all_metadata(&self) -> Result<Vec<MetadataEntry>, EngineError> {
        let url = format!("{}/metadata", self.base_url);
        let resp = self.client.get(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        let body: MetadataListResponse = Self::json_ok(resp, "List metadata").await?;
        Ok(body.entries)
    }

    pub async fn get_metadata_count(&self) -> Result<usize, EngineError> {
        let url = format!("{}/metadata/count", self.base_url);
        let resp = self.client.get(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        let body: MetadataCountResponse = Self::json_ok(resp, "Count metadata").await?;
        Ok(body.count)
    }

    pub async fn remove_metadata(&self, id: &str) -> Result<StatusResponse, EngineError> {
        if id.is_empty() {
            // Not routable; answer the way the node would.
            return Ok(StatusResponse {
                ok: false,
                message: crate::messages::remove_message(id, &Err(seeker_kernel::KernelError::EmptyId)),
            });
        }
        let url = format!("{}/metadata/entries/{}", self.base_url, encode_segment(id));
        let resp = self.client.delete(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        Self::json_status(resp).await
    }

    pub async fn health_check(&self) -> Result<String, EngineError> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        let body: HealthResponse = Self::json_ok(resp, "Health check").await?;
        Ok(body.status)
    }

    pub async fn save_snapshot(&self) -> Result<SnapshotSaveResponse, EngineError> {
        let url = format!("{}/v1/snapshot/save", self.base_url);
        let resp = self.client.post(&url).send().await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        Self::json_ok(resp, "Snapshot save").await
    }

    async fn json_ok<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, EngineError> {
        if !resp.status().is_success() {
            return Err(EngineError::Network(format!("{} request failed: {}", what, resp.status())));
        }
        resp.json().await.map_err(|e| EngineError::Network(e.to_string()))
    }

    // Add/remove answer with a StatusResponse on 2xx, 400 and 404 alike.
    async fn json_status(resp: Response) -> Result<StatusResponse, EngineError> {
        let status = resp.status();
        if status.is_server_error() {
            return Err(EngineError::Network(format!("Request failed: {}", status)));
        }
        resp.json().await.map_err(|e| EngineError::Network(e.to_string()))
    }
}

/// Percent-encode an id for use as a single path segment.
fn encode_segment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for b in id.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
