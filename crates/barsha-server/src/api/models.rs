//! Request and response types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// User question in Tunisian Derja (or any text to rank against the corpus).
    #[serde(default)]
    pub prompt: String,
}

/// Response body for `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Composed reply: top snippets joined by blank lines, or the fallback text.
    pub assistant: String,
    /// Distinct source links backing the reply, in rank order.
    pub sources: Vec<String>,
}

/// Request body for `POST /ingest_url`.
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    /// Page URL to fetch, strip to plain text, and append to the corpus.
    #[serde(default)]
    pub url: String,
}

/// Response body for `POST /ingest_url`.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Always `"ok"` on success.
    pub status: String,
    /// Page title extracted from the fetched HTML (empty when absent).
    pub title: String,
    /// Character count of the extracted plain text.
    pub chars: usize,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Number of chunks in the live index.
    pub chunks: usize,
    /// Number of distinct terms in the live index.
    pub terms: usize,
}
