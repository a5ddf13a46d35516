//! barsha-server — HTTP boundary for the barsha retrieval engine.
//!
//! Provides the REST API and URL ingestion. Ranking and corpus logic live
//! in `barsha-core`.

/// REST API layer: Axum router, HTTP handlers, models, metrics.
pub mod api;
/// URL ingestion: outbound fetch and coarse HTML text extraction.
pub mod ingest;
