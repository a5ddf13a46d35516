//! Global configuration constants for barsha.
//!
//! All tuning parameters and server defaults are defined here. These are
//! compile-time constants; runtime configuration is handled via CLI arguments
//! in `main.rs`.

/// BM25 Okapi term frequency saturation parameter.
///
/// Controls how quickly term frequency saturates. Higher values allow TF to grow more.
/// Standard range: 1.0–2.0.
pub const BM25_K1: f32 = 1.5;

/// BM25 Okapi document length normalization parameter.
///
/// Controls the impact of chunk length on scoring. 0.0 = no normalization,
/// 1.0 = full normalization. Standard value is 0.75.
pub const BM25_B: f32 = 0.75;

/// Maximum chunk window size in characters (Unicode scalar values, not bytes).
///
/// Record text is partitioned into non-overlapping windows of this size to
/// improve retrieval granularity on long documents.
pub const CHUNK_WINDOW_CHARS: usize = 800;

/// Minimum normalized chunk length in characters.
///
/// Windows that normalize to fewer characters than this are discarded, not
/// padded or merged. Filters out boilerplate fragments and trailing scraps.
pub const MIN_CHUNK_CHARS: usize = 80;

/// Number of top-ranked chunks considered when composing an answer.
pub const RANKED_CANDIDATES: usize = 5;

/// Maximum number of chunk texts concatenated into the answer payload.
pub const MAX_SNIPPETS: usize = 3;

/// Maximum number of distinct provenance links returned with an answer.
pub const MAX_SOURCES: usize = 5;

/// Fixed Derja reply returned when no chunk ranks above zero relevance.
pub const FALLBACK_REPLY: &str = "ما لقيتش معلومات كافية توّا. جرّب سؤال آخر.";

/// File name for ingested URL records, created under the corpus directory.
pub const INGESTED_FILE: &str = "ingested_urls.jsonl";

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8640;

/// Default directory of jsonl corpus records.
pub const DEFAULT_CORPUS_DIR: &str = "./data/raw";

/// User-Agent header sent on outbound ingestion fetches.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; Barsha/0.1)";

/// Timeout in seconds for outbound ingestion fetches.
pub const FETCH_TIMEOUT_SECS: u64 = 20;

/// Per-request timeout in seconds for the HTTP server.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (1 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
