//! # barsha-core
//!
//! Embeddable BM25 retrieval engine for Tunisian Derja text corpora.
//!
//! Loads line-delimited JSON records from a corpus directory, splits them
//! into bounded text chunks, and ranks the chunks against free-text queries
//! with Okapi BM25. This is the core library crate with zero async
//! dependencies; the HTTP boundary lives in `barsha-server`.

/// Answer composition: snippets, provenance links, and the fallback reply.
pub mod answer;
/// The chunk type and fixed-size text windowing.
pub mod chunk;
/// Global configuration constants: ranking parameters, chunking thresholds, defaults.
pub mod config;
/// Corpus loading: jsonl directory scan, record field extraction, load statistics.
pub mod corpus;
/// Shared owner of the live index with atomic rebuilds.
pub mod engine;
/// The retrieval index: chunks, token sequences, frequency statistics.
pub mod index;
/// BM25 Okapi scoring.
pub mod score;
/// Text normalization and Arabic-aware tokenization.
pub mod text;
