//! The retrieval index: chunks, token sequences, frequency statistics.

use crate::chunk::Chunk;
use crate::text::{tokenize, Tokens};
use std::collections::{HashMap, HashSet};

/// One immutable index generation over the loaded corpus.
///
/// `chunks` and `tokens` are parallel: `tokens[i]` is the token sequence of
/// `chunks[i]`, and the scorer reports chunks by that shared position.
/// An `Index` is never mutated after construction; rebuilds produce a new
/// generation and swap it in wholesale.
pub struct Index {
    /// Chunks in load order.
    pub chunks: Vec<Chunk>,
    /// Token sequence per chunk, same length and order as `chunks`.
    pub tokens: Vec<Tokens>,
    /// token → number of chunks containing it at least once.
    pub doc_freq: HashMap<String, usize>,
    /// Mean token-sequence length over all chunks. 0 for an empty corpus;
    /// the scorer substitutes 1.0 when dividing.
    pub avg_chunk_len: f32,
}

impl Index {
    /// Builds the index for a chunk sequence. Deterministic in its input.
    pub fn build(chunks: Vec<Chunk>) -> Self {
        let tokens: Vec<Tokens> = chunks.iter().map(|c| tokenize(&c.text)).collect();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for toks in &tokens {
            // Distinct tokens only: document frequency counts chunks, not occurrences.
            let distinct: HashSet<&str> = toks.iter().collect();
            for t in distinct {
                *doc_freq.entry(t.to_string()).or_insert(0) += 1;
            }
        }

        let total_tokens: usize = tokens.iter().map(Tokens::len).sum();
        let avg_chunk_len = if tokens.is_empty() {
            0.0
        } else {
            total_tokens as f32 / tokens.len() as f32
        };

        Self {
            chunks,
            tokens,
            doc_freq,
            avg_chunk_len,
        }
    }

    /// Number of chunks in this generation.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of distinct tokens across the corpus.
    pub fn term_count(&self) -> usize {
        self.doc_freq.len()
    }
}
