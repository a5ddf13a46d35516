//! Answer composition from a ranked chunk list.
//!
//! One shared implementation consumed by every serving entry point, so the
//! snippet and source selection rules cannot drift between handlers.

use crate::config;
use crate::index::Index;

/// Reply payload assembled from the top-ranked chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Concatenated snippet texts, or the fixed fallback reply.
    pub reply: String,
    /// Distinct provenance links in rank order.
    pub sources: Vec<String>,
    /// `true` when no chunk ranked above zero relevance. A degenerate
    /// answer, not an error.
    pub fallback: bool,
}

/// Composes the final answer from a full ranking.
///
/// Considers the top [`config::RANKED_CANDIDATES`] chunks, drops those with
/// zero score, joins the first [`config::MAX_SNIPPETS`] texts with blank
/// lines, and collects up to [`config::MAX_SOURCES`] distinct links in rank
/// order. Falls back to [`config::FALLBACK_REPLY`] when nothing relevant
/// matched.
pub fn compose(index: &Index, ranking: &[(usize, f32)]) -> Answer {
    let mut snippets: Vec<&str> = Vec::new();
    let mut sources: Vec<String> = Vec::new();

    for &(pos, score) in ranking.iter().take(config::RANKED_CANDIDATES) {
        if score <= 0.0 {
            // Ranking is sorted descending: nothing relevant remains.
            break;
        }
        let chunk = &index.chunks[pos];
        if snippets.len() < config::MAX_SNIPPETS {
            snippets.push(&chunk.text);
        }
        if let Some(link) = &chunk.link {
            if sources.len() < config::MAX_SOURCES && !sources.contains(link) {
                sources.push(link.clone());
            }
        }
    }

    if snippets.is_empty() {
        return Answer {
            reply: config::FALLBACK_REPLY.to_string(),
            sources: Vec::new(),
            fallback: true,
        };
    }

    Answer {
        reply: snippets.join("\n\n"),
        sources,
        fallback: false,
    }
}
