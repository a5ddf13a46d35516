//! BM25 Okapi scoring engine.
//!
//! Scores every chunk against a query using the BM25 formula with the `k1`
//! and `b` parameters from [`crate::config`]. There are no postings lists:
//! the corpus is small enough that each query walks the stored token
//! sequences directly.

use crate::config;
use crate::index::Index;
use crate::text::tokenize;
use std::collections::HashMap;

/// BM25 Okapi ranking of all chunks against `query`.
///
/// Returns `(chunk position, score)` for every chunk, sorted by descending
/// score with ties broken by ascending position. Query terms absent from the
/// corpus contribute nothing; an empty or out-of-vocabulary query therefore
/// yields an all-zero ranking in position order.
pub fn rank(index: &Index, query: &str) -> Vec<(usize, f32)> {
    let query_tokens = tokenize(query);
    let n = index.chunk_count();
    if n == 0 {
        return Vec::new();
    }

    let avgdl = if index.avg_chunk_len > 0.0 {
        index.avg_chunk_len
    } else {
        1.0
    };
    let k1 = config::BM25_K1;
    let b = config::BM25_B;

    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(n);
    for (i, toks) in index.tokens.iter().enumerate() {
        let dl = toks.len() as f32;

        let mut tf_map: HashMap<&str, f32> = HashMap::with_capacity(toks.len());
        for token in toks.iter() {
            *tf_map.entry(token).or_insert(0.0) += 1.0;
        }

        let mut score = 0.0f32;
        for term in query_tokens.iter() {
            let Some(&df) = index.doc_freq.get(term) else {
                continue;
            };
            let df = df as f32;
            // IDF: log((N - df + 0.5) / (df + 0.5) + 1)
            let idf = ((n as f32 - df + 0.5) / (df + 0.5) + 1.0).ln();
            let tf = tf_map.get(term).copied().unwrap_or(0.0);
            let denom = tf + k1 * (1.0 - b + b * dl / avgdl);
            if denom > 0.0 {
                score += idf * (tf * (k1 + 1.0)) / denom;
            }
        }
        scored.push((i, score));
    }

    // Stable sort: equal scores keep ascending position order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;

    fn chunk(text: &str) -> Chunk {
        Chunk {
            text: text.to_string(),
            link: None,
            source_file: "test.jsonl".to_string(),
        }
    }

    fn build_corpus() -> Index {
        Index::build(vec![
            chunk("الكسكسي بالعلوش أكلة تونسية معروفة"),
            chunk("الكسكسي بالحوت يتعمل في صفاقس"),
            chunk("البحر في جربة ساحر والجو سخون"),
            chunk("القهوة التونسية قوية ياسر"),
        ])
    }

    #[test]
    fn test_empty_index() {
        let index = Index::build(Vec::new());
        assert!(rank(&index, "الكسكسي").is_empty());
    }

    #[test]
    fn test_empty_query_gives_all_zero_ranking_in_order() {
        let index = build_corpus();
        let ranked = rank(&index, "");
        assert_eq!(ranked.len(), 4);
        for (expected, &(pos, score)) in ranked.iter().enumerate() {
            assert_eq!(pos, expected);
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_out_of_vocabulary_query_scores_zero() {
        let index = build_corpus();
        let ranked = rank(&index, "xylophone");
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|&(_, s)| s == 0.0));
    }

    #[test]
    fn test_matching_chunks_rank_above_non_matching() {
        let index = build_corpus();
        let ranked = rank(&index, "الكسكسي");
        assert_eq!(ranked.len(), 4);
        let top: Vec<usize> = ranked[..2].iter().map(|&(i, _)| i).collect();
        assert!(top.contains(&0));
        assert!(top.contains(&1));
        assert!(ranked[0].1 > 0.0);
        assert!(ranked[2].1 == 0.0);
    }

    #[test]
    fn test_higher_tf_ranks_first() {
        let index = Index::build(vec![
            chunk("برشا كلام عادي هنا"),
            chunk("برشا برشا برشا هنا"),
        ]);
        let ranked = rank(&index, "برشا");
        assert_eq!(ranked[0].0, 1, "chunk with higher TF should rank first");
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn test_rarer_term_weighs_more() {
        // "مشترك" appears everywhere, "نادر" in one chunk. Same chunk lengths.
        let index = Index::build(vec![
            chunk("مشترك كلمة نادر هنا"),
            chunk("مشترك كلمة ثانية هنا"),
            chunk("مشترك كلمة ثالثة هنا"),
        ]);
        let rare = rank(&index, "نادر");
        let common = rank(&index, "مشترك");
        // Top score for the rare term beats any single common-term score.
        assert!(rare[0].1 > common[0].1);
    }

    #[test]
    fn test_tf_monotonicity_at_fixed_length() {
        // Same token count per chunk; only the query term's TF differs.
        let index = Index::build(vec![
            chunk("قهوة حليب سكر ماء"),
            chunk("قهوة قهوة سكر ماء"),
            chunk("قهوة قهوة قهوة ماء"),
        ]);
        let ranked = rank(&index, "قهوة");
        assert_eq!(ranked[0].0, 2);
        assert_eq!(ranked[1].0, 1);
        assert_eq!(ranked[2].0, 0);
        assert!(ranked[0].1 > ranked[1].1 && ranked[1].1 > ranked[2].1);
    }

    #[test]
    fn test_ties_keep_ascending_position_order() {
        let index = Index::build(vec![
            chunk("نفس الجملة بالضبط هنا"),
            chunk("نفس الجملة بالضبط هنا"),
            chunk("نفس الجملة بالضبط هنا"),
        ]);
        let ranked = rank(&index, "الجملة");
        let positions: Vec<usize> = ranked.iter().map(|&(i, _)| i).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_repeated_query_terms_accumulate() {
        let index = build_corpus();
        let single = rank(&index, "الكسكسي");
        let double = rank(&index, "الكسكسي الكسكسي");
        assert_eq!(single[0].0, double[0].0);
        assert!(double[0].1 > single[0].1);
    }

    #[test]
    fn test_ranking_is_stable_across_runs() {
        let index = build_corpus();
        let a = rank(&index, "الكسكسي في جربة");
        let b = rank(&index, "الكسكسي في جربة");
        assert_eq!(a, b);
    }
}
