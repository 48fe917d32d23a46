//! Keyword analysis: n-gram frequency tables over the visible-text tokens.
//!
//! Counting is case-sensitive with no stemming, and the output is fully
//! deterministic: tables are sorted by descending count with ties kept in
//! first-seen order, so identical token input produces byte-identical
//! output across runs.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::TOP_KEYWORDS_PER_SIZE;

/// An n-gram frequency table: (gram, count) pairs ordered by descending
/// count, ties broken by first-seen order.
pub type NGramTable = Vec<(String, u32)>;

/// The keyword tables derived from one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSummary {
    /// Single-token frequency table.
    pub one_grams: NGramTable,
    /// Adjacent-pair frequency table (N tokens yield N-1 candidates).
    pub two_grams: NGramTable,
    /// Adjacent-triple frequency table (N tokens yield N-2 candidates).
    pub three_grams: NGramTable,
    /// Merged top keywords for presentation: the top 5 of each table,
    /// 1-grams first, then 2-grams, then 3-grams.
    pub top_keywords: NGramTable,
}

/// Computes the 1/2/3-gram frequency tables for a token stream.
pub fn analyze(tokens: &[String]) -> KeywordSummary {
    let one_grams = count_grams(tokens.iter().cloned());
    let two_grams = count_grams(tokens.windows(2).map(|pair| pair.join(" ")));
    let three_grams = count_grams(tokens.windows(3).map(|triple| triple.join(" ")));

    let top_keywords = one_grams
        .iter()
        .take(TOP_KEYWORDS_PER_SIZE)
        .chain(two_grams.iter().take(TOP_KEYWORDS_PER_SIZE))
        .chain(three_grams.iter().take(TOP_KEYWORDS_PER_SIZE))
        .cloned()
        .collect();

    KeywordSummary {
        one_grams,
        two_grams,
        three_grams,
        top_keywords,
    }
}

fn count_grams(grams: impl Iterator<Item = String>) -> NGramTable {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut entries: NGramTable = Vec::new();

    for gram in grams {
        if let Some(&index) = seen.get(&gram) {
            entries[index].1 += 1;
        } else {
            seen.insert(gram.clone(), entries.len());
            entries.push((gram, 1));
        }
    }

    // sort_by is stable, so ties keep first-seen order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}
