pub mod nist;
pub mod bleu;
pub mod wer;
pub mod lcs;
pub mod edit_distance;
pub mod symmetric;
pub mod tfidf;

pub use nist::*;
pub use bleu::*;
pub use wer::*;
pub use lcs::*;
pub use edit_distance::*;
pub use symmetric::*;
pub use tfidf::*;

use std::collections::BTreeMap;

/// Count the `n`-grams of `tokens`, ordered by n-gram. Empty when `tokens`
/// is shorter than `n`.
pub(crate) fn ngram_counts(tokens: &[String], n: usize) -> BTreeMap<&[String], usize> {
    let mut counts = BTreeMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// Overlap of two n-gram multisets, each count clipped to the smaller side.
/// Follows the hypothesis order, so float sums over it are reproducible.
pub(crate) fn clipped_overlap<'a>(
    hypothesis: &BTreeMap<&'a [String], usize>,
    reference: &BTreeMap<&'a [String], usize>,
) -> Vec<(&'a [String], usize)> {
    hypothesis
        .iter()
        .filter_map(|(ngram, hyp_count)| {
            let ref_count = reference.get(ngram).copied().unwrap_or(0);
            let clipped = (*hyp_count).min(ref_count);
            (clipped > 0).then_some((*ngram, clipped))
        })
        .collect()
}
