use std::collections::{BTreeMap, HashMap};
use sts_eval_core::{CoreError, DirectedMetric, Result};

use super::{clipped_overlap, ngram_counts};

/// NIST n-gram co-occurrence score against a single reference.
///
/// Matches are weighted by how informative they are in the reference: an
/// n-gram that rarely follows its (n-1)-gram prefix carries more weight.
#[derive(Debug, Clone)]
pub struct NistCalculator {
    pub max_n: usize,
}

impl NistCalculator {
    pub fn new(max_n: usize) -> Self {
        Self { max_n }
    }

    /// Information weight of every reference n-gram up to `max_n`.
    fn information_weights<'a>(&self, reference: &'a [String]) -> HashMap<&'a [String], f64> {
        let mut freq: BTreeMap<&[String], usize> = BTreeMap::new();
        for n in 1..=self.max_n {
            for (ngram, count) in ngram_counts(reference, n) {
                *freq.entry(ngram).or_insert(0) += count;
            }
        }

        let total_words = reference.len();
        freq.iter()
            .map(|(ngram, count)| {
                let prefix = &ngram[..ngram.len() - 1];
                let numerator = match freq.get(prefix) {
                    Some(prefix_count) if !prefix.is_empty() => *prefix_count,
                    _ => total_words,
                };
                (*ngram, (numerator as f64 / *count as f64).log2())
            })
            .collect()
    }

    /// NIST score of `hypothesis` against `reference`.
    ///
    /// Undefined when the hypothesis has fewer than `max_n` tokens (some order
    /// has no n-grams to average over) or the reference is empty.
    pub fn calculate_nist(&self, reference: &[String], hypothesis: &[String]) -> Result<f64> {
        if self.max_n == 0 {
            return Err(CoreError::Validation("NIST max_n must be at least 1".to_string()));
        }

        let weights = self.information_weights(reference);
        let mut precision_sum = 0.0;

        for n in 1..=self.max_n {
            let hyp_counts = ngram_counts(hypothesis, n);
            let ref_counts = ngram_counts(reference, n);

            let denominator: usize = hyp_counts.values().sum();
            if denominator == 0 {
                return Err(CoreError::Undefined(format!(
                    "no {}-grams in a hypothesis of {} tokens",
                    n,
                    hypothesis.len()
                )));
            }

            let numerator: f64 = clipped_overlap(&hyp_counts, &ref_counts)
                .into_iter()
                .map(|(ngram, count)| weights.get(ngram).copied().unwrap_or(0.0) * count as f64)
                .sum();

            precision_sum += numerator / denominator as f64;
        }

        if reference.is_empty() {
            return Err(CoreError::Undefined("empty reference".to_string()));
        }

        Ok(precision_sum * length_penalty(reference.len(), hypothesis.len()))
    }
}

impl Default for NistCalculator {
    fn default() -> Self {
        Self::new(5)
    }
}

impl DirectedMetric for NistCalculator {
    fn name(&self) -> &str {
        "NIST"
    }

    fn score_directed(&self, reference: &[String], hypothesis: &[String]) -> Result<f64> {
        self.calculate_nist(reference, hypothesis)
    }
}

/// Penalty for hypotheses shorter than the reference: `exp(-beta * ln(r)^2)`
/// for a length ratio `r` below 1, where `beta = ln(0.5)^2 / ln(1.5)^2`;
/// 1 at or above the reference length.
/// `reference_len` must be non-zero.
pub fn length_penalty(reference_len: usize, hypothesis_len: usize) -> f64 {
    let ratio = hypothesis_len as f64 / reference_len as f64;
    if 0.0 < ratio && ratio < 1.0 {
        let (ratio_x, score_x) = (1.5_f64, 0.5_f64);
        let beta = score_x.ln().powi(2) / ratio_x.ln().powi(2);
        (-beta * ratio.ln().powi(2)).exp()
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
