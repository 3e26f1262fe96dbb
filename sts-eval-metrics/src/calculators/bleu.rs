use serde::{Deserialize, Serialize};
use sts_eval_core::{DirectedMetric, Result};

use super::{clipped_overlap, ngram_counts};

/// How zero n-gram precisions are kept from zeroing the geometric mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMethod {
    /// Replace a zero precision by the smallest positive normal float.
    #[default]
    Floor,
    /// Add 0.1 to zero numerators.
    AddEpsilon,
    /// Add one to numerator and denominator for orders above unigrams.
    AddOne,
}

const EPSILON: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct BleuCalculator {
    pub max_n: usize,
    pub smoothing: SmoothingMethod,
    /// Re-weight uniformly over the hypothesis length when it is shorter
    /// than `max_n`.
    pub auto_reweigh: bool,
}

impl BleuCalculator {
    pub fn new(max_n: usize) -> Self {
        Self {
            max_n,
            smoothing: SmoothingMethod::Floor,
            auto_reweigh: false,
        }
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingMethod) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_auto_reweigh(mut self, auto_reweigh: bool) -> Self {
        self.auto_reweigh = auto_reweigh;
        self
    }

    /// Clipped n-gram matches and the hypothesis n-gram count (at least 1).
    fn modified_precision(&self, reference: &[String], hypothesis: &[String], n: usize) -> (usize, usize) {
        let hyp_counts = ngram_counts(hypothesis, n);
        let ref_counts = ngram_counts(reference, n);

        let numerator = clipped_overlap(&hyp_counts, &ref_counts)
            .into_iter()
            .map(|(_, count)| count)
            .sum();
        let denominator = hyp_counts.values().sum::<usize>().max(1);

        (numerator, denominator)
    }

    fn smooth(&self, order: usize, numerator: usize, denominator: usize) -> f64 {
        let (num, den) = (numerator as f64, denominator as f64);
        match self.smoothing {
            SmoothingMethod::Floor if numerator == 0 => f64::MIN_POSITIVE,
            SmoothingMethod::AddEpsilon if numerator == 0 => EPSILON / den,
            SmoothingMethod::AddOne if order > 1 => (num + 1.0) / (den + 1.0),
            _ => num / den,
        }
    }

    /// Calculate brevity penalty
    fn brevity_penalty(&self, reference_len: usize, hypothesis_len: usize) -> f64 {
        if hypothesis_len > reference_len {
            1.0
        } else if hypothesis_len == 0 {
            0.0
        } else {
            (1.0 - reference_len as f64 / hypothesis_len as f64).exp()
        }
    }

    /// BLEU score and the smoothed per-order precisions.
    pub fn calculate_bleu(&self, reference: &[String], hypothesis: &[String]) -> (f64, Vec<f64>) {
        let counts: Vec<(usize, usize)> = (1..=self.max_n)
            .map(|n| self.modified_precision(reference, hypothesis, n))
            .collect();

        // No unigram matches means no higher-order matches either.
        if counts.first().map_or(true, |(num, _)| *num == 0) {
            return (0.0, vec![0.0; self.max_n]);
        }

        let precisions: Vec<f64> = counts
            .iter()
            .enumerate()
            .map(|(idx, (num, den))| self.smooth(idx + 1, *num, *den))
            .collect();

        let orders = if self.auto_reweigh && hypothesis.len() < self.max_n {
            hypothesis.len()
        } else {
            self.max_n
        };
        let weight = 1.0 / orders as f64;
        let log_sum: f64 = precisions.iter().take(orders).map(|p| weight * p.ln()).sum();

        let bp = self.brevity_penalty(reference.len(), hypothesis.len());
        (bp * log_sum.exp(), precisions)
    }
}

impl Default for BleuCalculator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl DirectedMetric for BleuCalculator {
    fn name(&self) -> &str {
        "BLEU"
    }

    fn score_directed(&self, reference: &[String], hypothesis: &[String]) -> Result<f64> {
        let (bleu, _) = self.calculate_bleu(reference, hypothesis);
        Ok(bleu)
    }
}
