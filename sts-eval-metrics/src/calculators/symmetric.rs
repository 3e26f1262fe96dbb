use sts_eval_core::{DirectedMetric, PairMetric, Result, SentencePair};

use crate::text::lowercase_tokens;

/// Sums a directed metric over both directions of a pair:
/// `M(ref = a, hyp = b) + M(ref = b, hyp = a)`.
///
/// A direction the metric reports as undefined contributes 0. Any other
/// error is returned.
#[derive(Debug, Clone)]
pub struct Symmetrical<M> {
    inner: M,
}

impl<M: DirectedMetric> Symmetrical<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Score pre-tokenized sentences.
    pub fn calculate(&self, first: &[String], second: &[String]) -> Result<f64> {
        Ok(self.directed_or_zero(first, second)? + self.directed_or_zero(second, first)?)
    }

    fn directed_or_zero(&self, reference: &[String], hypothesis: &[String]) -> Result<f64> {
        match self.inner.score_directed(reference, hypothesis) {
            Err(err) if err.is_undefined() => {
                tracing::debug!(metric = self.inner.name(), %err, "scoring direction as 0");
                Ok(0.0)
            }
            other => other,
        }
    }
}

impl<M: DirectedMetric> PairMetric for Symmetrical<M> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        let first = lowercase_tokens(&pair.first);
        let second = lowercase_tokens(&pair.second);
        self.calculate(&first, &second)
    }
}
