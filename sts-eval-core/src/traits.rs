use crate::domain::SentencePair;
use crate::error::Result;

/// A metric mapping one sentence pair to a scalar.
pub trait PairMetric {
    /// Display name used in reports.
    fn name(&self) -> &str;

    fn score(&self, pair: &SentencePair) -> Result<f64>;
}

/// A reference-vs-hypothesis metric over token sequences.
///
/// Implementations return [`CoreError::Undefined`](crate::CoreError::Undefined)
/// when the score has no value for the given inputs, so callers can decide
/// whether to mask it.
pub trait DirectedMetric {
    fn name(&self) -> &str;

    fn score_directed(&self, reference: &[String], hypothesis: &[String]) -> Result<f64>;
}

impl<M: PairMetric + ?Sized> PairMetric for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        (**self).score(pair)
    }
}
