use sts_eval_core::{PairMetric, Result, SentencePair};

/// Character-level Levenshtein distance between the raw sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl EditDistance {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, first: &str, second: &str) -> usize {
        strsim::levenshtein(first, second)
    }
}

impl PairMetric for EditDistance {
    fn name(&self) -> &str {
        "Edit Distance"
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        Ok(self.calculate(&pair.first, &pair.second) as f64)
    }
}
