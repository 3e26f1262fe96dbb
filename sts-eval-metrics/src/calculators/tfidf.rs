use sts_eval_core::{PairMetric, Result, SentencePair};

use crate::text::preprocess_text;
use crate::vectorizer::{cosine_similarity, TfidfModel};

/// Cosine similarity of the two sentences under a fitted TF-IDF model.
///
/// With `preprocess`, each sentence goes through [`preprocess_text`] before
/// vectorizing; the model must then have been fitted on preprocessed text.
#[derive(Debug, Clone)]
pub struct TfidfCosine {
    name: String,
    model: TfidfModel,
    preprocess: bool,
}

impl TfidfCosine {
    pub fn new(name: impl Into<String>, model: TfidfModel) -> Self {
        Self {
            name: name.into(),
            model,
            preprocess: false,
        }
    }

    pub fn preprocessed(name: impl Into<String>, model: TfidfModel) -> Self {
        Self {
            name: name.into(),
            model,
            preprocess: true,
        }
    }

    pub fn calculate(&self, first: &str, second: &str) -> f64 {
        let (first, second) = if self.preprocess {
            (preprocess_text(first), preprocess_text(second))
        } else {
            (first.to_string(), second.to_string())
        };
        cosine_similarity(&self.model.transform(&first), &self.model.transform(&second))
    }
}

impl PairMetric for TfidfCosine {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        Ok(self.calculate(&pair.first, &pair.second))
    }
}
