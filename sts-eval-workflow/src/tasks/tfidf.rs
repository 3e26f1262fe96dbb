use serde_json::json;
use sts_eval_core::{MetricScores, PairMetric, Result};
use sts_eval_metrics::text::preprocess_text;
use sts_eval_metrics::{cosine_similarity, TfidfCosine, TfidfVectorizer, WHITESPACE_TOKEN_PATTERN};

use super::{Task, TaskContext, TaskResult};
use crate::report::{PairRepresentation, TfidfDetails};

pub const RAW_TFIDF_NAME: &str = "default settings";
pub const PREPROCESSED_TFIDF_NAME: &str = "preprocessed text";

/// Fits a TF-IDF vectorizer on the raw corpus and another on the
/// preprocessed corpus, then scores every pair by cosine similarity under
/// each.
pub struct TfidfTask {
    min_df: usize,
}

impl TfidfTask {
    pub fn new(min_df: usize) -> Self {
        Self { min_df }
    }
}

impl Task for TfidfTask {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult> {
        let dataset = context.dataset()?;
        let corpus = dataset.all_texts();
        tracing::info!(texts = corpus.len(), min_df = self.min_df, "Fitting TF-IDF vocabularies");

        let raw_model = TfidfVectorizer::new().with_min_df(self.min_df).fit(&corpus)?;

        let preprocessed_corpus: Vec<String> = corpus.iter().map(|text| preprocess_text(text)).collect();
        let preprocessed_model = TfidfVectorizer::new()
            .with_token_pattern(WHITESPACE_TOKEN_PATTERN)?
            .with_min_df(self.min_df)
            .fit(&preprocessed_corpus)?;

        let preview = context.config.vocabulary_preview();
        let features = raw_model.feature_names();
        let end = preview.end.min(features.len());
        let vocabulary_preview = features[preview.start.min(end)..end].to_vec();

        let first_pair = dataset.pairs().first().map(|pair| {
            let first = raw_model.transform(&pair.first);
            let second = raw_model.transform(&pair.second);
            let similarity = cosine_similarity(&first, &second);
            PairRepresentation {
                first,
                second,
                similarity,
            }
        });

        let details = TfidfDetails {
            vocabulary_size: raw_model.len(),
            preprocessed_vocabulary_size: preprocessed_model.len(),
            vocabulary_preview,
            first_pair,
        };

        let metrics = [
            TfidfCosine::new(RAW_TFIDF_NAME, raw_model),
            TfidfCosine::preprocessed(PREPROCESSED_TFIDF_NAME, preprocessed_model),
        ];
        let mut computed = Vec::with_capacity(metrics.len());
        for metric in &metrics {
            let scores = dataset
                .pairs()
                .iter()
                .map(|pair| metric.score(pair))
                .collect::<Result<Vec<f64>>>()?;
            computed.push(MetricScores::new(metric.name(), scores));
        }

        let output = json!({
            "vocabulary_size": details.vocabulary_size,
            "preprocessed_vocabulary_size": details.preprocessed_vocabulary_size,
        });

        context.scores.extend(computed);
        context.report.tfidf = Some(details);
        Ok(TaskResult::success(output))
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}
