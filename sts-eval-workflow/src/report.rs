use serde::{Deserialize, Serialize};
use sts_eval_metrics::{ScoreSummary, SparseVector};

/// Which analysis a pipeline performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Analysis {
    Pearson,
    Nist,
    Tfidf,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Analysis::Pearson => write!(f, "pearson"),
            Analysis::Nist => write!(f, "nist"),
            Analysis::Tfidf => write!(f, "tfidf"),
        }
    }
}

/// Everything one run found.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub analysis: Analysis,
    pub source: String,
    pub pairs: usize,
    pub correlations: Vec<CorrelationRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<SampleInspection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<TfidfDetails>,
}

impl EvalReport {
    pub fn new(analysis: Analysis, source: impl Into<String>) -> Self {
        Self {
            analysis,
            source: source.into(),
            pairs: 0,
            correlations: Vec::new(),
            sample: None,
            tfidf: None,
        }
    }

    pub fn correlation(&self, metric: &str) -> Option<&CorrelationRow> {
        self.correlations.iter().find(|row| row.metric == metric)
    }
}

/// Pearson correlation of one metric with the labels. `r` is absent when the
/// metric's scores are constant.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationRow {
    pub metric: String,
    pub r: Option<f64>,
    pub p_value: Option<f64>,
    pub confidence_interval: Option<(f64, f64)>,
    pub sample_size: usize,
    pub summary: ScoreSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub index: usize,
    pub label: f64,
    pub score: f64,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymmetryCheck {
    pub first: String,
    pub second: String,
    pub forward: f64,
    pub backward: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleInspection {
    pub metric: String,
    pub start: usize,
    pub end: usize,
    pub rows: Vec<SampleRow>,
    pub symmetry: Option<SymmetryCheck>,
    pub highest: Option<SampleRow>,
    pub lowest: Option<SampleRow>,
}

/// Sparse vectors of the first dataset pair under the raw vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct PairRepresentation {
    pub first: SparseVector,
    pub second: SparseVector,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TfidfDetails {
    pub vocabulary_size: usize,
    pub preprocessed_vocabulary_size: usize,
    pub vocabulary_preview: Vec<String>,
    pub first_pair: Option<PairRepresentation>,
}
