//! TF-IDF vectorization over a fitted vocabulary.
//!
//! Fitting counts document frequencies, drops terms below `min_df`, sorts the
//! surviving terms (feature index = sorted position) and computes smoothed
//! inverse document frequencies. Transformed vectors are sparse and
//! L2-normalised.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use sts_eval_core::{CoreError, Result};

/// Words of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Any run of non-whitespace, for text that is already tokenized.
pub const WHITESPACE_TOKEN_PATTERN: &str = r"\S+";

static DEFAULT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_TOKEN_PATTERN).unwrap());

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    token_pattern: Regex,
    min_df: usize,
    smooth_idf: bool,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            token_pattern: DEFAULT_TOKEN_REGEX.clone(),
            min_df: 1,
            smooth_idf: true,
        }
    }

    /// Terms found in fewer than `min_df` documents are left out of the
    /// vocabulary.
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    pub fn with_token_pattern(mut self, pattern: &str) -> Result<Self> {
        self.token_pattern = Regex::new(pattern)
            .map_err(|e| CoreError::Validation(format!("invalid token pattern {:?}: {}", pattern, e)))?;
        Ok(self)
    }

    pub fn with_smooth_idf(mut self, smooth_idf: bool) -> Self {
        self.smooth_idf = smooth_idf;
        self
    }

    /// Lowercase `doc` and split it into terms.
    fn analyze(&self, doc: &str) -> Vec<String> {
        let doc = doc.to_lowercase();
        self.token_pattern
            .find_iter(&doc)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Learn the vocabulary and IDF weights of `docs`.
    pub fn fit<S: AsRef<str>>(&self, docs: &[S]) -> Result<TfidfModel> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in docs {
            let terms: HashSet<String> = self.analyze(doc.as_ref()).into_iter().collect();
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(CoreError::Validation(
                "empty vocabulary; the documents contain no tokens".to_string(),
            ));
        }

        let n_docs = docs.len() as f64;
        let (features, idf): (Vec<String>, Vec<f64>) = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df)
            .map(|(term, df)| {
                let df = df as f64;
                let idf = if self.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                } else {
                    (n_docs / df).ln() + 1.0
                };
                (term, idf)
            })
            .unzip();

        if features.is_empty() {
            return Err(CoreError::Validation(format!(
                "no terms remain after pruning with min_df = {}; try a lower min_df",
                self.min_df
            )));
        }

        tracing::info!(
            documents = docs.len(),
            vocabulary = features.len(),
            min_df = self.min_df,
            "Fitted TF-IDF vectorizer"
        );

        let vocabulary = features
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Ok(TfidfModel {
            vectorizer: self.clone(),
            vocabulary,
            features,
            idf,
        })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A fitted vectorizer.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vectorizer: TfidfVectorizer,
    vocabulary: HashMap<String, usize>,
    features: Vec<String>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Vocabulary terms in feature-index order.
    pub fn feature_names(&self) -> &[String] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Vectorize one document. Out-of-vocabulary terms are ignored.
    pub fn transform(&self, doc: &str) -> SparseVector {
        let mut term_counts: BTreeMap<usize, usize> = BTreeMap::new();
        for term in self.vectorizer.analyze(doc) {
            if let Some(idx) = self.index_of(&term) {
                *term_counts.entry(idx).or_insert(0) += 1;
            }
        }

        let entries: Vec<(usize, f64)> = term_counts
            .into_iter()
            .map(|(idx, count)| (idx, count as f64 * self.idf[idx]))
            .collect();

        SparseVector::new(entries).normalized()
    }
}

/// Sparse vector with entries sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, v)| *v == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self;
        }
        Self {
            entries: self.entries.into_iter().map(|(i, v)| (i, v / norm)).collect(),
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_val * b_val;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine of the angle between two sparse vectors; 0 when either is all
/// zeros.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}
