use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

use super::pair::SentencePair;
use crate::error::{CoreError, Result};

/// Minimum number of tab-separated fields on a benchmark line.
pub const MIN_FIELDS: usize = 7;
pub const LABEL_FIELD: usize = 4;
pub const FIRST_SENTENCE_FIELD: usize = 5;
pub const SECOND_SENTENCE_FIELD: usize = 6;

/// An STS benchmark split held fully in memory.
///
/// `pairs` and `labels` are parallel: `labels[i]` is the gold similarity of
/// `pairs[i]`, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StsDataset {
    pairs: Vec<SentencePair>,
    labels: Vec<f64>,
}

impl StsDataset {
    pub fn new(pairs: Vec<SentencePair>, labels: Vec<f64>) -> Result<Self> {
        if pairs.len() != labels.len() {
            return Err(CoreError::Validation(format!(
                "{} sentence pairs but {} labels",
                pairs.len(),
                labels.len()
            )));
        }
        Ok(Self { pairs, labels })
    }

    /// Read a tab-separated benchmark file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        tracing::info!("Found {} STS pairs in {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut pairs = Vec::new();
        let mut labels = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let (label, pair) = parse_line(line.trim(), idx + 1)?;
            labels.push(label);
            pairs.push(pair);
        }

        Ok(Self { pairs, labels })
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[SentencePair] {
        &self.pairs
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &SentencePair)> {
        self.labels.iter().copied().zip(self.pairs.iter())
    }

    /// A window of the dataset, clamped to its bounds.
    pub fn sample(&self, range: Range<usize>) -> StsDataset {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Self {
            pairs: self.pairs[start..end].to_vec(),
            labels: self.labels[start..end].to_vec(),
        }
    }

    /// Every first sentence followed by every second sentence.
    pub fn all_texts(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .map(|p| p.first.as_str())
            .chain(self.pairs.iter().map(|p| p.second.as_str()))
            .collect()
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<(f64, SentencePair)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(CoreError::parse(
            line_number,
            format!("expected at least {} fields, found {}", MIN_FIELDS, fields.len()),
        ));
    }

    let raw_label = fields[LABEL_FIELD].trim();
    let label: f64 = raw_label.parse().map_err(|_| {
        CoreError::parse(line_number, format!("label {:?} is not a number", raw_label))
    })?;

    let pair = SentencePair::new(
        fields[FIRST_SENTENCE_FIELD].to_lowercase(),
        fields[SECOND_SENTENCE_FIELD].to_lowercase(),
    );

    Ok((label, pair))
}
