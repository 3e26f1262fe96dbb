use sts_eval_core::{CoreError, PairMetric, Result, SentencePair};

use crate::text::lowercase_tokens;

/// Levenshtein table over token sequences.
///
/// `table[i][j]` is the minimum number of substitutions, insertions and
/// deletions turning `reference[..i]` into `hypothesis[..j]`.
pub fn edit_table<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Vec<Vec<usize>> {
    let mut d = vec![vec![0usize; hypothesis.len() + 1]; reference.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=reference.len() {
        for j in 1..=hypothesis.len() {
            d[i][j] = if reference[i - 1] == hypothesis[j - 1] {
                d[i - 1][j - 1]
            } else {
                let substitution = d[i - 1][j - 1] + 1;
                let insertion = d[i][j - 1] + 1;
                let deletion = d[i - 1][j] + 1;
                substitution.min(insertion).min(deletion)
            };
        }
    }

    d
}

/// Word-level edit count: the bottom-right cell of [`edit_table`].
pub fn word_errors<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> usize {
    edit_table(reference, hypothesis)[reference.len()][hypothesis.len()]
}

/// Word error rate treated as symmetric: one edit count normalised by each
/// side's token count, summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordErrorRate;

impl WordErrorRate {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, first: &[String], second: &[String]) -> Result<f64> {
        if first.is_empty() || second.is_empty() {
            return Err(CoreError::Undefined(
                "word error rate of a sentence with no tokens".to_string(),
            ));
        }

        let errors = word_errors(first, second) as f64;
        Ok(errors / first.len() as f64 + errors / second.len() as f64)
    }
}

impl PairMetric for WordErrorRate {
    fn name(&self) -> &str {
        "Word Error Rate"
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        let first = lowercase_tokens(&pair.first);
        let second = lowercase_tokens(&pair.second);
        self.calculate(&first, &second)
    }
}
