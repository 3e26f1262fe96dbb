use serde::{Deserialize, Serialize};

/// One metric's scores, aligned by index with the dataset labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub name: String,
    pub scores: Vec<f64>,
}

impl MetricScores {
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Index and value of the highest score, ignoring NaN.
    pub fn argmax(&self) -> Option<(usize, f64)> {
        self.extreme(|candidate, best| candidate > best)
    }

    /// Index and value of the lowest score, ignoring NaN.
    pub fn argmin(&self) -> Option<(usize, f64)> {
        self.extreme(|candidate, best| candidate < best)
    }

    fn extreme(&self, better: impl Fn(f64, f64) -> bool) -> Option<(usize, f64)> {
        self.scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, s)| !s.is_nan())
            .fold(None, |best, (idx, score)| match best {
                Some((_, b)) if !better(score, b) => best,
                _ => Some((idx, score)),
            })
    }
}
