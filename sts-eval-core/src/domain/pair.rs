use serde::{Deserialize, Serialize};

/// Two sentences compared by every metric.
///
/// Order is significant for directional metrics; symmetrical metrics score
/// both `(first, second)` and `(second, first)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub first: String,
    pub second: String,
}

impl SentencePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}
