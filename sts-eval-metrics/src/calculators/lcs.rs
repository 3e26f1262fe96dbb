use std::collections::HashMap;
use sts_eval_core::{PairMetric, Result, SentencePair};

/// Sequences shorter than this are never subject to auto-junk.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest-matching-block finder over characters.
///
/// The second sequence is indexed by character. With `autojunk`, characters
/// of a long second sequence that occur in more than 1% of its positions
/// (plus one) are left out of the index, so blocks cannot start on them;
/// the best block is still extended over them afterwards.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str, autojunk: bool) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    pub fn find_longest_match(&self) -> Match {
        self.find_longest_match_in(0, self.a.len(), 0, self.b.len())
    }

    /// Longest block within `a[alo..ahi]` and `b[blo..bhi]`. Ties go to the
    /// block starting earliest in `a`, then earliest in `b`.
    pub fn find_longest_match_in(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending with a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Match {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }
}

/// Length of the longest contiguous run of characters shared by both raw
/// sentences.
#[derive(Debug, Clone, Copy)]
pub struct LongestCommonSubstring {
    pub autojunk: bool,
}

impl LongestCommonSubstring {
    pub fn new(autojunk: bool) -> Self {
        Self { autojunk }
    }

    pub fn calculate(&self, first: &str, second: &str) -> usize {
        SequenceMatcher::new(first, second, self.autojunk)
            .find_longest_match()
            .size
    }
}

impl Default for LongestCommonSubstring {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PairMetric for LongestCommonSubstring {
    fn name(&self) -> &str {
        "Longest common substring"
    }

    fn score(&self, pair: &SentencePair) -> Result<f64> {
        Ok(self.calculate(&pair.first, &pair.second) as f64)
    }
}
