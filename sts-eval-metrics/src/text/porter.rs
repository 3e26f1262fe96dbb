//! Porter suffix-stripping stemmer.
//!
//! The rules are the 1980 paper's with the extensions NLTK applies by
//! default:
//! - a small pool of irregular forms (`dying` → `die`, `skies` → `sky`);
//! - four-letter `-ies` / `-ied` words keep their `e` (`ties` → `tie`);
//! - a final `y` becomes `i` only after a consonant (`says` → `say`);
//! - `-alli` is reduced first and step 2 rerun; `-fulli` → `-ful`; `-bli` →
//!   `-ble`; `-logi` → `-log` measured with the `l` kept in the stem;
//! - a two-letter vowel-consonant stem counts as cvc.
//!
//! Words of one or two letters and words containing non-ASCII-letter bytes
//! are returned lowercased but otherwise unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static IRREGULAR_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let forms: &[(&str, &[&str])] = &[
        ("sky", &["sky", "skies"]),
        ("die", &["dying"]),
        ("lie", &["lying"]),
        ("tie", &["tying"]),
        ("news", &["news"]),
        ("inning", &["innings", "inning"]),
        ("outing", &["outings", "outing"]),
        ("canning", &["cannings", "canning"]),
        ("howe", &["howe"]),
        ("proceed", &["proceed"]),
        ("exceed", &["exceed"]),
        ("succeed", &["succeed"]),
    ];
    forms
        .iter()
        .flat_map(|(stem, words)| words.iter().map(move |word| (*word, *stem)))
        .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(stem) = IRREGULAR_FORMS.get(lower.as_str()) {
            return (*stem).to_string();
        }
        if lower.len() <= 2 || !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return lower;
        }

        let mut state = Stem::new(lower.into_bytes());
        state.run();
        state.into_string()
    }
}

/// Working buffer. `k` is the index of the last letter of the current stem
/// and `j` marks the end of the stem preceding a matched suffix; both may go
/// to -1 when a suffix spans the whole word.
struct Stem {
    b: Vec<u8>,
    k: isize,
    j: isize,
}

impl Stem {
    fn new(b: Vec<u8>) -> Self {
        let k = b.len() as isize - 1;
        Self { b, k, j: 0 }
    }

    fn into_string(mut self) -> String {
        self.b.truncate((self.k + 1) as usize);
        // Only ASCII letters ever reach the buffer.
        String::from_utf8(self.b).unwrap_or_default()
    }

    fn at(&self, i: isize) -> u8 {
        self.b[i as usize]
    }

    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[0..=j]`.
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    fn double_consonant(&self, j: isize) -> bool {
        j >= 1 && self.at(j) == self.at(j - 1) && self.cons(j)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is
    /// not w, x or y; or a whole two-letter stem that is vowel-consonant.
    fn cvc(&self, i: isize) -> bool {
        if i == 1 {
            return !self.cons(0) && self.cons(1);
        }
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        let suffix = suffix.as_bytes();
        let len = suffix.len() as isize;
        if len > self.k + 1 {
            return false;
        }
        let start = (self.k - len + 1) as usize;
        if &self.b[start..=self.k as usize] != suffix {
            return false;
        }
        self.j = self.k - len;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        let start = (self.j + 1) as usize;
        self.b.truncate(start);
        self.b.extend_from_slice(replacement.as_bytes());
        self.k = self.j + replacement.len() as isize;
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.m() > 0 {
            self.set_to(replacement);
        }
    }

    fn run(&mut self) {
        self.step1ab();
        if self.k > 0 {
            self.step1c();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
        }
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to(if self.k == 3 { "ie" } else { "i" });
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }

        if self.ends("ied") {
            self.set_to(if self.k == 3 { "ie" } else { "i" });
        } else if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), b'l' | b's' | b'z') {
                    self.k += 1;
                }
            } else if self.m() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y → i after a consonant that is not the first letter.
    fn step1c(&mut self) {
        if self.ends("y") && self.j >= 1 && self.cons(self.j) {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffixes map to single ones.
    fn step2(&mut self) {
        if self.ends("alli") && self.m() > 0 {
            self.set_to("al");
            self.step2();
            return;
        }
        if self.ends("logi") {
            // The measure includes the `l`, so `theologi` qualifies.
            self.j += 1;
            if self.m() > 0 {
                self.set_to("og");
            }
            return;
        }

        const RULES: &[(u8, &[(&str, &str)])] = &[
            (b'a', &[("ational", "ate"), ("tional", "tion")]),
            (b'c', &[("enci", "ence"), ("anci", "ance")]),
            (b'e', &[("izer", "ize")]),
            (
                b'l',
                &[
                    ("bli", "ble"),
                    ("alli", "al"),
                    ("entli", "ent"),
                    ("eli", "e"),
                    ("ousli", "ous"),
                    ("fulli", "ful"),
                ],
            ),
            (b'o', &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")]),
            (
                b's',
                &[
                    ("alism", "al"),
                    ("iveness", "ive"),
                    ("fulness", "ful"),
                    ("ousness", "ous"),
                ],
            ),
            (b't', &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")]),
        ];
        let key = self.at(self.k - 1);
        self.apply_first(RULES, key);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        const RULES: &[(u8, &[(&str, &str)])] = &[
            (b'e', &[("icate", "ic"), ("ative", ""), ("alize", "al")]),
            (b'i', &[("iciti", "ic")]),
            (b'l', &[("ical", "ic"), ("ful", "")]),
            (b's', &[("ness", "")]),
        ];
        let key = self.at(self.k);
        self.apply_first(RULES, key);
    }

    fn apply_first(&mut self, rules: &[(u8, &[(&str, &str)])], key: u8) {
        let Some((_, candidates)) = rules.iter().find(|(c, _)| *c == key) else {
            return;
        };
        for (suffix, replacement) in candidates.iter() {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Strips -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        let matched = match self.at(self.k - 1) {
            b'a' => self.ends("al"),
            b'c' => self.ends("ance") || self.ends("ence"),
            b'e' => self.ends("er"),
            b'i' => self.ends("ic"),
            b'l' => self.ends("able") || self.ends("ible"),
            b'n' => {
                self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent")
            }
            b'o' => {
                (self.ends("ion") && self.j >= 0 && matches!(self.at(self.j), b's' | b't'))
                    || self.ends("ou")
            }
            b's' => self.ends("ism"),
            b't' => self.ends("ate") || self.ends("iti"),
            b'u' => self.ends("ous"),
            b'v' => self.ends("ive"),
            b'z' => self.ends("ize"),
            _ => false,
        };
        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Removes a final -e and reduces -ll when m > 1.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_consonant(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_pass_through() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("A"), "a");
    }

    #[test]
    fn non_ascii_words_pass_through() {
        assert_eq!(PorterStemmer::new().stem("Café"), "café");
    }

    #[test]
    fn suffix_spanning_whole_word() {
        // "ing" leaves no stem; the vowel check rejects it.
        assert_eq!(PorterStemmer::new().stem("ing"), "ing");
    }
}
