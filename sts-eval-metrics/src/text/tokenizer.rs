//! Penn Treebank style word tokenizer.
//!
//! Splits punctuation off words, separates clitics (`n't`, `'s`, `'ll`, ...)
//! and normalises double quotes to ``` `` ``` / `''`. Rules are applied in
//! order as regex substitutions over the whole text, then the result is split
//! on whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

type Rule = (Regex, &'static str);

fn rules(patterns: &[(&str, &'static str)]) -> Vec<Rule> {
    patterns
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "$1 $2 $3 "),
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.{2,}", " $0 "),
        (r"[;@#$%&]", " $0 "),
        (r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "$1 $2 $3 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
        (r"[*]", " $0 "),
    ])
});

static PARENS_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\]\[\(\)\{\}<>]").unwrap());

static DOUBLE_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"--").unwrap());

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"([»”’])", " $1 "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)\s", " $1 $2 "),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ])
});

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, (regex, replacement)| {
        regex.replace_all(&acc, *replacement).into_owned()
    })
}

/// Tokenize `text` into words and punctuation tokens.
///
/// Case is preserved; callers lowercase first when they need to.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let text = apply(&STARTING_QUOTES, text.to_string());
    let text = apply(&PUNCTUATION, text);
    let text = PARENS_BRACKETS.replace_all(&text, " $0 ").into_owned();
    let text = DOUBLE_DASHES.replace_all(&text, " -- ").into_owned();

    let text = apply(&ENDING_QUOTES, format!(" {} ", text));
    let text = apply(&CONTRACTIONS, text);

    text.split_whitespace().map(str::to_string).collect()
}

/// Lowercase then tokenize, the form every token-level metric consumes.
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    word_tokenize(&text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trailing_period_only_once() {
        assert_eq!(word_tokenize("mr. smith left."), vec!["mr.", "smith", "left", "."]);
    }

    #[test]
    fn keeps_decimal_commas() {
        assert_eq!(word_tokenize("1,000 cats, 2 dogs"), vec!["1,000", "cats", ",", "2", "dogs"]);
    }
}
