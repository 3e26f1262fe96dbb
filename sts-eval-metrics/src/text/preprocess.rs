use super::porter::PorterStemmer;
use super::stopwords::is_stopword;
use super::tokenizer::word_tokenize;

/// ASCII punctuation characters, in code-point order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A token is punctuation when it occurs as a contiguous run inside
/// [`PUNCTUATION`]; this covers every single punctuation character and also
/// drops the empty string.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}

/// Normalise one sentence for the preprocessed TF-IDF variant.
///
/// Tokenizes, lowercases and stems every token, then drops punctuation and
/// stopwords. Stopwords are matched against the stemmed form. The surviving
/// tokens are joined by single spaces.
pub fn preprocess_text(text: &str) -> String {
    let stemmer = PorterStemmer::new();

    word_tokenize(text)
        .iter()
        .map(|tok| stemmer.stem(&tok.to_lowercase()))
        .filter(|tok| !is_punctuation(tok))
        .filter(|tok| !is_stopword(tok))
        .collect::<Vec<_>>()
        .join(" ")
}
