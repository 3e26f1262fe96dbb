use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use sts_eval_core::{CoreError, PairMetric, SentencePair};
use sts_eval_metrics::calculators::TfidfCosine;
use sts_eval_metrics::text::preprocess_text;
use sts_eval_metrics::vectorizer::{
    cosine_similarity, SparseVector, TfidfVectorizer, WHITESPACE_TOKEN_PATTERN,
};

fn corpus() -> Vec<&'static str> {
    vec!["The cat sat", "the dog sat", "a cat ran"]
}

// ===== Vectorizer Tests =====

#[test]
fn test_fit_sorted_vocabulary() {
    let model = TfidfVectorizer::new().fit(&corpus()).unwrap();

    // Single-character tokens never match the default pattern
    assert_eq!(model.feature_names(), &["cat", "dog", "ran", "sat", "the"]);
    assert_eq!(model.index_of("sat"), Some(3));
    assert!(!model.contains("a"));
}

#[test]
fn test_fit_min_df_prunes_rare_terms() {
    let model = TfidfVectorizer::new().with_min_df(2).fit(&corpus()).unwrap();

    assert_eq!(model.feature_names(), &["cat", "sat", "the"]);
    for idf in model.idf() {
        assert_relative_eq!(*idf, (4.0f64 / 3.0).ln() + 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_fit_min_df_too_high() {
    let result = TfidfVectorizer::new().with_min_df(4).fit(&corpus());

    match result {
        Err(CoreError::Validation(msg)) => assert!(msg.contains("min_df = 4")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_fit_empty_corpus() {
    let docs: Vec<&str> = vec!["a", "!"];
    assert!(matches!(
        TfidfVectorizer::new().fit(&docs),
        Err(CoreError::Validation(_))
    ));
}

#[test]
fn test_idf_without_smoothing() {
    let model = TfidfVectorizer::new()
        .with_smooth_idf(false)
        .fit(&corpus())
        .unwrap();
    let dog = model.index_of("dog").unwrap();

    assert_relative_eq!(model.idf()[dog], 3.0f64.ln() + 1.0, epsilon = 1e-12);
}

#[test]
fn test_transform_is_normalized() {
    let model = TfidfVectorizer::new().fit(&corpus()).unwrap();
    let vector = model.transform("the cat sat on the mat");

    assert_eq!(vector.nnz(), 3);
    assert_relative_eq!(vector.norm(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_transform_out_of_vocabulary() {
    let model = TfidfVectorizer::new().fit(&corpus()).unwrap();
    let vector = model.transform("zebra quartz");

    assert!(vector.is_zero());
    assert_eq!(vector.nnz(), 0);
}

#[test]
fn test_invalid_token_pattern() {
    assert!(TfidfVectorizer::new().with_token_pattern("(").is_err());
}

#[test]
fn test_cosine_similarity() {
    let a = SparseVector::new(vec![(2, 1.0), (0, 1.0)]);
    let b = SparseVector::new(vec![(0, 2.0)]);

    assert_eq!(a.entries(), &[(0, 1.0), (2, 1.0)]);
    assert_relative_eq!(cosine_similarity(&a, &b), 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    assert_eq!(cosine_similarity(&a, &SparseVector::default()), 0.0);
}

// ===== TF-IDF Cosine Tests =====

#[test]
fn test_tfidf_cosine_word_order_invariant() {
    let model = TfidfVectorizer::new().fit(&corpus()).unwrap();
    let metric = TfidfCosine::new("TF-IDF", model);

    let score = metric.score(&SentencePair::new("the cat sat", "sat the cat")).unwrap();
    assert_relative_eq!(score, 1.0, epsilon = 1e-12);
    assert_eq!(metric.name(), "TF-IDF");
}

#[test]
fn test_tfidf_cosine_disjoint_pair() {
    let model = TfidfVectorizer::new().fit(&corpus()).unwrap();
    let metric = TfidfCosine::new("TF-IDF", model);

    assert_eq!(metric.calculate("the dog", "cat ran"), 0.0);
    assert_eq!(metric.calculate("zebra", "zebra"), 0.0);
}

#[test]
fn test_tfidf_cosine_preprocessed() {
    let docs: Vec<String> = ["The cats are running", "A cat runs", "Dogs run"]
        .iter()
        .map(|doc| preprocess_text(doc))
        .collect();
    let model = TfidfVectorizer::new()
        .with_token_pattern(WHITESPACE_TOKEN_PATTERN)
        .unwrap()
        .fit(&docs)
        .unwrap();
    let metric = TfidfCosine::preprocessed("TF-IDF (preprocessed)", model);

    // Both sides stem to the same tokens
    let score = metric.calculate("cats running", "cat runs");
    assert_relative_eq!(score, 1.0, epsilon = 1e-12);
}
