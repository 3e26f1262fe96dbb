use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;
use sts_eval_core::*;

const SAMPLE: &str = "\
main-captions\tMSRvid\t2012test\t0001\t5.000\tA plane is taking off.\tAn air plane is taking off.
main-captions\tMSRvid\t2012test\t0004\t3.800\tA man is playing a large flute.\tA man is playing a flute.
main-news\tdeft-news\t2014\t0010\t0.500\tThe cat sat.\tStocks fell sharply.\textra\tfields
";

// ===== Parsing Tests =====

#[test]
fn test_parse_preserves_order_and_lengths() {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.labels(), &[5.0, 3.8, 0.5]);
    assert_eq!(dataset.pairs().len(), dataset.labels().len());
    assert_eq!(dataset.pairs()[1].second, "a man is playing a flute.");
}

#[test]
fn test_parse_lowercases_sentences() {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();

    assert_eq!(dataset.pairs()[0].first, "a plane is taking off.");
    assert_eq!(dataset.pairs()[0].second, "an air plane is taking off.");
}

#[test]
fn test_parse_ignores_extra_trailing_fields() {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();

    assert_eq!(
        dataset.pairs()[2],
        SentencePair::new("the cat sat.", "stocks fell sharply.")
    );
}

#[test]
fn test_parse_trailing_newline_is_not_a_line() {
    let content = format!("{}\n", SAMPLE.trim_end());
    let dataset = StsDataset::parse_str(&content).unwrap();

    assert_eq!(dataset.len(), 3);
}

#[rstest]
#[case("\n", 1)]
#[case("a\tb\tc\td\t1.0\tx\ty\n\na\tb\tc\td\t2.0\tx\ty\n", 2)]
#[case("a\tb\tc\td\t1.0\tx\ty\n   \t  \n", 2)]
fn test_parse_blank_line_is_fatal(#[case] content: &str, #[case] expected_line: usize) {
    match StsDataset::parse_str(content) {
        Err(CoreError::Parse { line, reason }) => {
            assert_eq!(line, expected_line);
            assert!(reason.contains("found 1"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_input() {
    let dataset = StsDataset::parse_str("").unwrap();

    assert!(dataset.is_empty());
    assert!(dataset.all_texts().is_empty());
}

#[rstest]
#[case("a\tb\tc\td\t1.0\tonly one sentence", 1)]
#[case("a\tb\tc", 1)]
#[case("no tabs here at all", 1)]
fn test_parse_too_few_fields(#[case] line: &str, #[case] expected_line: usize) {
    let err = StsDataset::parse_str(line).unwrap_err();

    match err {
        CoreError::Parse { line, reason } => {
            assert_eq!(line, expected_line);
            assert!(reason.contains("at least 7 fields"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_non_numeric_label_reports_line() {
    let content = format!("{}x\ty\tz\tw\tfive\ta\tb\n", SAMPLE);
    let err = StsDataset::parse_str(&content).unwrap_err();

    assert!(matches!(err, CoreError::Parse { line: 4, .. }));
    assert!(err.to_string().contains("five"));
}

// ===== File Loading Tests =====

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let dataset = StsDataset::from_path(file.path()).unwrap();

    assert_eq!(dataset.len(), 3);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StsDataset::from_path(dir.path().join("missing.csv")).unwrap_err();

    assert!(matches!(err, CoreError::Io(_)));
}

// ===== Dataset Views =====

#[test]
fn test_all_texts_lists_first_then_second_sentences() {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();
    let texts = dataset.all_texts();

    assert_eq!(texts.len(), 6);
    assert_eq!(texts[0], "a plane is taking off.");
    assert_eq!(texts[2], "the cat sat.");
    assert_eq!(texts[3], "an air plane is taking off.");
    assert_eq!(texts[5], "stocks fell sharply.");
}

#[rstest]
#[case(0..2, 2)]
#[case(1..10, 2)]
#[case(5..10, 0)]
#[case(0..0, 0)]
fn test_sample_is_clamped(#[case] range: std::ops::Range<usize>, #[case] expected: usize) {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();
    let sample = dataset.sample(range);

    assert_eq!(sample.len(), expected);
    assert_eq!(sample.labels().len(), sample.pairs().len());
}

#[test]
fn test_new_rejects_misaligned_sequences() {
    let result = StsDataset::new(vec![SentencePair::new("a", "b")], vec![]);

    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_iter_yields_label_with_pair() {
    let dataset = StsDataset::parse_str(SAMPLE).unwrap();
    let (label, pair) = dataset.iter().nth(1).unwrap();

    assert_eq!(label, 3.8);
    assert_eq!(pair.first, "a man is playing a large flute.");
}

// ===== Pair & Scores =====

#[test]
fn test_pair_swapped() {
    let pair = SentencePair::new("a", "b");

    assert_eq!(pair.swapped(), SentencePair::new("b", "a"));
    assert_eq!(pair.swapped().swapped(), pair);
}

#[test]
fn test_metric_scores_extremes_skip_nan() {
    let scores = MetricScores::new("NIST", vec![1.0, f64::NAN, 4.0, -2.0, 4.0]);

    assert_eq!(scores.argmax(), Some((2, 4.0)));
    assert_eq!(scores.argmin(), Some((3, -2.0)));
    assert_eq!(MetricScores::new("empty", vec![]).argmax(), None);
}
